use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::RiskAssessor;
use crate::models::{BatchAssessmentRequest, BatchAssessmentResponse, ErrorResponse, HealthResponse, PatientId, PatientRisk};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assessor: RiskAssessor,
}

/// Configure all assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/diabetes/batch", web::post().to(assess_batch))
        .route("/diabetes/{patient_id}", web::get().to(assess_patient))
        .route("/diabetes/{patient_id}/report", web::get().to(assessment_report));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Risk tier for one patient
///
/// GET /api/v1/diabetes/{patientId}
///
/// Always answers 200 with a tier label such as `"BORDERLINE"`; a missing
/// patient or an unreachable upstream yields `"NONE"`.
async fn assess_patient(
    state: web::Data<AppState>,
    path: web::Path<PatientId>,
) -> impl Responder {
    let patient_id = path.into_inner();
    tracing::info!("Assessing diabetes risk for patient {}", patient_id);

    let risk_level = state.assessor.assess_risk(patient_id).await;

    tracing::info!("Assessment done for patient {}: {}", patient_id, risk_level);
    HttpResponse::Ok().json(risk_level)
}

/// Detailed assessment for one patient
///
/// GET /api/v1/diabetes/{patientId}/report
async fn assessment_report(
    state: web::Data<AppState>,
    path: web::Path<PatientId>,
) -> impl Responder {
    let report = state.assessor.assess(path.into_inner()).await;
    HttpResponse::Ok().json(report)
}

/// Risk tiers for several patients
///
/// POST /api/v1/diabetes/batch
///
/// Request body:
/// ```json
/// {
///   "patientIds": [1, 2, 3]
/// }
/// ```
async fn assess_batch(
    state: web::Data<AppState>,
    req: web::Json<BatchAssessmentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for batch assessment: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut assessments = Vec::with_capacity(req.patient_ids.len());
    for &patient_id in &req.patient_ids {
        let risk_level = state.assessor.assess_risk(patient_id).await;
        assessments.push(PatientRisk { patient_id, risk_level });
    }

    tracing::info!("Assessed {} patients in batch", assessments.len());

    HttpResponse::Ok().json(BatchAssessmentResponse {
        total: assessments.len(),
        assessments,
    })
}
