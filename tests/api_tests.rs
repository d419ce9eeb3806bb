// HTTP API tests using the actix-web test harness

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use diabetes_risk::core::RiskAssessor;
use diabetes_risk::models::{
    Assessment, AssessmentStatus, BatchAssessmentResponse, ClinicalNote, ErrorResponse, Gender,
    HealthResponse, PatientId, PatientRecord, RiskLevel,
};
use diabetes_risk::routes::{self, errors, AppState};
use diabetes_risk::services::{NotesRepository, PatientDirectory, UpstreamError};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory stand-in for both upstream services
#[derive(Default)]
struct Registry {
    patients: HashMap<PatientId, PatientRecord>,
    notes: HashMap<PatientId, Vec<&'static str>>,
}

#[async_trait]
impl PatientDirectory for Registry {
    async fn get_patient(&self, patient_id: PatientId) -> Result<PatientRecord, UpstreamError> {
        self.patients
            .get(&patient_id)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound(format!("patient {}", patient_id)))
    }
}

#[async_trait]
impl NotesRepository for Registry {
    async fn get_notes(&self, patient_id: PatientId) -> Result<Vec<ClinicalNote>, UpstreamError> {
        Ok(self
            .notes
            .get(&patient_id)
            .map(|texts| {
                texts
                    .iter()
                    .map(|t| ClinicalNote { id: None, patient_id, text: Some(t.to_string()) })
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn born_years_ago(years: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(Local::now().date_naive().year() - years, 1, 1)
}

fn registry() -> Arc<Registry> {
    let mut registry = Registry::default();
    registry.patients.insert(1, PatientRecord { id: 1, birthdate: born_years_ago(58), gender: Gender::Female });
    registry.patients.insert(2, PatientRecord { id: 2, birthdate: born_years_ago(79), gender: Gender::Male });
    registry.patients.insert(3, PatientRecord { id: 3, birthdate: born_years_ago(22), gender: Gender::Male });
    registry.notes.insert(1, vec!["Le patient déclare qu'il 'se sent très bien' Poids égal ou inférieur au poids recommandé"]);
    registry.notes.insert(2, vec!["Le patient déclare qu'il ressent beaucoup de stress au travail. Il se plaint également que son audition est anormale dernièrement", "Taille, Poids, Cholestérol, Vertiges et Réaction"]);
    registry.notes.insert(3, vec!["Fumeur, taille et poids anormal, microalbumine élevée"]);
    Arc::new(registry)
}

macro_rules! init_app {
    () => {{
        let registry = registry();
        let state = AppState {
            assessor: RiskAssessor::new(registry.clone(), registry),
        };
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(errors::json_config())
                .app_data(errors::path_config())
                .configure(routes::configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.status, "healthy");
}

#[actix_web::test]
async fn test_tier_label() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/diabetes/1").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"\"NONE\""));

    let req = test::TestRequest::get().uri("/api/v1/diabetes/2").to_request();
    let level: RiskLevel = test::call_and_read_body_json(&app, req).await;
    // anormal, taille, poids, cholestérol, vertiges, réaction
    assert_eq!(level, RiskLevel::InDanger);

    let req = test::TestRequest::get().uri("/api/v1/diabetes/3").to_request();
    let level: RiskLevel = test::call_and_read_body_json(&app, req).await;
    assert_eq!(level, RiskLevel::EarlyOnset);
}

#[actix_web::test]
async fn test_unknown_patient_is_none() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/diabetes/404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let level: RiskLevel = test::read_body_json(resp).await;
    assert_eq!(level, RiskLevel::None);
}

#[actix_web::test]
async fn test_report() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/diabetes/3/report").to_request();
    let report: Assessment = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report.status, AssessmentStatus::Assessed);
    assert_eq!(report.age, Some(22));
    assert_eq!(report.gender, Some(Gender::Male));
    assert_eq!(report.trigger_count, 5);
    assert_eq!(report.display_name, "Apparition précoce");

    let req = test::TestRequest::get().uri("/api/v1/diabetes/404/report").to_request();
    let report: Assessment = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report.status, AssessmentStatus::PatientNotFound);
    assert_eq!(report.risk_level, RiskLevel::None);
}

#[actix_web::test]
async fn test_invalid_patient_id() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/diabetes/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_patient_id");
}

#[actix_web::test]
async fn test_batch() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/diabetes/batch")
        .set_json(serde_json::json!({"patientIds": [1, 2, 404]}))
        .to_request();
    let body: BatchAssessmentResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total, 3);
    let levels: Vec<_> = body.assessments.iter().map(|a| (a.patient_id, a.risk_level)).collect();
    assert_eq!(levels, vec![(1, RiskLevel::None), (2, RiskLevel::InDanger), (404, RiskLevel::None)]);
}

#[actix_web::test]
async fn test_batch_validation() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/diabetes/batch")
        .set_json(serde_json::json!({"patientIds": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/diabetes/batch")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}
