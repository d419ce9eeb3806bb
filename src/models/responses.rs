use serde::{Deserialize, Serialize};
use crate::models::domain::{PatientId, RiskLevel};

/// One entry of a batch assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRisk {
    #[serde(rename = "patientId")]
    pub patient_id: PatientId,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

/// Response for the batch assessment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAssessmentResponse {
    pub assessments: Vec<PatientRisk>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
