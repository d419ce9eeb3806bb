use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::PatientId;

/// Request to assess several patients in one call
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchAssessmentRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(alias = "patient_ids", rename = "patientIds")]
    pub patient_ids: Vec<PatientId>,
}
