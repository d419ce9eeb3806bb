// Service exports
pub mod error;
pub mod http;
pub mod notes;
pub mod patients;

use async_trait::async_trait;
use crate::models::{ClinicalNote, PatientId, PatientRecord};

pub use error::UpstreamError;
pub use http::{BasicCredentials, UpstreamEndpoint};
pub use notes::NotesServiceClient;
pub use patients::PatientServiceClient;

/// Source of patient demographics
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    /// Fetch one patient, `UpstreamError::NotFound` when it does not exist
    async fn get_patient(&self, patient_id: PatientId) -> Result<PatientRecord, UpstreamError>;
}

/// Source of clinical notes
#[async_trait]
pub trait NotesRepository: Send + Sync {
    /// Fetch every note attached to a patient
    async fn get_notes(&self, patient_id: PatientId) -> Result<Vec<ClinicalNote>, UpstreamError>;
}
