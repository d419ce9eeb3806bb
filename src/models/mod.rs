// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Assessment, AssessmentStatus, ClinicalNote, Gender, PatientId, PatientRecord, RiskLevel};
pub use requests::BatchAssessmentRequest;
pub use responses::{BatchAssessmentResponse, ErrorResponse, HealthResponse, PatientRisk};
