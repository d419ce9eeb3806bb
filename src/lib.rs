//! Diabetes risk assessment service
//!
//! Aggregates a patient's demographics and clinical notes from the patient
//! and notes services, counts the clinical trigger terms found in the notes
//! and maps age, gender and trigger count to a risk tier.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, count_triggers, RiskAssessor, TRIGGER_TERMS};
pub use crate::models::{Assessment, AssessmentStatus, ClinicalNote, Gender, PatientRecord, RiskLevel};
