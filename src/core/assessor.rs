use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::core::{age::age_in_years, classifier::classify, triggers::find_triggers};
use crate::models::{Assessment, AssessmentStatus, ClinicalNote, Gender, PatientId, RiskLevel};
use crate::services::{NotesRepository, PatientDirectory};

/// Patient data needed once the directory has answered
#[derive(Debug, Clone, Copy)]
struct PatientContext {
    age: u32,
    gender: Gender,
}

/// Outcome of the patient gate: either a patient to assess or a final answer
enum PatientResolution {
    Resolved(PatientContext),
    Unresolved(AssessmentStatus),
}

/// Notes fetched for a patient, with failures already downgraded
struct NoteSet {
    notes: Vec<ClinicalNote>,
    degraded: bool,
}

/// Diabetes risk assessment orchestrator
///
/// # Pipeline
/// 1. Resolve the patient (gate: no notes are fetched without a patient)
/// 2. Compute age from the birth date
/// 3. Fetch notes, downgrading any failure to an empty set
/// 4. Count distinct trigger terms
/// 5. Classify
///
/// Upstream failures never escape; the worst case is `RiskLevel::None`.
#[derive(Clone)]
pub struct RiskAssessor {
    patients: Arc<dyn PatientDirectory>,
    notes: Arc<dyn NotesRepository>,
}

impl RiskAssessor {
    pub fn new(patients: Arc<dyn PatientDirectory>, notes: Arc<dyn NotesRepository>) -> Self {
        Self { patients, notes }
    }

    /// Risk tier for a patient, evaluated today
    pub async fn assess_risk(&self, patient_id: PatientId) -> RiskLevel {
        self.assess(patient_id).await.risk_level
    }

    /// Full assessment for a patient, evaluated today
    pub async fn assess(&self, patient_id: PatientId) -> Assessment {
        self.assess_on(patient_id, Local::now().date_naive()).await
    }

    /// Full assessment for a patient with ages computed as of `today`
    pub async fn assess_on(&self, patient_id: PatientId, today: NaiveDate) -> Assessment {
        let context = match self.resolve_patient(patient_id, today).await {
            PatientResolution::Resolved(context) => context,
            PatientResolution::Unresolved(status) => {
                return Assessment::unresolved(patient_id, status);
            }
        };

        let NoteSet { notes, degraded } = self.fetch_notes(patient_id).await;

        let triggers = find_triggers(notes.iter().map(|note| note.text.as_deref()));
        let trigger_count = triggers.len();
        tracing::info!("Distinct triggers found for patient {}: {}", patient_id, trigger_count);

        let risk_level = classify(context.age, context.gender, trigger_count);
        tracing::info!("Risk level for patient {}: {}", patient_id, risk_level);

        Assessment {
            patient_id,
            status: AssessmentStatus::Assessed,
            age: Some(context.age),
            gender: Some(context.gender),
            notes_considered: notes.len(),
            notes_degraded: degraded,
            triggers: triggers.into_iter().map(str::to_string).collect(),
            trigger_count,
            risk_level,
            display_name: risk_level.display_name().to_string(),
        }
    }

    async fn resolve_patient(&self, patient_id: PatientId, today: NaiveDate) -> PatientResolution {
        match self.patients.get_patient(patient_id).await {
            Ok(patient) => {
                if patient.birthdate.is_none() {
                    tracing::warn!("Patient {} has no birth date, using age 0", patient_id);
                }
                PatientResolution::Resolved(PatientContext {
                    age: age_in_years(patient.birthdate, today),
                    gender: patient.gender,
                })
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!("Patient {} not found, cannot assess: {}", patient_id, e);
                PatientResolution::Unresolved(AssessmentStatus::PatientNotFound)
            }
            Err(e) => {
                tracing::error!("Failed to fetch patient {}: {}", patient_id, e);
                PatientResolution::Unresolved(AssessmentStatus::PatientUnavailable)
            }
        }
    }

    async fn fetch_notes(&self, patient_id: PatientId) -> NoteSet {
        match self.notes.get_notes(patient_id).await {
            Ok(notes) => {
                if notes.is_empty() {
                    tracing::info!("No notes found for patient {}", patient_id);
                }
                NoteSet { notes, degraded: false }
            }
            Err(e) if e.is_not_found() => {
                tracing::info!("No notes found for patient {}", patient_id);
                NoteSet { notes: vec![], degraded: false }
            }
            Err(e) => {
                tracing::error!("Failed to fetch notes for patient {}, assessing without them: {}", patient_id, e);
                NoteSet { notes: vec![], degraded: true }
            }
        }
    }
}
