use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Patient identifier as issued by the patient directory
pub type PatientId = i64;

/// Demographic record served by the patient directory
///
/// Only the fields the assessment needs are kept; names, address and phone
/// number are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub id: PatientId,
    #[serde(alias = "birthDate", default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Gender,
}

/// Patient gender as a closed tag
///
/// The directory stores single letter codes. Anything other than exactly `M`
/// or `F` (case-insensitive, no surrounding whitespace) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("M") {
            Gender::Male
        } else if code.eq_ignore_ascii_case("F") {
            Gender::Female
        } else {
            Gender::Unknown
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code: Option<String> = Option::deserialize(deserializer)?;
        Ok(code.as_deref().map(Gender::from_code).unwrap_or_default())
    }
}

/// Free-text note attached to a patient by the notes service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalNote {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "patId", alias = "patientId", default)]
    pub patient_id: PatientId,
    #[serde(rename = "note", alias = "text", default)]
    pub text: Option<String>,
}

/// Diabetes risk tier, ordered by severity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    None,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl RiskLevel {
    /// Wire label, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "NONE",
            RiskLevel::Borderline => "BORDERLINE",
            RiskLevel::InDanger => "IN_DANGER",
            RiskLevel::EarlyOnset => "EARLY_ONSET",
        }
    }

    /// Label shown to practitioners
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::None => "Aucun risque",
            RiskLevel::Borderline => "Risque limité",
            RiskLevel::InDanger => "Danger",
            RiskLevel::EarlyOnset => "Apparition précoce",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far an assessment got before producing its tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentStatus {
    /// Patient resolved and notes scanned (possibly an empty set)
    Assessed,
    /// The directory has no such patient
    PatientNotFound,
    /// The directory could not be reached or answered garbage
    PatientUnavailable,
}

/// Full record of one assessment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "patientId")]
    pub patient_id: PatientId,
    pub status: AssessmentStatus,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    #[serde(rename = "notesConsidered")]
    pub notes_considered: usize,
    #[serde(rename = "notesDegraded")]
    pub notes_degraded: bool,
    pub triggers: Vec<String>,
    #[serde(rename = "triggerCount")]
    pub trigger_count: usize,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl Assessment {
    /// Assessment that stopped at the patient gate
    pub fn unresolved(patient_id: PatientId, status: AssessmentStatus) -> Self {
        let risk_level = RiskLevel::default();
        Self {
            patient_id,
            status,
            age: None,
            gender: None,
            notes_considered: 0,
            notes_degraded: false,
            triggers: vec![],
            trigger_count: 0,
            risk_level,
            display_name: risk_level.display_name().to_string(),
        }
    }
}
