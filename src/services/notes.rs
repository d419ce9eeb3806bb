use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{NotesRepository, UpstreamEndpoint, UpstreamError};
use crate::models::{ClinicalNote, PatientId};

/// HTTP client for the notes service
pub struct NotesServiceClient {
    endpoint: UpstreamEndpoint,
    client: Client,
}

impl NotesServiceClient {
    /// Create a new notes service client
    pub fn new(endpoint: UpstreamEndpoint) -> Result<Self, UpstreamError> {
        let client = endpoint.build_client()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl NotesRepository for NotesServiceClient {
    async fn get_notes(&self, patient_id: PatientId) -> Result<Vec<ClinicalNote>, UpstreamError> {
        let url = self.endpoint.url_for(patient_id);

        tracing::debug!("Fetching notes from: {}", url);

        let response = self
            .endpoint
            .authorize(self.client.get(&url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::from_status(
                response.status(),
                format!("notes for patient {}", patient_id),
            ));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("Failed to read notes: {}", e)))?;

        let documents = json
            .as_array()
            .ok_or_else(|| UpstreamError::InvalidResponse("Expected an array of notes".into()))?;

        // A single unreadable note should not hide the others
        let notes: Vec<ClinicalNote> = documents
            .iter()
            .filter_map(|doc| match serde_json::from_value(doc.clone()) {
                Ok(note) => Some(note),
                Err(e) => {
                    tracing::warn!("Skipping unreadable note for patient {}: {}", patient_id, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} notes for patient {}", notes.len(), patient_id);

        Ok(notes)
    }
}
