use async_trait::async_trait;
use reqwest::Client;

use super::{PatientDirectory, UpstreamEndpoint, UpstreamError};
use crate::models::{PatientId, PatientRecord};

/// HTTP client for the patient service
///
/// Reads `GET {base_url}/{id}` and keeps the demographic fields the
/// assessment needs.
pub struct PatientServiceClient {
    endpoint: UpstreamEndpoint,
    client: Client,
}

impl PatientServiceClient {
    /// Create a new patient service client
    pub fn new(endpoint: UpstreamEndpoint) -> Result<Self, UpstreamError> {
        let client = endpoint.build_client()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl PatientDirectory for PatientServiceClient {
    async fn get_patient(&self, patient_id: PatientId) -> Result<PatientRecord, UpstreamError> {
        let url = self.endpoint.url_for(patient_id);

        tracing::debug!("Fetching patient from: {}", url);

        let response = self
            .endpoint
            .authorize(self.client.get(&url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::from_status(
                response.status(),
                format!("patient {}", patient_id),
            ));
        }

        let body = response.text().await?;

        // The patient service answers 200 with an empty body for unknown ids
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(UpstreamError::NotFound(format!("patient {}", patient_id)));
        }

        serde_json::from_str(&body)
            .map_err(|e| UpstreamError::InvalidResponse(format!("Failed to parse patient: {}", e)))
    }
}
