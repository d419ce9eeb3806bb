use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling the patient or notes service
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: upstream rejected the configured credentials")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// Map a non-success status to the matching error variant
    pub(crate) fn from_status(status: StatusCode, what: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => UpstreamError::NotFound(what),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamError::Unauthorized,
            _ => UpstreamError::ApiError(format!("Failed to fetch {}: {}", what, status)),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(UpstreamError::from_status(StatusCode::NOT_FOUND, "patient 1".into()).is_not_found());
        assert!(matches!(
            UpstreamError::from_status(StatusCode::FORBIDDEN, "patient 1".into()),
            UpstreamError::Unauthorized
        ));
        let err = UpstreamError::from_status(StatusCode::BAD_GATEWAY, "notes for patient 1".into());
        assert_eq!(err.to_string(), "API returned error: Failed to fetch notes for patient 1: 502 Bad Gateway");
    }
}
