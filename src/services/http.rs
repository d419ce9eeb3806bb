use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use super::UpstreamError;

/// HTTP basic credentials expected by the upstream gateway
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Base URL, timeout and credentials for one upstream service
///
/// Resource ids are appended to `base_url` as a trailing path segment.
#[derive(Debug, Clone)]
pub struct UpstreamEndpoint {
    pub base_url: String,
    pub timeout: Duration,
    pub credentials: Option<BasicCredentials>,
}

impl UpstreamEndpoint {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Option<BasicCredentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub(crate) fn url_for(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }

    pub(crate) fn build_client(&self) -> Result<Client, UpstreamError> {
        Ok(Client::builder().timeout(self.timeout).build()?)
    }

    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let endpoint = UpstreamEndpoint::new("http://patients.test/patients/", Duration::from_secs(5));
        assert_eq!(endpoint.url_for(12), "http://patients.test/patients/12");

        let endpoint = UpstreamEndpoint::new("http://notes.test/notes", Duration::from_secs(5));
        assert_eq!(endpoint.url_for(3), "http://notes.test/notes/3");
    }
}
