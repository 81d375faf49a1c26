//! HTTP transport implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::{AppError, TransportConfig};
use crate::ports::{HttpResponse, HttpTransport};

/// Blocking reqwest transport.
///
/// Performs exactly one request per call. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    user_agent: String,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").field("user_agent", &self.user_agent).finish()
    }
}

impl ReqwestTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: &TransportConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, user_agent: config.user_agent.clone() })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        let mut request = self.client.get(url.clone()).header(ACCEPT, "application/json");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(|e| AppError::Transport {
            message: e.to_string(),
            status: e.status().map(|status| status.as_u16()),
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| AppError::Transport {
            message: format!("Failed to read response body: {}", e),
            status: Some(status),
        })?;

        Ok(HttpResponse { status, body })
    }
}
