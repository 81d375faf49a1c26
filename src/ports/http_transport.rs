//! HTTP transport port definition.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::domain::AppError;

/// Raw HTTP answer: status and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. `None` when the body is empty or not JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Port for issuing HTTP GET requests.
///
/// Non-2xx answers are returned as `Ok`; `Err` means no response was received at all.
pub trait HttpTransport {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        (**self).get(url, headers)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        (**self).get(url, headers)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        (**self).get(url, headers)
    }
}
