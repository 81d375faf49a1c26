//! Shared testing utilities for nedoto integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use nedoto::{AppError, HttpResponse, HttpTransport, ReqwestTransport, TransportConfig};
use serde_json::{Value, json};
use url::Url;

/// Real reqwest transport whose requests are re-targeted at a local mock server.
///
/// The client always builds URLs under the fixed production endpoint; only scheme, host and
/// port are swapped so the path and headers reach the mock unchanged.
pub struct RetargetedTransport {
    inner: ReqwestTransport,
    base: Url,
}

impl RetargetedTransport {
    pub fn new(server: &mockito::Server) -> Self {
        let config =
            TransportConfig { timeout_secs: 2, connect_timeout_secs: 1, ..Default::default() };
        Self {
            inner: ReqwestTransport::new(&config).expect("transport should build"),
            base: Url::parse(&server.url()).expect("mock server URL should parse"),
        }
    }
}

impl HttpTransport for RetargetedTransport {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        let mut target = self.base.clone();
        target.set_path(url.path());
        self.inner.get(&target, headers)
    }
}

/// Single-threaded stub replaying a queue of canned responses.
pub struct ScriptedTransport {
    responses: RefCell<Vec<HttpResponse>>,
    pub urls: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(mut responses: Vec<HttpResponse>) -> Self {
        responses.reverse();
        Self { responses: RefCell::new(responses), urls: RefCell::new(vec![]) }
    }
}

impl HttpTransport for ScriptedTransport {
    fn get(&self, url: &Url, _headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        self.urls.borrow_mut().push(url.to_string());
        self.responses.borrow_mut().pop().ok_or_else(|| AppError::Transport {
            message: "no scripted response left".into(),
            status: None,
        })
    }
}

/// Well-formed variable payload.
pub fn variable_body(variable_type: &str, value: Value) -> Value {
    json!({
        "variable": {
            "data": {
                "slug": "test-slug",
                "type": variable_type,
                "value": value,
                "created_at": "2024-04-07T21:08:23+00:00",
                "updated_at": "2024-04-08T21:08:23+00:00"
            }
        }
    })
}
