use std::sync::{Arc, Mutex};

use serde_json::Value;
use url::Url;

use crate::domain::AppError;
use crate::ports::{HttpResponse, HttpTransport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// Transport that replays one canned outcome and records every request.
#[derive(Clone)]
pub struct FakeTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    outcome: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            outcome: Ok(HttpResponse::new(status, body)),
        }
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::responding(status, body.to_string())
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome: Err(message.into()) }
    }

    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for FakeTransport {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, AppError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.clone(),
            headers: headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        });

        self.outcome
            .clone()
            .map_err(|message| AppError::Transport { message, status: None })
    }
}
