//! Client that fetches and validates a single remote configuration variable.

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::adapters::ReqwestTransport;
use crate::domain::{
    AppError, ConfigurationRecord, FetchRequest, FetchResult, SchemaValidator, TransportConfig,
    VariableType, VariableValue, api_key_from_env, parse_timestamp,
};
use crate::ports::HttpTransport;

/// Root of the variable lookup endpoint. The identifier is appended as the last segment.
pub const NEDOTO_ENDPOINT: &str = "https://app.nedoto.com/api/var/get";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Status reported when the transport produced no HTTP response.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Client for the remote configuration service.
///
/// Holds only the API key and a transport handle; every [`fetch`](Self::fetch) issues exactly
/// one request.
#[derive(Clone)]
pub struct RemoteConfigClient<T> {
    transport: T,
    api_key: String,
    validator: SchemaValidator,
}

impl<T> std::fmt::Debug for RemoteConfigClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfigClient")
            .field("endpoint", &NEDOTO_ENDPOINT)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl RemoteConfigClient<ReqwestTransport> {
    /// Create a client backed by a reqwest transport.
    pub fn with_reqwest(
        api_key: impl Into<String>,
        config: &TransportConfig,
    ) -> Result<Self, AppError> {
        Ok(Self::new(ReqwestTransport::new(config)?, api_key))
    }

    /// Create a reqwest-backed client with the API key from `NEDOTO_API_KEY`.
    pub fn from_env(config: &TransportConfig) -> Result<Self, AppError> {
        Self::with_reqwest(api_key_from_env()?, config)
    }
}

impl<T: HttpTransport> RemoteConfigClient<T> {
    pub fn new(transport: T, api_key: impl Into<String>) -> Self {
        Self { transport, api_key: api_key.into(), validator: SchemaValidator::default() }
    }

    /// Fetch the variable named by `identifier`.
    pub fn get(&self, identifier: &str) -> Result<FetchResult, AppError> {
        self.fetch(&FetchRequest::new(identifier)?)
    }

    /// Fetch, validate and map one variable.
    ///
    /// Transport failures, non-2xx answers and malformed payloads are all reported through
    /// the returned [`FetchResult`]. `Err` is only returned when the endpoint URL cannot be
    /// built or a validated timestamp fails to parse.
    pub fn fetch(&self, request: &FetchRequest) -> Result<FetchResult, AppError> {
        let url = request_url(request.identifier())?;
        debug!(identifier = %request.identifier(), url = %url, "Fetching configuration variable");

        let headers = [(API_KEY_HEADER, self.api_key.as_str())];
        let response = match self.transport.get(&url, &headers) {
            Ok(response) => response,
            Err(err) => {
                let status = err.status().unwrap_or(NO_RESPONSE_STATUS);
                warn!(identifier = %request.identifier(), status, error = %err, "Request failed");
                return Ok(FetchResult::new(None, vec![err.to_string()], status));
            }
        };

        if !response.is_success() {
            let errors = response.json().map(|body| flatten_error_body(&body)).unwrap_or_default();
            warn!(
                identifier = %request.identifier(),
                status = response.status,
                errors = errors.len(),
                "Service returned an error status"
            );
            return Ok(FetchResult::new(None, errors, response.status));
        }

        let body = response.json().unwrap_or(Value::Null);
        let errors = self.validator.validate(&body);
        if !errors.is_empty() {
            warn!(
                identifier = %request.identifier(),
                errors = errors.len(),
                "Response payload failed schema validation"
            );
            return Ok(FetchResult::new(None, errors, response.status));
        }

        let record = build_record(&body)?;
        debug!(slug = record.slug(), variable_type = %record.variable_type(), "Fetched variable");

        Ok(FetchResult::new(Some(record), Vec::new(), response.status))
    }
}

/// Endpoint URL with the trimmed identifier as a single encoded path segment.
fn request_url(identifier: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(NEDOTO_ENDPOINT)?;
    url.path_segments_mut()
        .map_err(|()| AppError::invalid_argument("Endpoint URL cannot take path segments"))?
        .push(identifier.trim());
    Ok(url)
}

/// Flatten a decoded error body into strings, depth-first.
fn flatten_error_body(body: &Value) -> Vec<String> {
    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Null => {}
            Value::String(s) => out.push(s.clone()),
            Value::Bool(_) | Value::Number(_) => out.push(value.to_string()),
            Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
            Value::Object(entries) => entries.values().for_each(|item| collect(item, out)),
        }
    }

    let mut out = Vec::new();
    collect(body, &mut out);
    out
}

/// Build the record from a body that already passed schema validation.
fn build_record(body: &Value) -> Result<ConfigurationRecord, AppError> {
    let data = &body["variable"]["data"];

    let slug = data["slug"]
        .as_str()
        .ok_or_else(|| AppError::invalid_argument("$slug must be a string."))?;
    let variable_type = data["type"]
        .as_str()
        .ok_or_else(|| AppError::invalid_argument("$type must be a string."))?
        .parse::<VariableType>()?;
    let value = VariableValue::from_json(&data["value"]).ok_or_else(|| {
        AppError::invalid_argument("$value must be an int, float, bool or string.")
    })?;
    let created_at = data["created_at"]
        .as_str()
        .and_then(parse_timestamp)
        .ok_or_else(|| AppError::invalid_argument("$createdAt must be a valid timestamp."))?;
    let updated_at = data["updated_at"]
        .as_str()
        .and_then(parse_timestamp)
        .ok_or_else(|| AppError::invalid_argument("$updatedAt must be a valid timestamp."))?;

    Ok(ConfigurationRecord::new(slug, variable_type, value, created_at, updated_at))
}
