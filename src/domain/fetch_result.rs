//! Outcome of a single fetch.

use crate::domain::ConfigurationRecord;

/// Record, error list and HTTP status of one fetch.
///
/// Every expected failure (non-2xx answer, malformed payload, unreachable service) is
/// represented here; callers check [`FetchResult::failed`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    record: Option<ConfigurationRecord>,
    errors: Vec<String>,
    status: u16,
}

impl FetchResult {
    pub fn new(record: Option<ConfigurationRecord>, errors: Vec<String>, status: u16) -> Self {
        Self { record, errors, status }
    }

    pub fn record(&self) -> Option<&ConfigurationRecord> {
        self.record.as_ref()
    }

    pub fn into_record(self) -> Option<ConfigurationRecord> {
        self.record
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// True when any error was reported or no record was built.
    pub fn failed(&self) -> bool {
        !self.errors.is_empty() || self.record.is_none()
    }
}
