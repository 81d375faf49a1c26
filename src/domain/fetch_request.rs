//! Request value object naming the variable to fetch.

use crate::domain::AppError;

/// Identifier of a single remote configuration variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    identifier: String,
}

impl FetchRequest {
    /// Create a request for `identifier`.
    ///
    /// The identifier is stored verbatim; surrounding whitespace is only trimmed when the
    /// request URL is built.
    pub fn new(identifier: impl Into<String>) -> Result<Self, AppError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(AppError::invalid_argument("$identifier cannot be an empty string."));
        }
        Ok(Self { identifier })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl TryFrom<&str> for FetchRequest {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
