//! Shared error types for the relationship churn harness

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

impl SharedError {
    pub fn invalid(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingConfig { field: field.into() }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SharedError::invalid("rate_limit", 0);
        assert_eq!(err.to_string(), "Invalid configuration: rate_limit = 0");

        let err = SharedError::missing("host");
        assert_eq!(err.to_string(), "Missing configuration: host");
    }
}
