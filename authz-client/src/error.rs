//! Authorization client error types

use std::fmt;
use thiserror::Error;
use shared::SharedError;

use crate::models::ErrorResponse;

/// Result type for authorization client operations
pub type AuthzResult<T> = Result<T, AuthzError>;

/// Remote operations that can be rejected by the authorization service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateRelationship,
    DeleteRelationship,
    FindRelationships,
    LookupRelationship,
    CheckPermission,
    WriteSchema,
    CreateTenant,
    DeleteTenant,
    ListTenants,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Operation::CreateRelationship => "create relationship",
            Operation::DeleteRelationship => "delete relationship",
            Operation::FindRelationships => "find relationships",
            Operation::LookupRelationship => "lookup relationship",
            Operation::CheckPermission => "check relationship",
            Operation::WriteSchema => "update model",
            Operation::CreateTenant => "create tenant",
            Operation::DeleteTenant => "delete tenant",
            Operation::ListTenants => "list tenants",
        };
        f.write_str(action)
    }
}

/// Authorization client error types
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Request rejected before any network call
    #[error("{message}")]
    Validation { message: String },

    #[error("request failed: {message}")]
    Transport { message: String },

    #[error("failed to decode response body: {message}")]
    Decode { message: String },

    /// The service answered, but with an error code or without a snapshot token
    #[error("failed to {operation}{}", format_domain_detail(.code, .message))]
    Domain {
        operation: Operation,
        code: Option<i64>,
        message: Option<String>,
    },

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("request cancelled")]
    Cancelled,

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

fn format_domain_detail(code: &Option<i64>, message: &Option<String>) -> String {
    match (code, message.as_deref()) {
        (Some(code), Some(message)) if !message.is_empty() => format!(" (code {code}: {message})"),
        (Some(code), _) => format!(" (code {code})"),
        (None, Some(message)) if !message.is_empty() => format!(" ({message})"),
        _ => String::new(),
    }
}

impl AuthzError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn domain(operation: Operation) -> Self {
        Self::Domain { operation, code: None, message: None }
    }

    /// Domain failure carrying whatever error detail the service sent
    pub fn rejected(operation: Operation, response: &ErrorResponse) -> Self {
        Self::Domain {
            operation,
            code: response.code,
            message: response.message.clone(),
        }
    }

    /// Whether a later attempt could succeed. Nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AuthzError::Transport { .. } | AuthzError::RateLimitExceeded)
    }
}

impl From<reqwest::Error> for AuthzError {
    fn from(err: reqwest::Error) -> Self {
        AuthzError::Transport { message: err.to_string() }
    }
}

impl From<serde_json::Error> for AuthzError {
    fn from(err: serde_json::Error) -> Self {
        AuthzError::Decode { message: err.to_string() }
    }
}
