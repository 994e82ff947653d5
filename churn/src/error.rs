//! Churn harness error types

use thiserror::Error;
use tokio::task::JoinError;

use authz_client::{AuthzError, Relationship};
use shared::SharedError;

#[derive(Error, Debug)]
pub enum ChurnError {
    /// Tenant or schema setup failed before any iteration ran
    #[error("Error {step}: {source}")]
    Setup {
        step: &'static str,
        #[source]
        source: AuthzError,
    },

    #[error("Error adding relationship set {index}: {source}")]
    Add {
        index: usize,
        #[source]
        source: AuthzError,
    },

    #[error("Error deleting relationship {relationship}: {source}")]
    Delete {
        index: usize,
        relationship: Relationship,
        #[source]
        source: AuthzError,
    },

    #[error("handoff queue closed")]
    QueueClosed,

    #[error("run cancelled")]
    Cancelled,

    #[error("churn task failed: {0}")]
    Join(#[from] JoinError),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

pub type ChurnResult<T> = Result<T, ChurnError>;
