//! Public error types for the `payment-reports` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by `PaymentReportsClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentReportsError {
    /// A request argument was rejected before any query ran.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A scalar aggregate was requested over an empty set.
    #[error("No data for {operation}")]
    NoData { operation: String },

    /// The store failed while executing the operation.
    #[error("Store unavailable during {operation}: {message}")]
    StoreUnavailable { operation: String, message: String },
}

impl PaymentReportsError {
    /// Create an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a `NoData` error.
    #[must_use]
    pub fn no_data(operation: impl Into<String>) -> Self {
        Self::NoData {
            operation: operation.into(),
        }
    }

    /// Create a `StoreUnavailable` error.
    #[must_use]
    pub fn store_unavailable(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
