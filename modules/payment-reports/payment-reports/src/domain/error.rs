use payment_reports_sdk::PaymentReportsError;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid argument: {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("No data for {operation}")]
    NoData { operation: &'static str },

    #[error("Database error during {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl DomainError {
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn no_data(operation: &'static str) -> Self {
        Self::NoData { operation }
    }

    #[must_use]
    pub fn database(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Database {
            operation,
            message: message.into(),
        }
    }

    /// Re-tag a database error with the public operation it failed in.
    #[must_use]
    pub fn in_operation(self, operation: &'static str) -> Self {
        match self {
            Self::Database { message, .. } => Self::Database { operation, message },
            other => other,
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for PaymentReportsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::InvalidArgument { field, message } => {
                PaymentReportsError::invalid_argument(format!("{field}: {message}"))
            }
            DomainError::NoData { operation } => PaymentReportsError::no_data(operation),
            DomainError::Database { operation, message } => {
                PaymentReportsError::store_unavailable(operation, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_keeps_field_in_message() {
        let err: PaymentReportsError =
            DomainError::invalid_argument("limit", "must be positive, got 0").into();
        assert_eq!(
            err,
            PaymentReportsError::invalid_argument("limit: must be positive, got 0")
        );
    }

    #[test]
    fn database_error_carries_operation_name() {
        let err: PaymentReportsError =
            DomainError::database("list_all_users", "connection refused").into();
        assert_eq!(
            err.to_string(),
            "Store unavailable during list_all_users: connection refused"
        );
    }

    #[test]
    fn in_operation_only_retags_database_errors() {
        let err = DomainError::database("company_payment_totals", "timeout")
            .in_operation("payment_sum_by_company");
        assert!(matches!(
            err,
            DomainError::Database { operation: "payment_sum_by_company", .. }
        ));

        let err = DomainError::no_data("max_full_name_length").in_operation("other");
        assert!(matches!(
            err,
            DomainError::NoData { operation: "max_full_name_length" }
        ));
    }

    #[test]
    fn no_data_maps_to_no_data() {
        let err: PaymentReportsError = DomainError::no_data("average_payment_amount").into();
        assert!(matches!(err, PaymentReportsError::NoData { operation } if operation == "average_payment_amount"));
    }
}
