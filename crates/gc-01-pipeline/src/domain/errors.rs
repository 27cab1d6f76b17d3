//! Error types for the gas pipeline
//!
//! Every operation failure names the operation that raised it, and mismatch
//! failures carry both the actual and the expected value.

use rust_decimal::Decimal;
use thiserror::Error;

/// Origin of an operation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Current state does not match what the operation expects
    StateMismatch,
    /// A requested quantity or ratio is outside its allowed range
    BoundViolation,
    /// Not enough gas or inventory to satisfy the operation
    InsufficientResource,
}

/// Failure reported by a single operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Gas is not where the operation expects it
    #[error("{operation}: state at {actual}, expected {expected}")]
    LocationMismatch {
        operation: &'static str,
        actual: String,
        expected: String,
    },

    /// Operation requires a strictly positive quantity
    #[error("{operation}: quantity must be positive, got {quantity}")]
    NonPositiveQuantity {
        operation: &'static str,
        quantity: Decimal,
    },

    /// A quantity or rate is negative
    #[error("{operation}: {field} is negative ({value})")]
    NegativeQuantity {
        operation: &'static str,
        field: &'static str,
        value: Decimal,
    },

    /// A requested quantity exceeds a capacity bound
    #[error("{operation}: {field} {requested} exceeds limit {limit}")]
    CapacityExceeded {
        operation: &'static str,
        field: &'static str,
        requested: Decimal,
        limit: Decimal,
    },

    /// A ratio used as a divisor or multiplier must be strictly positive
    #[error("{operation}: {field} must be positive, got {value}")]
    NonPositiveRatio {
        operation: &'static str,
        field: &'static str,
        value: Decimal,
    },

    /// Available quantity is below what the operation needs
    #[error("{operation}: insufficient {resource} (required {required}, available {available})")]
    InsufficientResource {
        operation: &'static str,
        resource: &'static str,
        required: Decimal,
        available: Decimal,
    },

    /// A computed quantity or amount falls outside the decimal range
    #[error("{operation}: {field} overflows the decimal range")]
    ArithmeticOverflow {
        operation: &'static str,
        field: &'static str,
    },

    /// Failure raised by a custom operation
    #[error("{operation}: {reason}")]
    Rejected { operation: String, reason: String },
}

impl OperationError {
    /// Failure for operations outside the built-in set. An empty reason is
    /// replaced so the message is never blank.
    pub fn rejected(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::Rejected {
            operation: operation.into(),
            reason: if reason.trim().is_empty() {
                "rejected".to_string()
            } else {
                reason
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            OperationError::LocationMismatch { .. } => ErrorCategory::StateMismatch,
            OperationError::InsufficientResource { .. } => ErrorCategory::InsufficientResource,
            OperationError::NonPositiveQuantity { .. }
            | OperationError::NegativeQuantity { .. }
            | OperationError::CapacityExceeded { .. }
            | OperationError::NonPositiveRatio { .. }
            | OperationError::ArithmeticOverflow { .. }
            | OperationError::Rejected { .. } => ErrorCategory::BoundViolation,
        }
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &str {
        match self {
            OperationError::LocationMismatch { operation, .. }
            | OperationError::NonPositiveQuantity { operation, .. }
            | OperationError::NegativeQuantity { operation, .. }
            | OperationError::CapacityExceeded { operation, .. }
            | OperationError::NonPositiveRatio { operation, .. }
            | OperationError::ArithmeticOverflow { operation, .. }
            | OperationError::InsufficientResource { operation, .. } => *operation,
            OperationError::Rejected { operation, .. } => operation.as_str(),
        }
    }
}

/// Errors raised by the pipeline service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Operation list longer than the configured limit
    #[error("Pipeline too long: {count} > {max} operations")]
    TooManyOperations { count: usize, max: usize },

    /// An operation failed; the run was aborted at that step
    #[error(transparent)]
    Operation(#[from] OperationError),
}
