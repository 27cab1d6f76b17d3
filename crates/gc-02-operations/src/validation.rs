//! Precondition checks shared by the operations

use gc_01_pipeline::{CostItem, GasState, OperationError};
use rust_decimal::Decimal;

pub(crate) fn expect_location(
    operation: &'static str,
    state: &GasState,
    expected: &str,
) -> Result<(), OperationError> {
    if state.location != expected {
        return Err(OperationError::LocationMismatch {
            operation,
            actual: state.location.clone(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn positive_quantity(
    operation: &'static str,
    state: &GasState,
) -> Result<(), OperationError> {
    if state.qty_mmbtu <= Decimal::ZERO {
        return Err(OperationError::NonPositiveQuantity {
            operation,
            quantity: state.qty_mmbtu,
        });
    }
    Ok(())
}

pub(crate) fn non_negative(
    operation: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<(), OperationError> {
    if value < Decimal::ZERO {
        return Err(OperationError::NegativeQuantity {
            operation,
            field,
            value,
        });
    }
    Ok(())
}

pub(crate) fn at_most(
    operation: &'static str,
    field: &'static str,
    requested: Decimal,
    limit: Decimal,
) -> Result<(), OperationError> {
    if requested > limit {
        return Err(OperationError::CapacityExceeded {
            operation,
            field,
            requested,
            limit,
        });
    }
    Ok(())
}

pub(crate) fn positive_ratio(
    operation: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<(), OperationError> {
    if value <= Decimal::ZERO {
        return Err(OperationError::NonPositiveRatio {
            operation,
            field,
            value,
        });
    }
    Ok(())
}

pub(crate) fn available(
    operation: &'static str,
    resource: &'static str,
    required: Decimal,
    available: Decimal,
) -> Result<(), OperationError> {
    if available < required {
        return Err(OperationError::InsufficientResource {
            operation,
            resource,
            required,
            available,
        });
    }
    Ok(())
}

/// Unwraps a checked decimal computation.
pub(crate) fn checked(
    operation: &'static str,
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Decimal, OperationError> {
    value.ok_or(OperationError::ArithmeticOverflow { operation, field })
}

/// Cost whose amount is `qty × rate`, failing instead of overflowing.
pub(crate) fn priced(
    operation: &'static str,
    kind: &str,
    qty: Decimal,
    rate: Decimal,
) -> Result<CostItem, OperationError> {
    CostItem::try_new(kind, qty, rate).ok_or(OperationError::ArithmeticOverflow {
        operation,
        field: "amount",
    })
}
