//! Outbound Ports (Driven Ports / SPI)
//!
//! Every step of a pipeline is an [`Operation`]: a pure function from the
//! current [`GasState`] to either a new result or a failure.

use crate::domain::entities::{GasState, OpResult};
use crate::domain::errors::OperationError;

/// Outcome of applying one operation (or a whole pipeline).
pub type OpOutcome = Result<OpResult, OperationError>;

/// A single supply-chain step.
///
/// Implementations must validate every precondition before building the new
/// state, and must not read or write anything besides their own parameters
/// and the state they are given.
pub trait Operation: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Apply the operation to `state`.
    fn apply(&self, state: &GasState) -> OpOutcome;

    /// One-line human readable description of the step.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

impl<F> Operation for F
where
    F: Fn(&GasState) -> OpOutcome + Send + Sync,
{
    fn name(&self) -> &str {
        "closure"
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        self(state)
    }
}

/// Named closure operation.
pub struct FnOperation<F> {
    name: String,
    f: F,
}

impl<F> FnOperation<F>
where
    F: Fn(&GasState) -> OpOutcome + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Operation for FnOperation<F>
where
    F: Fn(&GasState) -> OpOutcome + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        (self.f)(state)
    }
}
