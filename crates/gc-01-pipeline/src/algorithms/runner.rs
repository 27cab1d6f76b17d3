//! Fail-fast pipeline runner
//!
//! The accumulator starts as `OpResult::identity(initial)`. Each operation is
//! applied to the accumulator's current state; a failure ends the run and is
//! returned unchanged, a success is merged into the accumulator. Operations
//! after a failure are never invoked.

use crate::algorithms::merge::merge;
use crate::domain::entities::{GasState, OpResult};
use crate::domain::errors::OperationError;
use crate::ports::outbound::{OpOutcome, Operation};

/// Observation of a single step, emitted by [`run_iter_inspect`].
#[derive(Debug)]
pub enum StepEvent<'a> {
    /// Operation at `index` succeeded with `output`
    Applied {
        index: usize,
        operation: &'a str,
        output: &'a OpResult,
    },
    /// Operation at `index` failed; no further operation runs
    Failed {
        index: usize,
        operation: &'a str,
        error: &'a OperationError,
    },
}

/// Run a boxed operation list.
pub fn run(operations: &[Box<dyn Operation>], initial: GasState) -> OpOutcome {
    run_iter(
        operations.iter().map(|op| -> &dyn Operation { &**op }),
        initial,
    )
}

/// Run any ordered sequence of operations.
pub fn run_iter<'a, I>(operations: I, initial: GasState) -> OpOutcome
where
    I: IntoIterator<Item = &'a dyn Operation>,
{
    run_iter_inspect(operations, initial, |_| {})
}

/// Run operations, reporting each step to `inspect` before it is merged.
pub fn run_iter_inspect<'a, I, F>(operations: I, initial: GasState, mut inspect: F) -> OpOutcome
where
    I: IntoIterator<Item = &'a dyn Operation>,
    F: FnMut(StepEvent<'_>),
{
    operations
        .into_iter()
        .enumerate()
        .try_fold(OpResult::identity(initial), |acc, (index, operation)| {
            match operation.apply(&acc.state) {
                Ok(output) => {
                    inspect(StepEvent::Applied {
                        index,
                        operation: operation.name(),
                        output: &output,
                    });
                    Ok(merge(acc, output))
                }
                Err(error) => {
                    inspect(StepEvent::Failed {
                        index,
                        operation: operation.name(),
                        error: &error,
                    });
                    Err(error)
                }
            }
        })
}
