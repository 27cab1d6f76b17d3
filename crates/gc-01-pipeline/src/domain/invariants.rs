//! Domain invariants for the gas pipeline
//!
//! Each check compares a pipeline result against the individual outputs of
//! the operations that produced it, in application order.

use super::entities::{GasState, OpResult};
use std::collections::BTreeMap;

/// INVARIANT-1: State Threading
/// The final state is the state produced by the last step, or the initial
/// state when there were no steps.
pub fn invariant_state_from_last_step(
    result: &OpResult,
    initial: &GasState,
    steps: &[OpResult],
) -> bool {
    let expected = steps.last().map(|s| &s.state).unwrap_or(initial);
    result.state == *expected
}

/// INVARIANT-2: Ledger Ordering
/// The final cost list is the concatenation of every step's costs, in order.
pub fn invariant_ledger_concatenation(result: &OpResult, steps: &[OpResult]) -> bool {
    let expected: Vec<_> = steps.iter().flat_map(|s| s.costs.iter()).collect();
    result.costs.len() == expected.len()
        && result.costs.iter().zip(expected).all(|(a, b)| a == b)
}

/// INVARIANT-3: Notes Overwrite
/// Every note key holds the value written by the last step that emitted it,
/// and no key appears that no step emitted.
pub fn invariant_notes_overlay(result: &OpResult, steps: &[OpResult]) -> bool {
    let mut expected = BTreeMap::new();
    for step in steps {
        for (key, value) in &step.notes {
            expected.insert(key, value);
        }
    }

    result.notes.len() == expected.len()
        && result
            .notes
            .iter()
            .all(|(key, value)| expected.get(key) == Some(&value))
}
