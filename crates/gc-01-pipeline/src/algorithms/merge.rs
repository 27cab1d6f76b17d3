//! Merge combinator
//!
//! `merge(acc, step)`:
//! - state is taken from `step`
//! - costs are `acc.costs` followed by `step.costs`
//! - notes are `acc.notes` overlaid with `step.notes` (later key wins)
//!
//! Associative, with `OpResult::identity(_)` as the neutral element on the
//! left, and `OpResult::identity(x.state)` on the right.

use crate::domain::entities::OpResult;

/// Combine the accumulated result with the latest step's output.
pub fn merge(acc: OpResult, step: OpResult) -> OpResult {
    let OpResult {
        costs: mut ledger,
        mut notes,
        ..
    } = acc;

    ledger.extend(step.costs);
    notes.extend(step.notes);

    OpResult {
        state: step.state,
        costs: ledger,
        notes,
    }
}
