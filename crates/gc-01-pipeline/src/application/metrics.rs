//! Run metrics
//!
//! Quantity efficiency and cost totals of a completed run, relative to the
//! state the run started from.

use crate::domain::entities::{GasState, OpResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub initial_qty: Decimal,
    pub final_qty: Decimal,
    /// `final / initial × 100`; `None` when the run started with no gas
    pub quantity_efficiency_pct: Option<Decimal>,
    pub cost_items: usize,
    pub total_amount: Decimal,
}

impl RunMetrics {
    pub fn compute(initial: &GasState, result: &OpResult) -> Self {
        let initial_qty = initial.qty_mmbtu;
        let final_qty = result.state.qty_mmbtu;
        let quantity_efficiency_pct = if initial_qty.is_zero() {
            None
        } else {
            final_qty
                .checked_div(initial_qty)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        };

        Self {
            initial_qty,
            final_qty,
            quantity_efficiency_pct,
            cost_items: result.costs.len(),
            total_amount: result.total_amount(),
        }
    }
}
