//! Consume: delivery of the parcel at a meter.
//!
//! The metered quantity rarely matches the nominated one. Any difference
//! beyond the tolerance band is billed as an imbalance penalty, and the
//! parcel is considered fully delivered either way.

use crate::cost_kind;
use crate::validation::{checked, expect_location, priced};
use gc_01_pipeline::{meta_entry, GasState, Notes, OpOutcome, OpResult, Operation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

const NAME: &str = "Consume";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumeParams {
    pub meter_location: String,
    /// Quantity read at the meter, in MMBtu
    pub measured: Decimal,
    /// Penalty per MMBtu of imbalance outside tolerance; zero or below waives it
    pub penalty_rate: Decimal,
    /// Tolerance band as a percentage of the nominated quantity
    pub tolerance_pct: Decimal,
}

#[derive(Clone, Debug)]
pub struct Consume {
    params: ConsumeParams,
}

impl Consume {
    pub fn new(params: ConsumeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConsumeParams {
        &self.params
    }
}

impl Operation for Consume {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        expect_location(NAME, state, &p.meter_location)?;

        let imbalance = checked(NAME, "imbalance", state.qty_mmbtu.checked_sub(p.measured))?;
        let tolerance = checked(
            NAME,
            "tolerance",
            state
                .qty_mmbtu
                .abs()
                .checked_mul(p.tolerance_pct)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED)),
        )?;
        let excess = checked(NAME, "imbalance", imbalance.abs().checked_sub(tolerance))?;

        let mut costs = Vec::new();
        if excess > Decimal::ZERO && p.penalty_rate > Decimal::ZERO {
            debug!(%imbalance, %tolerance, "Imbalance outside tolerance");
            costs.push(
                priced(NAME, cost_kind::PENALTY_IMBALANCE, excess, p.penalty_rate)?
                    .with_meta("imbalance", imbalance)
                    .with_meta("tolerance", tolerance),
            );
        }

        let next = state.with_qty(Decimal::ZERO);
        let notes: Notes = [
            meta_entry("consume.measured", p.measured),
            meta_entry("consume.out", state.qty_mmbtu),
            meta_entry("consume.imbalance", imbalance),
        ]
        .into_iter()
        .collect();

        Ok(OpResult::new(next, costs, notes))
    }

    fn describe(&self) -> String {
        format!(
            "Consume at {} (measured {}, tolerance {}%)",
            self.params.meter_location, self.params.measured, self.params.tolerance_pct
        )
    }
}
