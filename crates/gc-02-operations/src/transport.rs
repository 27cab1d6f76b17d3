//! Transport: move gas between two pipeline points, losing a fuel share.

use crate::cost_kind;
use crate::validation::{at_most, checked, expect_location, non_negative, priced};
use gc_01_pipeline::{meta_entry, GasState, Notes, OpOutcome, OpResult, Operation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

const NAME: &str = "Transport";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportParams {
    /// Receipt point; the gas must be here
    pub entry: String,
    /// Delivery point
    pub exit: String,
    pub shipper: String,
    /// Fuel retained by the pipeline, in percent of the received quantity
    pub fuel_pct: Decimal,
    /// Usage (commodity) rate per delivered MMBtu
    pub usage_rate: Decimal,
    /// Reservation rate per delivered MMBtu
    pub reservation: Decimal,
}

#[derive(Clone, Debug)]
pub struct Transport {
    params: TransportParams,
}

impl Transport {
    pub fn new(params: TransportParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TransportParams {
        &self.params
    }
}

impl Operation for Transport {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        expect_location(NAME, state, &p.entry)?;
        non_negative(NAME, "quantity", state.qty_mmbtu)?;
        non_negative(NAME, "fuel_pct", p.fuel_pct)?;
        at_most(NAME, "fuel_pct", p.fuel_pct, Decimal::ONE_HUNDRED)?;

        let fuel = checked(
            NAME,
            "fuel_mmbtu",
            state
                .qty_mmbtu
                .checked_mul(p.fuel_pct)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED)),
        )?;
        let qty_out = (state.qty_mmbtu - fuel).max(Decimal::ZERO);
        trace!(fuel = %fuel, qty_out = %qty_out, "Transport fuel retained");

        // Reservation is billed on the delivered quantity, like usage.
        let usage = priced(NAME, cost_kind::TRANSPORT_USAGE, qty_out, p.usage_rate)?
            .with_meta("shipper", &p.shipper)
            .with_meta("fuel_mmbtu", fuel);
        let reservation = priced(
            NAME,
            cost_kind::TRANSPORT_RESERVATION,
            qty_out,
            p.reservation,
        )?
        .with_meta("shipper", &p.shipper);
        let next = state.with_qty(qty_out).with_location(p.exit.as_str());
        let notes: Notes = [
            meta_entry("transport.fuel_pct", p.fuel_pct),
            meta_entry("transport.fuel_mmbtu", fuel),
            meta_entry("transport.entry", &p.entry),
            meta_entry("transport.exit", &p.exit),
        ]
        .into_iter()
        .collect();

        Ok(OpResult::new(next, vec![usage, reservation], notes))
    }

    fn describe(&self) -> String {
        format!(
            "Transport {} -> {} via {} (fuel {}%)",
            self.params.entry, self.params.exit, self.params.shipper, self.params.fuel_pct
        )
    }
}
