//! Storage operations: injection, withdrawal and inventory carrying cost.
//!
//! The facility record describes one storage field. It is a parameter, not
//! pipeline state: callers model inventory changes by passing a facility
//! snapshot with the inventory they want each step to see.

use crate::cost_kind;
use crate::validation::{
    at_most, available, checked, expect_location, non_negative, positive_ratio, priced,
};
use gc_01_pipeline::{meta_entry, CostItem, GasState, Notes, OpOutcome, OpResult, Operation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const INJECT: &str = "Storage.Inject";
const WITHDRAW: &str = "Storage.Withdraw";
const CARRY: &str = "Storage.CarryCost";

const DAYS_PER_YEAR: u32 = 365;

/// Carry cost is computed on a reference value of 1 USD/MMBtu.
const NOTIONAL_PER_MMBTU: Decimal = Decimal::ONE;

/// Storage field configuration and current inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageFacility {
    pub location: String,
    /// Inventory currently held, in MMBtu
    pub inventory: Decimal,
    pub inventory_max: Decimal,
    /// Maximum quantity accepted per injection
    pub inj_max: Decimal,
    /// Maximum quantity delivered per withdrawal
    pub wdr_max: Decimal,
    /// Share of injected gas that reaches inventory
    pub inj_efficiency: Decimal,
    /// Delivered gas per unit of inventory drawn
    pub wdr_efficiency: Decimal,
    pub usage_rate_inj: Decimal,
    pub usage_rate_wdr: Decimal,
    /// Flat demand charge billed with every injection, if any
    #[serde(default)]
    pub demand_charge: Option<Decimal>,
    /// Annual carrying rate
    pub carry_apy: Decimal,
}

impl StorageFacility {
    /// Copy of this facility holding a different inventory.
    pub fn with_inventory(&self, inventory: Decimal) -> Self {
        Self {
            inventory,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectParams {
    pub storage: StorageFacility,
    pub qty_in: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawParams {
    pub storage: StorageFacility,
    pub qty_out: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryParams {
    pub storage: StorageFacility,
    pub days: u32,
}

/// Moves gas from the parcel into the storage field.
#[derive(Clone, Debug)]
pub struct Inject {
    params: InjectParams,
}

impl Inject {
    pub fn new(params: InjectParams) -> Self {
        Self { params }
    }
}

impl Operation for Inject {
    fn name(&self) -> &str {
        INJECT
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        let st = &p.storage;
        expect_location(INJECT, state, &st.location)?;
        non_negative(INJECT, "qty_in", p.qty_in)?;
        at_most(INJECT, "qty_in", p.qty_in, st.inj_max)?;
        available(INJECT, "gas", p.qty_in, state.qty_mmbtu)?;
        positive_ratio(INJECT, "inj_efficiency", st.inj_efficiency)?;

        let effective_in = checked(
            INJECT,
            "effective_in",
            p.qty_in.checked_mul(st.inj_efficiency),
        )?;
        let inv_after = checked(
            INJECT,
            "inventory",
            st.inventory.checked_add(effective_in),
        )?;
        at_most(INJECT, "inventory", inv_after, st.inventory_max)?;

        let mut costs = vec![priced(
            INJECT,
            cost_kind::STORAGE_INJ_USAGE,
            p.qty_in,
            st.usage_rate_inj,
        )?];
        if let Some(charge) = st.demand_charge {
            costs.push(CostItem::with_amount(
                cost_kind::STORAGE_DEMAND,
                Decimal::ZERO,
                Decimal::ZERO,
                charge,
            ));
        }
        let next = state.with_qty(state.qty_mmbtu - p.qty_in);
        let notes: Notes = [
            meta_entry("storage.inv_before", st.inventory),
            meta_entry("storage.effective_in", effective_in),
            meta_entry("storage.inv_after", inv_after),
        ]
        .into_iter()
        .collect();

        Ok(OpResult::new(next, costs, notes))
    }

    fn describe(&self) -> String {
        format!(
            "Inject {} MMBtu into {}",
            self.params.qty_in, self.params.storage.location
        )
    }
}

/// Returns gas from the storage field to the parcel.
#[derive(Clone, Debug)]
pub struct Withdraw {
    params: WithdrawParams,
}

impl Withdraw {
    pub fn new(params: WithdrawParams) -> Self {
        Self { params }
    }
}

impl Operation for Withdraw {
    fn name(&self) -> &str {
        WITHDRAW
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        let st = &p.storage;
        expect_location(WITHDRAW, state, &st.location)?;
        non_negative(WITHDRAW, "qty_out", p.qty_out)?;
        at_most(WITHDRAW, "qty_out", p.qty_out, st.wdr_max)?;
        positive_ratio(WITHDRAW, "wdr_efficiency", st.wdr_efficiency)?;

        let inv_needed = checked(
            WITHDRAW,
            "inv_needed",
            p.qty_out.checked_div(st.wdr_efficiency),
        )?;
        available(WITHDRAW, "inventory", inv_needed, st.inventory)?;

        let qty_after = checked(
            WITHDRAW,
            "quantity",
            state.qty_mmbtu.checked_add(p.qty_out),
        )?;
        let usage = priced(
            WITHDRAW,
            cost_kind::STORAGE_WDR_USAGE,
            p.qty_out,
            st.usage_rate_wdr,
        )?;
        let next = state.with_qty(qty_after);
        let notes: Notes = [
            meta_entry("storage.inv_before", st.inventory),
            meta_entry("storage.inv_needed", inv_needed),
            meta_entry("storage.inv_after", st.inventory - inv_needed),
        ]
        .into_iter()
        .collect();

        Ok(OpResult::new(next, vec![usage], notes))
    }

    fn describe(&self) -> String {
        format!(
            "Withdraw {} MMBtu from {}",
            self.params.qty_out, self.params.storage.location
        )
    }
}

/// Financing cost of holding the facility inventory for a number of days.
/// Does not touch the gas parcel.
#[derive(Clone, Debug)]
pub struct CarryCost {
    params: CarryParams,
}

impl CarryCost {
    pub fn new(params: CarryParams) -> Self {
        Self { params }
    }
}

impl Operation for CarryCost {
    fn name(&self) -> &str {
        CARRY
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        let st = &p.storage;

        let prorata = Decimal::from(p.days) / Decimal::from(DAYS_PER_YEAR);
        let unit_cost = checked(
            CARRY,
            "unit_cost",
            prorata
                .checked_mul(st.carry_apy)
                .and_then(|v| v.checked_mul(NOTIONAL_PER_MMBTU)),
        )?;
        let carry = priced(CARRY, cost_kind::STORAGE_CARRY, st.inventory, unit_cost)?
            .with_meta("apy", st.carry_apy)
            .with_meta("days", p.days);

        Ok(OpResult::new(state.clone(), vec![carry], Notes::new()))
    }

    fn describe(&self) -> String {
        format!(
            "Carry {} MMBtu at {} for {} days",
            self.params.storage.inventory, self.params.storage.location, self.params.days
        )
    }
}
