//! Built-in reference scenario.
//!
//! 10 000 MMBtu bought at Ehrenberg, shipped to the AGUA-DULCE storage
//! field, partly injected, resold, partly withdrawn, and delivered at the
//! AGUA-DULCE meter.

use crate::scenario::{Scenario, Step};
use chrono::{NaiveDate, NaiveDateTime};
use gc_01_pipeline::GasState;
use gc_02_operations::{
    CarryParams, ConsumeParams, InjectParams, StorageFacility, SupplyParams, TradeParams,
    TransportParams, WithdrawParams,
};
use rust_decimal::Decimal;

pub const REFERENCE_NAME: &str = "reference";

/// Gas day of the reference scenario, 2025-01-15.
pub fn gas_day() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// AGUA-DULCE storage field as configured before any injection.
pub fn agua_dulce() -> StorageFacility {
    StorageFacility {
        location: "AGUA-DULCE".to_string(),
        inventory: Decimal::from(50_000),
        inventory_max: Decimal::from(200_000),
        inj_max: Decimal::from(20_000),
        wdr_max: Decimal::from(25_000),
        inj_efficiency: Decimal::new(98, 2),
        wdr_efficiency: Decimal::new(97, 2),
        usage_rate_inj: Decimal::new(3, 2),
        usage_rate_wdr: Decimal::new(4, 2),
        demand_charge: None,
        carry_apy: Decimal::new(10, 2),
    }
}

pub fn reference_scenario() -> Scenario {
    let storage = agua_dulce();
    let qty_in = Decimal::from(5_000);
    // Withdrawal and carry see the inventory left by the injection.
    let after_injection = storage.with_inventory(storage.inventory + qty_in * storage.inj_efficiency);

    Scenario {
        name: REFERENCE_NAME.to_string(),
        initial: GasState::new(
            Decimal::from(10_000),
            "JP Morgan",
            "Ehrenberg",
            gas_day(),
            "Contrato GAS- JP Morgan",
        ),
        steps: vec![
            Step::Supply(SupplyParams {
                seller: "JP Morgan".to_string(),
                buyer: "SaaviMX".to_string(),
                price_fix: Decimal::new(285, 2),
                contract_ref: "NAESB-A006F1".to_string(),
            }),
            Step::Transport(TransportParams {
                entry: "Ehrenberg".to_string(),
                exit: "AGUA-DULCE".to_string(),
                shipper: "SaaviMX-Trans".to_string(),
                fuel_pct: Decimal::new(1, 1),
                usage_rate: Decimal::new(15, 2),
                reservation: Decimal::new(5, 2),
            }),
            Step::Inject(InjectParams { storage, qty_in }),
            Step::Trade(TradeParams {
                seller: "SES".to_string(),
                buyer: "SE".to_string(),
                adder: Decimal::new(2, 2),
                contract_ref: "SBF_044_17".to_string(),
            }),
            Step::Withdraw(WithdrawParams {
                storage: after_injection.clone(),
                qty_out: Decimal::from(1_000),
            }),
            Step::Consume(ConsumeParams {
                meter_location: "AGUA-DULCE".to_string(),
                measured: Decimal::from(9_600),
                penalty_rate: Decimal::new(100, 2),
                tolerance_pct: Decimal::new(5, 2),
            }),
            Step::CarryCost(CarryParams {
                storage: after_injection,
                days: 30,
            }),
        ],
    }
}
