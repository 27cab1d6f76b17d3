//! Fixtures for operation unit tests

use chrono::NaiveDate;
use gc_01_pipeline::GasState;
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub(crate) fn make_state(qty: &str, location: &str) -> GasState {
    let ts = NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    GasState::new(dec(qty), "JP Morgan", location, ts, "Contrato GAS- JP Morgan")
}
