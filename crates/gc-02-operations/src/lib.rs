//! # GC-02: Gas Operations
//!
//! Concrete steps for the gas pipeline. Each operation is built from an
//! immutable parameter record and implements [`gc_01_pipeline::Operation`].
//!
//! | Operation | Effect on state | Costs |
//! |-----------|-----------------|-------|
//! | Supply | owner, contract | `GAS` |
//! | Transport | quantity (fuel), location | `TRANSPORT-USAGE`, `TRANSPORT-RESERVATION` |
//! | Storage.Inject | quantity − injected | `STORAGE-INJ-USAGE`, optional `STORAGE-DEMAND` |
//! | Storage.Withdraw | quantity + withdrawn | `STORAGE-WDR-USAGE` |
//! | Storage.CarryCost | none | `STORAGE-CARRY` |
//! | Trade | owner, contract | `FEE-TRADE` |
//! | Consume | quantity → 0 | optional `PENALTY-IMBALANCE` |
//!
//! All preconditions are checked before the new state is built.

pub mod consume;
pub mod cost_kind;
pub mod storage;
pub mod supply;
pub mod trade;
pub mod transport;
pub mod units;

mod validation;

#[cfg(test)]
mod test_support;

pub use consume::{Consume, ConsumeParams};
pub use storage::{
    CarryCost, CarryParams, Inject, InjectParams, StorageFacility, Withdraw, WithdrawParams,
};
pub use supply::{Supply, SupplyParams};
pub use trade::{Trade, TradeParams};
pub use transport::{Transport, TransportParams};
