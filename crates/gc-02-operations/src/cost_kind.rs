//! Cost kind tags emitted by the built-in operations

pub const GAS: &str = "GAS";
pub const TRANSPORT_USAGE: &str = "TRANSPORT-USAGE";
pub const TRANSPORT_RESERVATION: &str = "TRANSPORT-RESERVATION";
pub const STORAGE_INJ_USAGE: &str = "STORAGE-INJ-USAGE";
pub const STORAGE_DEMAND: &str = "STORAGE-DEMAND";
pub const STORAGE_WDR_USAGE: &str = "STORAGE-WDR-USAGE";
pub const STORAGE_CARRY: &str = "STORAGE-CARRY";
pub const FEE_TRADE: &str = "FEE-TRADE";
pub const PENALTY_IMBALANCE: &str = "PENALTY-IMBALANCE";
