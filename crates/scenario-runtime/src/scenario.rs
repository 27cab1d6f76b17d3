//! Scenario files.
//!
//! A scenario is an initial gas state plus an ordered list of steps. On disk
//! it is JSON, with each step tagged by its `op` field:
//!
//! ```json
//! {
//!   "name": "short haul",
//!   "initial": { "qty_mmbtu": "10000", "owner": "JP Morgan", "location": "Ehrenberg",
//!                "timestamp": "2025-01-15T00:00:00", "contract": "Contrato GAS- JP Morgan" },
//!   "steps": [
//!     { "op": "supply", "seller": "JP Morgan", "buyer": "SaaviMX",
//!       "price_fix": "2.85", "contract_ref": "NAESB-A006F1" }
//!   ]
//! }
//! ```

use gc_01_pipeline::{GasState, Operation, Pipeline};
use gc_02_operations::{
    CarryCost, CarryParams, Consume, ConsumeParams, Inject, InjectParams, Supply, SupplyParams,
    Trade, TradeParams, Transport, TransportParams, Withdraw, WithdrawParams,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One pipeline step as written in a scenario file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Supply(SupplyParams),
    Transport(TransportParams),
    Inject(InjectParams),
    Withdraw(WithdrawParams),
    CarryCost(CarryParams),
    Trade(TradeParams),
    Consume(ConsumeParams),
}

impl Step {
    pub fn into_operation(self) -> Box<dyn Operation> {
        match self {
            Step::Supply(p) => Box::new(Supply::new(p)),
            Step::Transport(p) => Box::new(Transport::new(p)),
            Step::Inject(p) => Box::new(Inject::new(p)),
            Step::Withdraw(p) => Box::new(Withdraw::new(p)),
            Step::CarryCost(p) => Box::new(CarryCost::new(p)),
            Step::Trade(p) => Box::new(Trade::new(p)),
            Step::Consume(p) => Box::new(Consume::new(p)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub initial: GasState,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the operations in step order.
    pub fn pipeline(&self) -> Pipeline {
        self.steps
            .iter()
            .cloned()
            .map(Step::into_operation)
            .collect()
    }
}
