//! # Gas-Chain Scenario Runtime
//!
//! Loads a scenario, runs it through [`PipelineService`] and renders the
//! outcome.
//!
//! ## Modules
//!
//! - `config` - CLI arguments and environment overrides
//! - `scenario` - JSON scenario files and step decoding
//! - `reference` - built-in reference scenario

pub mod config;
pub mod reference;
pub mod scenario;

pub use config::{Args, RuntimeConfig};
pub use reference::reference_scenario;
pub use scenario::{Scenario, ScenarioError, Step};

use gc_01_pipeline::{OpResult, PipelineApi, PipelineConfig, PipelineError, PipelineService};
use tracing::info;

/// Run a scenario with the given pipeline settings.
pub fn run_scenario(
    scenario: &Scenario,
    config: PipelineConfig,
) -> Result<OpResult, PipelineError> {
    let pipeline = scenario.pipeline();
    let _span = gas_telemetry::scenario_span!(scenario.name, steps = pipeline.len()).entered();
    info!("Scenario loaded");

    PipelineService::with_config(config).run_pipeline(pipeline.operations(), scenario.initial.clone())
}
