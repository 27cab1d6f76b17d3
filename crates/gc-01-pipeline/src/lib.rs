//! # GC-01: Gas Operation Pipeline
//!
//! Composition engine for gas supply-chain operations. A caller supplies an
//! initial [`GasState`] and an ordered list of [`Operation`]s; the runner
//! threads the state through them, merges each step's costs and notes into a
//! running ledger, and stops at the first failure.
//!
//! ## Architecture
//!
//! - **Domain**: Immutable records (GasState, CostItem, OpResult), metadata values, errors
//! - **Algorithms**: Merge combinator and fail-fast runner
//! - **Ports**: Inbound (PipelineApi) and Outbound (Operation)
//! - **Application**: Pipeline builder, service orchestration, run metrics
//!
//! ## Determinism
//!
//! Quantities and amounts are `rust_decimal::Decimal`, notes and metadata are
//! ordered maps. The same operation list against the same initial state always
//! produces an identical [`OpResult`].

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::{merge, run, run_iter, run_iter_inspect, StepEvent};
pub use application::metrics::RunMetrics;
pub use application::pipeline::Pipeline;
pub use application::service::PipelineService;
pub use config::PipelineConfig;
pub use domain::entities::*;
pub use domain::errors::{ErrorCategory, OperationError, PipelineError};
pub use domain::value_objects::*;
pub use ports::inbound::PipelineApi;
pub use ports::outbound::{FnOperation, OpOutcome, Operation};
