//! Ports for the gas pipeline
//!
//! - Inbound: `PipelineApi`, what callers drive
//! - Outbound: `Operation`, what the runner drives

pub mod inbound;
pub mod outbound;
