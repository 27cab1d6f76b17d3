//! Application layer: pipeline builder, service orchestration, run metrics

pub mod metrics;
pub mod pipeline;
pub mod service;
