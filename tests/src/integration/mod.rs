//! Cross-crate integration tests

pub mod failures;
pub mod properties;
pub mod reference_flow;
