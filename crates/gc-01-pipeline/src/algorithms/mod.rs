//! Pipeline algorithms
//!
//! - Merge: right-biased combination of two results
//! - Runner: sequential, fail-fast application of operations

pub mod merge;
pub mod runner;

pub use merge::merge;
pub use runner::{run, run_iter, run_iter_inspect, StepEvent};
