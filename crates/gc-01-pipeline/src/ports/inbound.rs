//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{GasState, OpResult};
use crate::domain::errors::PipelineError;
use crate::ports::outbound::Operation;

/// Primary pipeline API
pub trait PipelineApi: Send + Sync {
    /// Apply `operations` in order starting from `initial`.
    ///
    /// Stops at the first failing operation and returns its error; the costs
    /// and notes gathered before the failure are not returned.
    fn run_pipeline(
        &self,
        operations: &[Box<dyn Operation>],
        initial: GasState,
    ) -> Result<OpResult, PipelineError>;

    /// Numbered one-line description of each step.
    fn describe(&self, operations: &[Box<dyn Operation>]) -> Vec<String>;
}
