//! Pipeline Service
//!
//! Main service implementing PipelineApi.

use crate::algorithms::{run_iter_inspect, StepEvent};
use crate::application::pipeline::describe_operations;
use crate::config::PipelineConfig;
use crate::domain::entities::{GasState, OpResult};
use crate::domain::errors::PipelineError;
use crate::ports::inbound::PipelineApi;
use crate::ports::outbound::Operation;

use tracing::{debug, info, warn};

/// Pipeline Service
///
/// Orchestrates a run:
/// 1. Check the operation count against the configured limit
/// 2. Apply operations in order, merging each result
/// 3. Abort on the first failure
pub struct PipelineService {
    config: PipelineConfig,
}

impl PipelineService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn validate_length(&self, operations: &[Box<dyn Operation>]) -> Result<(), PipelineError> {
        if operations.len() > self.config.max_operations {
            return Err(PipelineError::TooManyOperations {
                count: operations.len(),
                max: self.config.max_operations,
            });
        }
        Ok(())
    }

    fn log_step(&self, event: &StepEvent<'_>) {
        match event {
            StepEvent::Applied {
                index,
                operation,
                output,
            } => {
                if self.config.log_steps {
                    debug!(
                        step = index,
                        operation = %operation,
                        cost_items = output.costs.len(),
                        qty_mmbtu = %output.state.qty_mmbtu,
                        location = %output.state.location,
                        "Operation applied"
                    );
                }
            }
            StepEvent::Failed {
                index,
                operation,
                error,
            } => {
                warn!(
                    step = index,
                    operation = %operation,
                    category = ?error.category(),
                    error = %error,
                    "Operation failed, aborting pipeline"
                );
            }
        }
    }
}

impl Default for PipelineService {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineApi for PipelineService {
    fn run_pipeline(
        &self,
        operations: &[Box<dyn Operation>],
        initial: GasState,
    ) -> Result<OpResult, PipelineError> {
        self.validate_length(operations)?;

        info!(
            operations = operations.len(),
            qty_mmbtu = %initial.qty_mmbtu,
            location = %initial.location,
            "Running gas pipeline"
        );

        let result = run_iter_inspect(
            operations.iter().map(|op| -> &dyn Operation { &**op }),
            initial,
            |event| self.log_step(&event),
        )?;

        info!(
            cost_items = result.costs.len(),
            total_amount = %result.total_amount(),
            qty_mmbtu = %result.state.qty_mmbtu,
            location = %result.state.location,
            "Gas pipeline complete"
        );

        Ok(result)
    }

    fn describe(&self, operations: &[Box<dyn Operation>]) -> Vec<String> {
        describe_operations(operations)
    }
}
