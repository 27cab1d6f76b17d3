//! Runtime configuration from the command line and environment.

use clap::Parser;
use gc_01_pipeline::PipelineConfig;
use std::env;
use std::path::PathBuf;

/// Gas-Chain scenario runner
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scenario-runtime")]
#[command(about = "Run a gas supply-chain scenario and print its cost ledger")]
pub struct Args {
    /// JSON scenario file (runs the built-in reference scenario if omitted)
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Maximum number of operations accepted in one run
    #[arg(long)]
    pub max_operations: Option<usize>,

    /// Print the numbered step list before running
    #[arg(long)]
    pub describe: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub scenario: Option<PathBuf>,
    pub json: bool,
    pub describe: bool,
    pub pipeline: PipelineConfig,
}

impl RuntimeConfig {
    /// Resolve the configuration. `GC_MAX_OPERATIONS` applies unless
    /// `--max-operations` was given.
    pub fn from_args(args: Args) -> Self {
        Self::from_args_with(args, |key| env::var(key).ok())
    }

    pub fn from_args_with<F>(args: Args, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut pipeline = PipelineConfig::default();
        if let Some(max) = args
            .max_operations
            .or_else(|| lookup("GC_MAX_OPERATIONS").and_then(|v| v.parse().ok()))
        {
            pipeline.max_operations = max;
        }

        Self {
            scenario: args.scenario,
            json: args.json,
            describe: args.describe,
            pipeline,
        }
    }
}
