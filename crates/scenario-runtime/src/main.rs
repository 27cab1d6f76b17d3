//! # Gas-Chain Scenario Runtime
//!
//! ## Startup Sequence
//!
//! 1. Parse CLI arguments, apply environment overrides
//! 2. Initialize logging (stderr, filter from `GC_LOG_LEVEL` / `RUST_LOG`)
//! 3. Load the scenario (file or built-in reference)
//! 4. Run the pipeline and print the report (stdout)

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{error, info};

use gas_telemetry::{init_logging, TelemetryConfig};
use gc_01_pipeline::{PipelineError, RunMetrics};
use gc_02_operations::units::mmbtu_to_gj;
use gc_03_reporting::{render_failure, render_report, LedgerSummary};
use scenario_runtime::{reference_scenario, run_scenario, Args, RuntimeConfig, Scenario};

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let config = RuntimeConfig::from_args(Args::parse());
    init_logging(&TelemetryConfig::from_env()).context("Failed to initialize logging")?;

    let scenario = match &config.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("Failed to load scenario from {}", path.display()))?,
        None => reference_scenario(),
    };
    info!(
        scenario = %scenario.name,
        steps = scenario.steps.len(),
        max_operations = config.pipeline.max_operations,
        "Starting scenario"
    );

    if config.describe {
        for line in scenario.pipeline().describe() {
            println!("{}", line);
        }
        println!();
    }

    match run_scenario(&scenario, config.pipeline.clone()) {
        Ok(result) => {
            let metrics = RunMetrics::compute(&scenario.initial, &result);
            if config.json {
                let out = json!({
                    "scenario": scenario.name,
                    "result": result,
                    "summary": LedgerSummary::from_result(&result),
                    "metrics": metrics,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("Failed to encode result")?
                );
            } else {
                match mmbtu_to_gj(scenario.initial.qty_mmbtu) {
                    Some(gj) => println!(
                        "Parcel: {} MMBtu ({} GJ)\n",
                        scenario.initial.qty_mmbtu, gj
                    ),
                    None => println!("Parcel: {} MMBtu\n", scenario.initial.qty_mmbtu),
                }
                print!("{}", render_report(&result));
                if let Some(pct) = metrics.quantity_efficiency_pct {
                    println!("\nQuantity efficiency: {:.2}%", pct);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(PipelineError::Operation(e)) => {
            error!(operation = %e.operation(), error = %e, "Scenario failed");
            if config.json {
                println!("{}", json!({ "scenario": scenario.name, "error": e.to_string() }));
            } else {
                println!("{}", render_failure(&e));
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Scenario rejected"),
    }
}
