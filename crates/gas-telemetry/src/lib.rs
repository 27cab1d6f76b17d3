//! # Gas Telemetry
//!
//! Logging for Gas-Chain binaries. Library crates only emit `tracing`
//! events; installing a subscriber is the job of the binary, through
//! [`init_logging`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gas_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Pipeline events are now written to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GC_SERVICE_NAME` | `gas-chain` | Service name in log lines |
//! | `GC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `GC_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `GC_JSON_LOGS` | `false` | JSON log lines |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Span carrying the scenario being run.
///
/// ```rust,ignore
/// let _span = gas_telemetry::scenario_span!("reference", operations = 7).entered();
/// ```
#[macro_export]
macro_rules! scenario_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!("scenario", name = %$name $(, $($field)*)?)
    };
}
