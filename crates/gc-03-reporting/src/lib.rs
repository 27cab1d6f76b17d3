//! # GC-03: Reporting
//!
//! Read-only consumers of pipeline results: a [`LedgerSummary`] with
//! per-kind totals and plain-text tables for the console.
//!
//! ```text
//! Costs:
//!  - GAS                    qty=10000 rate=2.85 amount=28500.00
//!
//! Total cost: 28500.00 USD
//! ```

pub mod render;
pub mod summary;

pub use render::{render_costs, render_failure, render_notes, render_report, KIND_WIDTH};
pub use summary::LedgerSummary;
