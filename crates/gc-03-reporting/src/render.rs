//! Plain-text report rendering

use crate::summary::LedgerSummary;
use gc_01_pipeline::{CostItem, Notes, OpResult, OperationError};
use std::fmt::Write;

/// Column width for cost kinds and note keys.
pub const KIND_WIDTH: usize = 22;

pub fn render_costs(costs: &[CostItem]) -> String {
    let mut out = String::from("Costs:\n");
    for c in costs {
        let _ = writeln!(
            out,
            " - {:<width$} qty={} rate={} amount={}",
            c.kind,
            c.qty_mmbtu,
            c.rate_per_mmbtu,
            c.amount,
            width = KIND_WIDTH
        );
    }
    out
}

pub fn render_notes(notes: &Notes) -> String {
    let mut out = String::from("Notes:\n");
    for (key, value) in notes {
        let _ = writeln!(out, " - {:<width$} {}", key, value, width = KIND_WIDTH);
    }
    out
}

/// Cost table, rounded total and notes of a successful run.
pub fn render_report(result: &OpResult) -> String {
    let summary = LedgerSummary::from_result(result);
    let mut out = render_costs(&result.costs);
    let _ = writeln!(out, "\nTotal cost: {:.2} USD\n", summary.total_cents);
    out.push_str(&render_notes(&result.notes));
    out
}

pub fn render_failure(error: &OperationError) -> String {
    format!("Pipeline failed: {}", error)
}
