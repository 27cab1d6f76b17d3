//! Ledger totals

use gc_01_pipeline::OpResult;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view of a result's cost ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub item_count: usize,
    /// Exact sum of all amounts
    pub total: Decimal,
    /// Total rounded to cents, half away from zero
    pub total_cents: Decimal,
    /// Sum of amounts per cost kind
    pub by_kind: BTreeMap<String, Decimal>,
}

impl LedgerSummary {
    pub fn from_result(result: &OpResult) -> Self {
        let mut by_kind: BTreeMap<String, Decimal> = BTreeMap::new();
        for cost in &result.costs {
            let subtotal = by_kind.entry(cost.kind.clone()).or_default();
            *subtotal = subtotal.saturating_add(cost.amount);
        }
        let total = result.total_amount();

        Self {
            item_count: result.costs.len(),
            total,
            total_cents: round_cents(total),
            by_kind,
        }
    }

    pub fn kind_total(&self, kind: &str) -> Decimal {
        self.by_kind.get(kind).copied().unwrap_or_default()
    }
}

pub(crate) fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
