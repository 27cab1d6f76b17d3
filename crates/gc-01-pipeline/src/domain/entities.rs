//! Core entities for the gas pipeline
//!
//! All records are values: operations read a state and build a new one, they
//! never modify the state they were given.

use super::value_objects::{Meta, MetaValue, Mmbtu, Notes};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Physical and ownership state of a gas parcel at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasState {
    /// Quantity held, in MMBtu
    pub qty_mmbtu: Mmbtu,
    /// Current owner
    pub owner: String,
    /// Current location (pipeline point, storage field, meter)
    pub location: String,
    /// Gas day / valuation time
    pub timestamp: NaiveDateTime,
    /// Contract under which the gas is held
    pub contract: String,
}

impl GasState {
    pub fn new(
        qty_mmbtu: Mmbtu,
        owner: impl Into<String>,
        location: impl Into<String>,
        timestamp: NaiveDateTime,
        contract: impl Into<String>,
    ) -> Self {
        Self {
            qty_mmbtu,
            owner: owner.into(),
            location: location.into(),
            timestamp,
            contract: contract.into(),
        }
    }

    /// Copy of this state with a different quantity.
    pub fn with_qty(&self, qty_mmbtu: Mmbtu) -> Self {
        Self {
            qty_mmbtu,
            ..self.clone()
        }
    }

    /// Copy of this state with a different owner.
    pub fn with_owner(&self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..self.clone()
        }
    }

    /// Copy of this state at a different location.
    pub fn with_location(&self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self.clone()
        }
    }

    /// Copy of this state under a different contract.
    pub fn with_contract(&self, contract: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            ..self.clone()
        }
    }

    /// Copy of this state at a different time.
    pub fn with_timestamp(&self, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }
}

/// One charge or fee incurred by a single operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Charge tag, e.g. `TRANSPORT-USAGE`
    pub kind: String,
    /// Quantity basis, in MMBtu
    pub qty_mmbtu: Mmbtu,
    /// Rate per MMBtu
    pub rate_per_mmbtu: Decimal,
    /// Charged amount
    pub amount: Decimal,
    /// Diagnostic context
    #[serde(default)]
    pub meta: Meta,
}

impl CostItem {
    /// Cost whose amount is `qty × rate`.
    ///
    /// # Panics
    ///
    /// If the product overflows. Use [`CostItem::try_new`] for quantities or
    /// rates that come from outside the program.
    pub fn new(kind: impl Into<String>, qty_mmbtu: Mmbtu, rate_per_mmbtu: Decimal) -> Self {
        Self::with_amount(kind, qty_mmbtu, rate_per_mmbtu, qty_mmbtu * rate_per_mmbtu)
    }

    /// Cost whose amount is `qty × rate`, or `None` if the product overflows.
    pub fn try_new(
        kind: impl Into<String>,
        qty_mmbtu: Mmbtu,
        rate_per_mmbtu: Decimal,
    ) -> Option<Self> {
        let amount = qty_mmbtu.checked_mul(rate_per_mmbtu)?;
        Some(Self::with_amount(kind, qty_mmbtu, rate_per_mmbtu, amount))
    }

    /// Cost with an explicit amount (flat fees, charges not priced per unit).
    pub fn with_amount(
        kind: impl Into<String>,
        qty_mmbtu: Mmbtu,
        rate_per_mmbtu: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            kind: kind.into(),
            qty_mmbtu,
            rate_per_mmbtu,
            amount,
            meta: Meta::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// Output of one operation, or of the pipeline accumulated so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpResult {
    /// Resulting gas state
    pub state: GasState,
    /// Costs in emission order
    pub costs: Vec<CostItem>,
    /// Notes; a later write to the same key replaces the earlier one
    pub notes: Notes,
}

impl OpResult {
    pub fn new(state: GasState, costs: Vec<CostItem>, notes: Notes) -> Self {
        Self {
            state,
            costs,
            notes,
        }
    }

    /// Result with no costs and no notes. Neutral element of [`merge`].
    ///
    /// [`merge`]: crate::algorithms::merge
    pub fn identity(state: GasState) -> Self {
        Self::new(state, Vec::new(), Notes::new())
    }

    /// Sum of all cost amounts, saturating at the decimal bounds.
    pub fn total_amount(&self) -> Decimal {
        self.costs
            .iter()
            .fold(Decimal::ZERO, |total, c| total.saturating_add(c.amount))
    }
}
