//! Supply: purchase of gas from a seller at a fixed price.

use crate::cost_kind;
use crate::validation::{positive_quantity, priced};
use gc_01_pipeline::{meta_entry, GasState, Notes, OpOutcome, OpResult, Operation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const NAME: &str = "Supply";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyParams {
    pub seller: String,
    pub buyer: String,
    /// Fixed price per MMBtu
    pub price_fix: Decimal,
    pub contract_ref: String,
}

/// Transfers ownership to the buyer and charges the full parcel at the fixed price.
#[derive(Clone, Debug)]
pub struct Supply {
    params: SupplyParams,
}

impl Supply {
    pub fn new(params: SupplyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SupplyParams {
        &self.params
    }
}

impl Operation for Supply {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        positive_quantity(NAME, state)?;

        let cost = priced(NAME, cost_kind::GAS, state.qty_mmbtu, p.price_fix)?
            .with_meta("seller", &p.seller);
        let next = state
            .with_owner(p.buyer.as_str())
            .with_contract(p.contract_ref.as_str());
        let notes: Notes = [
            meta_entry("supply.seller", &p.seller),
            meta_entry("supply.buyer", &p.buyer),
            meta_entry("supply.contract", &p.contract_ref),
            meta_entry("supply.price_fix", p.price_fix),
        ]
        .into_iter()
        .collect();

        Ok(OpResult::new(next, vec![cost], notes))
    }

    fn describe(&self) -> String {
        format!(
            "Supply {} -> {} @ {} ({})",
            self.params.seller, self.params.buyer, self.params.price_fix, self.params.contract_ref
        )
    }
}
