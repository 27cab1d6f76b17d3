//! Trade: resale of the parcel to a new counterparty for a fee adder.

use crate::cost_kind;
use crate::validation::{positive_quantity, priced};
use gc_01_pipeline::{meta_entry, GasState, Notes, OpOutcome, OpResult, Operation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const NAME: &str = "Trade";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeParams {
    pub seller: String,
    pub buyer: String,
    /// Fee per MMBtu charged on top of the gas price
    pub adder: Decimal,
    pub contract_ref: String,
}

#[derive(Clone, Debug)]
pub struct Trade {
    params: TradeParams,
}

impl Trade {
    pub fn new(params: TradeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TradeParams {
        &self.params
    }
}

impl Operation for Trade {
    fn name(&self) -> &str {
        NAME
    }

    fn apply(&self, state: &GasState) -> OpOutcome {
        let p = &self.params;
        positive_quantity(NAME, state)?;

        let fee = priced(NAME, cost_kind::FEE_TRADE, state.qty_mmbtu, p.adder)?
            .with_meta("seller", &p.seller);
        let next = state
            .with_owner(p.buyer.as_str())
            .with_contract(p.contract_ref.as_str());
        let notes: Notes = [
            meta_entry("trade.seller", &p.seller),
            meta_entry("trade.buyer", &p.buyer),
            meta_entry("trade.contract", &p.contract_ref),
        ]
        .into_iter()
        .collect();

        Ok(OpResult::new(next, vec![fee], notes))
    }

    fn describe(&self) -> String {
        format!(
            "Trade {} -> {} (+{}, {})",
            self.params.seller, self.params.buyer, self.params.adder, self.params.contract_ref
        )
    }
}
