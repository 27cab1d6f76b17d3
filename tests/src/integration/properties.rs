//! # Pipeline Properties
//!
//! Generated pipelines of real operations, checked against the domain
//! invariants: state threading, ledger concatenation, notes overlay.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::make_state;
    use gc_01_pipeline::domain::invariants::{
        invariant_ledger_concatenation, invariant_notes_overlay, invariant_state_from_last_step,
    };
    use gc_01_pipeline::{run, run_iter_inspect, Operation, StepEvent};
    use gc_02_operations::{
        Supply, SupplyParams, Trade, TradeParams, Transport, TransportParams,
    };
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// Step recipe: which operation, plus a rate in hundredths.
    #[derive(Clone, Debug)]
    enum Recipe {
        Supply(u32),
        Trade(u32),
        Loop(u32),
    }

    fn arb_recipe() -> impl Strategy<Value = Recipe> {
        prop_oneof![
            (1u32..500).prop_map(Recipe::Supply),
            (0u32..50).prop_map(Recipe::Trade),
            (0u32..1000).prop_map(Recipe::Loop),
        ]
    }

    fn build(recipe: &Recipe, index: usize) -> Box<dyn Operation> {
        match *recipe {
            Recipe::Supply(cents) => Box::new(Supply::new(SupplyParams {
                seller: format!("seller-{}", index),
                buyer: format!("buyer-{}", index),
                price_fix: Decimal::new(cents.into(), 2),
                contract_ref: format!("C-{}", index),
            })),
            Recipe::Trade(cents) => Box::new(Trade::new(TradeParams {
                seller: format!("seller-{}", index),
                buyer: format!("buyer-{}", index),
                adder: Decimal::new(cents.into(), 2),
                contract_ref: format!("T-{}", index),
            })),
            // Loop line: enters and exits at the same point, burning fuel.
            Recipe::Loop(fuel_hundredths) => Box::new(Transport::new(TransportParams {
                entry: "HUB".to_string(),
                exit: "HUB".to_string(),
                shipper: "loop".to_string(),
                fuel_pct: Decimal::new(fuel_hundredths.into(), 2),
                usage_rate: Decimal::new(10, 2),
                reservation: Decimal::new(2, 2),
            })),
        }
    }

    proptest! {
        #[test]
        fn generated_pipelines_satisfy_invariants(
            recipes in prop::collection::vec(arb_recipe(), 0..12),
            qty in 1u32..1_000_000,
        ) {
            let ops: Vec<_> = recipes.iter().enumerate().map(|(i, r)| build(r, i)).collect();
            let initial = make_state(&qty.to_string(), "HUB");
            let mut steps = Vec::new();

            let result = run_iter_inspect(
                ops.iter().map(|op| -> &dyn Operation { &**op }),
                initial.clone(),
                |event| {
                    if let StepEvent::Applied { output, .. } = event {
                        steps.push(output.clone());
                    }
                },
            )
            .unwrap();

            prop_assert_eq!(steps.len(), ops.len());
            prop_assert!(invariant_state_from_last_step(&result, &initial, &steps));
            prop_assert!(invariant_ledger_concatenation(&result, &steps));
            prop_assert!(invariant_notes_overlay(&result, &steps));
        }

        #[test]
        fn fuel_never_creates_gas(
            fuels in prop::collection::vec(0u32..10_000, 1..8),
            qty in 1u32..1_000_000,
        ) {
            let ops: Vec<_> = fuels
                .iter()
                .enumerate()
                .map(|(i, f)| build(&Recipe::Loop(*f), i))
                .collect();
            let initial = make_state(&qty.to_string(), "HUB");

            let result = run(&ops, initial.clone()).unwrap();

            prop_assert!(result.state.qty_mmbtu <= initial.qty_mmbtu);
            prop_assert!(result.state.qty_mmbtu >= Decimal::ZERO);
            prop_assert_eq!(result.costs.len(), 2 * ops.len());
        }

        #[test]
        fn runs_are_repeatable(
            recipes in prop::collection::vec(arb_recipe(), 0..12),
            qty in 1u32..1_000_000,
        ) {
            let ops: Vec<_> = recipes.iter().enumerate().map(|(i, r)| build(r, i)).collect();
            let initial = make_state(&qty.to_string(), "HUB");

            prop_assert_eq!(run(&ops, initial.clone()), run(&ops, initial));
        }
    }
}
