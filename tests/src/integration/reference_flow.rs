//! # Reference Scenario Flow
//!
//! Runs the built-in reference scenario through every layer:
//! scenario-runtime → gc-01 service → gc-02 operations → gc-03 report.
//!
//! Ledger expected for the reference run:
//!
//! | # | Kind | Amount |
//! |---|------|--------|
//! | 1 | GAS | 28500 |
//! | 2 | TRANSPORT-USAGE | 1498.5 |
//! | 3 | TRANSPORT-RESERVATION | 499.5 |
//! | 4 | STORAGE-INJ-USAGE | 150 |
//! | 5 | FEE-TRADE | 99.8 |
//! | 6 | STORAGE-WDR-USAGE | 40 |
//! | 7 | PENALTY-IMBALANCE | 3607.005 |
//! | 8 | STORAGE-CARRY | 54900 × 30/365 × 0.10 |

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{dec, scenario_path};
    use gc_01_pipeline::domain::invariants::{
        invariant_ledger_concatenation, invariant_notes_overlay, invariant_state_from_last_step,
    };
    use gc_01_pipeline::{
        run, run_iter_inspect, MetaValue, OpResult, Operation, PipelineConfig, RunMetrics,
        StepEvent,
    };
    use gc_03_reporting::{render_report, LedgerSummary};
    use rust_decimal::Decimal;
    use scenario_runtime::{reference_scenario, run_scenario, Scenario};

    fn run_reference() -> OpResult {
        run_scenario(&reference_scenario(), PipelineConfig::default()).unwrap()
    }

    #[test]
    fn test_reference_ledger_order() {
        let result = run_reference();

        let kinds: Vec<_> = result.costs.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "GAS",
                "TRANSPORT-USAGE",
                "TRANSPORT-RESERVATION",
                "STORAGE-INJ-USAGE",
                "FEE-TRADE",
                "STORAGE-WDR-USAGE",
                "PENALTY-IMBALANCE",
                "STORAGE-CARRY",
            ]
        );
    }

    #[test]
    fn test_reference_amounts() {
        let result = run_reference();
        let amounts: Vec<_> = result.costs.iter().map(|c| c.amount).collect();

        assert_eq!(amounts[0], dec("28500"));
        assert_eq!(amounts[1], dec("1498.5"));
        assert_eq!(amounts[2], dec("499.5"));
        assert_eq!(amounts[3], dec("150"));
        assert_eq!(amounts[4], dec("99.8"));
        assert_eq!(amounts[5], dec("40"));
        assert_eq!(amounts[6], dec("3607.005"));
        assert!(amounts[7] > dec("451.23") && amounts[7] < dec("451.24"));

        let summary = LedgerSummary::from_result(&result);
        assert_eq!(summary.total_cents, dec("34846.04"));
    }

    #[test]
    fn test_reference_final_state() {
        let scenario = reference_scenario();
        let result = run_reference();

        assert_eq!(result.state.qty_mmbtu, Decimal::ZERO);
        assert_eq!(result.state.location, "AGUA-DULCE");
        assert_eq!(result.state.owner, "SE");
        assert_eq!(result.state.contract, "SBF_044_17");
        assert_eq!(result.state.timestamp, scenario.initial.timestamp);

        let metrics = RunMetrics::compute(&scenario.initial, &result);
        assert_eq!(metrics.quantity_efficiency_pct, Some(Decimal::ZERO));
        assert_eq!(metrics.cost_items, 8);
    }

    #[test]
    fn test_reference_notes_keep_latest_storage_values() {
        let result = run_reference();

        // Inject and Withdraw both write storage.inv_before; Withdraw runs later.
        assert_eq!(
            result.notes.get("storage.inv_before"),
            Some(&MetaValue::from(dec("54900")))
        );
        assert_eq!(
            result.notes.get("storage.effective_in"),
            Some(&MetaValue::from(dec("4900")))
        );
        assert_eq!(
            result.notes.get("transport.exit"),
            Some(&MetaValue::from("AGUA-DULCE"))
        );
    }

    #[test]
    fn test_reference_invariants_hold() {
        let scenario = reference_scenario();
        let pipeline = scenario.pipeline();
        let mut steps = Vec::new();

        let result = run_iter_inspect(
            pipeline.operations().iter().map(|op| -> &dyn Operation { &**op }),
            scenario.initial.clone(),
            |event| {
                if let StepEvent::Applied { output, .. } = event {
                    steps.push(output.clone());
                }
            },
        )
        .unwrap();

        assert_eq!(steps.len(), 7);
        assert!(invariant_state_from_last_step(&result, &scenario.initial, &steps));
        assert!(invariant_ledger_concatenation(&result, &steps));
        assert!(invariant_notes_overlay(&result, &steps));
    }

    #[test]
    fn test_reference_is_deterministic() {
        let scenario = reference_scenario();
        let first = run(scenario.pipeline().operations(), scenario.initial.clone());
        let second = run(scenario.pipeline().operations(), scenario.initial.clone());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.unwrap()).unwrap(),
            serde_json::to_string(&second.unwrap()).unwrap()
        );
    }

    #[test]
    fn test_reference_file_matches_builtin() {
        let from_file = Scenario::load(&scenario_path("reference.json")).unwrap();
        assert_eq!(from_file, reference_scenario());

        let result = run_scenario(&from_file, PipelineConfig::default()).unwrap();
        assert_eq!(result, run_reference());
    }

    #[test]
    fn test_reference_report() {
        let report = render_report(&run_reference());

        assert!(report.starts_with("Costs:\n"));
        assert_eq!(
            report
                .lines()
                .filter(|l| l.starts_with(" - PENALTY-IMBALANCE      qty="))
                .count(),
            1
        );
        assert!(report.contains("Total cost: 34846.04 USD"));
        assert!(report.contains(" - consume.imbalance      -3610"));
    }
}
