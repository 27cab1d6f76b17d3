//! # Failure Propagation
//!
//! A failing operation ends the run: its error reaches the caller unchanged
//! and nothing after it is applied.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{dec, make_state, scenario_path};
    use gc_01_pipeline::{
        ErrorCategory, FnOperation, GasState, OpResult, Operation, OperationError, Pipeline,
        PipelineApi, PipelineConfig, PipelineError, PipelineService,
    };
    use gc_02_operations::{
        Inject, InjectParams, Supply, SupplyParams, Transport, TransportParams,
    };
    use gc_03_reporting::render_failure;
    use scenario_runtime::reference::agua_dulce;
    use scenario_runtime::{run_scenario, Scenario};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn supply() -> Supply {
        Supply::new(SupplyParams {
            seller: "JP Morgan".to_string(),
            buyer: "SaaviMX".to_string(),
            price_fix: dec("2.85"),
            contract_ref: "NAESB-A006F1".to_string(),
        })
    }

    fn transport(entry: &str) -> Transport {
        Transport::new(TransportParams {
            entry: entry.to_string(),
            exit: "AGUA-DULCE".to_string(),
            shipper: "SaaviMX-Trans".to_string(),
            fuel_pct: dec("0.1"),
            usage_rate: dec("0.15"),
            reservation: dec("0.05"),
        })
    }

    fn counting(calls: Arc<AtomicUsize>) -> impl Operation {
        FnOperation::new("counting", move |state: &GasState| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(OpResult::identity(state.clone()))
        })
    }

    #[test]
    fn test_overflowing_charge_fails_instead_of_panicking() {
        let calls = Arc::new(AtomicUsize::new(0));
        let huge_price = Supply::new(SupplyParams {
            price_fix: dec("10"),
            ..supply().params().clone()
        });
        let pipeline = Pipeline::new()
            .then(huge_price)
            .then(counting(calls.clone()));

        let err = pipeline
            .run(make_state("10000000000000000000000000000", "Ehrenberg"))
            .unwrap_err();

        assert_eq!(
            err,
            OperationError::ArithmeticOverflow {
                operation: "Supply",
                field: "amount",
            }
        );
        assert_eq!(err.category(), ErrorCategory::BoundViolation);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_location_mismatch_stops_pipeline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .then(supply())
            .then(transport("Waha"))
            .then(counting(calls.clone()));

        let err = pipeline.run(make_state("10000", "Ehrenberg")).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::StateMismatch);
        assert_eq!(err.operation(), "Transport");
        let message = err.to_string();
        assert!(message.contains("Ehrenberg"));
        assert!(message.contains("Waha"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_service_passes_operation_error_through() {
        let ops: Vec<Box<dyn Operation>> = vec![Box::new(supply()), Box::new(transport("Waha"))];

        let result = PipelineService::new().run_pipeline(&ops, make_state("10000", "Ehrenberg"));

        assert_eq!(
            result,
            Err(PipelineError::Operation(OperationError::LocationMismatch {
                operation: "Transport",
                actual: "Ehrenberg".to_string(),
                expected: "Waha".to_string(),
            }))
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let pipeline = Pipeline::new()
            .then(FnOperation::new("first", |_: &GasState| {
                Err(OperationError::rejected("first", "meter offline"))
            }))
            .then(FnOperation::new("second", |_: &GasState| {
                Err(OperationError::rejected("second", "should not run"))
            }));

        let err = pipeline.run(make_state("10", "X")).unwrap_err();
        assert_eq!(err.to_string(), "first: meter offline");
    }

    #[test]
    fn test_storage_full_mid_pipeline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let full = agua_dulce().with_inventory(dec("199000"));
        let pipeline = Pipeline::new()
            .then(supply())
            .then(transport("Ehrenberg"))
            .then(Inject::new(InjectParams {
                storage: full,
                qty_in: dec("5000"),
            }))
            .then(counting(calls.clone()));

        let err = pipeline.run(make_state("10000", "Ehrenberg")).unwrap_err();

        assert!(matches!(
            err,
            OperationError::CapacityExceeded {
                operation: "Storage.Inject",
                field: "inventory",
                ..
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_mismatch_scenario_file() {
        let scenario = Scenario::load(&scenario_path("transport_mismatch.json")).unwrap();

        let err = run_scenario(&scenario, PipelineConfig::default()).unwrap_err();

        match err {
            PipelineError::Operation(e) => assert_eq!(
                render_failure(&e),
                "Pipeline failed: Transport: state at Ehrenberg, expected Waha"
            ),
            other => panic!("expected operation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_length_guard_runs_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let ops: Vec<Box<dyn Operation>> = (0..4)
            .map(|_| Box::new(counting(calls.clone())) as Box<dyn Operation>)
            .collect();
        let service = PipelineService::with_config(PipelineConfig {
            max_operations: 3,
            log_steps: false,
        });

        let result = service.run_pipeline(&ops, make_state("10", "X"));

        assert!(matches!(result, Err(PipelineError::TooManyOperations { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
