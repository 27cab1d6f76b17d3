//! # Gas-Chain Pipeline Benchmarks
//!
//! | Benchmark | What it measures |
//! |-----------|------------------|
//! | reference | Full reference scenario through the runner |
//! | merge_chain | Fold cost of long pipelines of cheap operations |
//! | report | Text rendering of the reference ledger |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gc_01_pipeline::{meta_entry, run, CostItem, FnOperation, GasState, OpResult, Operation};
use gc_03_reporting::render_report;
use rust_decimal::Decimal;
use scenario_runtime::reference_scenario;

fn bench_reference(c: &mut Criterion) {
    let scenario = reference_scenario();
    let pipeline = scenario.pipeline();

    c.bench_function("reference", |b| {
        b.iter(|| black_box(run(pipeline.operations(), scenario.initial.clone())))
    });
}

fn bench_merge_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_chain");
    let initial = reference_scenario().initial;

    for size in [10usize, 100, 1000] {
        let ops: Vec<Box<dyn Operation>> = (0..size)
            .map(|i| {
                Box::new(FnOperation::new("fee", move |state: &GasState| {
                    Ok(OpResult::new(
                        state.clone(),
                        vec![CostItem::new("FEE", state.qty_mmbtu, Decimal::new(1, 2))],
                        [meta_entry("step", i as i64)].into_iter().collect(),
                    ))
                })) as Box<dyn Operation>
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ops, |b, ops| {
            b.iter(|| black_box(run(ops, initial.clone())))
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let scenario = reference_scenario();
    let result = match run(scenario.pipeline().operations(), scenario.initial.clone()) {
        Ok(result) => result,
        Err(e) => panic!("reference scenario failed: {}", e),
    };

    c.bench_function("report", |b| b.iter(|| black_box(render_report(&result))));
}

criterion_group!(benches, bench_reference, bench_merge_chain, bench_report);
criterion_main!(benches);
