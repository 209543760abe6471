use crate::common::{configure_criterion, simulate_upload};
use criterion::{criterion_group, Criterion};
use outcome_rail::convert::outcome_to_result;
use outcome_rail::{NoValue, Outcome, ResultExt};
use std::hint::black_box;

pub fn bench_result_to_outcome(c: &mut Criterion) {
    c.bench_function("conversions/into_outcome_ok", |b| {
        b.iter(|| black_box(simulate_upload(black_box(7)).into_outcome()))
    });

    c.bench_function("conversions/into_outcome_err", |b| {
        b.iter(|| black_box(simulate_upload(black_box(100)).into_outcome()))
    });

    c.bench_function("conversions/or_failure_message", |b| {
        b.iter(|| black_box(simulate_upload(black_box(150)).or_failure_message("sync aborted")))
    });
}

pub fn bench_outcome_to_result(c: &mut Criterion) {
    let failed: Outcome<NoValue> = Outcome::successful()
        .with_no_value()
        .with_success_message("manifest loaded")
        .with_failure_message("chunk 3 corrupt");

    c.bench_function("conversions/outcome_to_result", |b| {
        b.iter(|| black_box(outcome_to_result(failed.clone())))
    });
}

pub fn bench_batch_import(c: &mut Criterion) {
    c.bench_function("conversions/batch_1000", |b| {
        b.iter(|| {
            let outcome = (0..1000u64).map(simulate_upload).fold(
                Outcome::<NoValue>::successful().with_no_value(),
                |outcome, result| match result {
                    Ok(size) => outcome.with_success_message(format!("{size} bytes")),
                    Err(error) => outcome.with_exceptional_failure(error),
                },
            );
            black_box(outcome)
        })
    });
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets = bench_result_to_outcome, bench_outcome_to_result, bench_batch_import,
}
