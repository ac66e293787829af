//! Benchmark for Writer, Reader and State.
//!
//! Measures construction, combinator chains, bottom short-circuiting and
//! nested composition.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use chronicle::effect::{Reader, State, Writer};
use std::hint::black_box;

// =============================================================================
// Writer Benchmarks
// =============================================================================

fn benchmark_writer_pure(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer_pure");

    group.bench_function("pure", |bencher| {
        bencher.iter(|| {
            let writer: Writer<String, i32> = Writer::pure(black_box(42));
            black_box(writer.evaluate())
        });
    });

    group.bench_function("new", |bencher| {
        bencher.iter(|| {
            let writer: Writer<String, i32> = Writer::new(black_box(42), vec!["log".to_string()]);
            black_box(writer.evaluate())
        });
    });

    group.finish();
}

fn benchmark_writer_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer_bind_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut writer: Writer<String, i32> = Writer::pure(0);
                for step in 0..depth {
                    writer = writer.flat_map(move |value| {
                        Writer::new(value + 1, vec![format!("step {step}")])
                    });
                }
                black_box(writer.evaluate())
            });
        });
    }

    group.finish();
}

fn benchmark_writer_bottom_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer_bottom");

    group.bench_function("active_chain_10", |bencher| {
        bencher.iter(|| {
            let mut writer: Writer<String, i32> = Writer::pure(black_box(1));
            for _ in 0..10 {
                writer = writer.fmap(|value| value + 1);
            }
            black_box(writer.evaluate())
        });
    });

    group.bench_function("bottom_chain_10", |bencher| {
        bencher.iter(|| {
            let mut writer: Writer<String, i32> = Writer::pure(black_box(1)).filter(|_| false);
            for _ in 0..10 {
                writer = writer.fmap(|value| value + 1);
            }
            black_box(writer.evaluate())
        });
    });

    group.finish();
}

// =============================================================================
// Nested Composition Benchmarks
// =============================================================================

fn benchmark_nested(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer_nested");

    group.bench_function("select_many_writer", |bencher| {
        bencher.iter(|| {
            let writer: Writer<String, i32> = Writer::new(black_box(2), vec!["outer".to_string()]);
            let composed = writer.select_many(
                |value| Writer::new(value * 3, vec!["inner".to_string()]),
                |value, inner| value + inner,
            );
            black_box(composed.evaluate())
        });
    });

    group.bench_function("select_many_reader", |bencher| {
        bencher.iter(|| {
            let writer: Writer<String, i32> = Writer::new(black_box(2), vec!["outer".to_string()]);
            let composed = writer.select_many(
                |factor| Reader::asks(move |environment: i32| environment * factor),
                |factor, scaled| factor + scaled,
            );
            black_box(composed.eval().map(|reader| reader.run(21)))
        });
    });

    group.bench_function("fold_t_state", |bencher| {
        bencher.iter(|| {
            let nested: Writer<String, State<i32, i32>> =
                Writer::new(State::get(), vec!["outer".to_string()]);
            let folded = nested.fold_t(black_box(1), |seed, value| seed + value);
            black_box(folded.eval().map(|state| state.run(5)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_writer_pure,
    benchmark_writer_bind_chain,
    benchmark_writer_bottom_short_circuit,
    benchmark_nested
);
criterion_main!(benches);
