//! Benchmarks for predicate compilation and evaluation.
//!
//! Compilation is measured separately from evaluation: operators compile once per
//! schema and evaluate once per tuple, so the evaluation loop is what matters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relkit_core::schema::{Attribute, Schema};
use relkit_core::{build_correspondence, partial_equals, DataType, Tuple, Value};
use relkit_predicate::{AdHoc, Compare, Predicate};

fn wide_schema(width: usize) -> Schema {
    (0..width)
        .try_fold(Schema::builder(), |b, i| {
            b.add_field(format!("c{}", i), DataType::Int64)
        })
        .unwrap()
        .build()
}

fn create_tuples(count: usize, width: usize) -> Vec<Tuple> {
    (0..count)
        .map(|i| {
            Tuple::new(
                (0..width)
                    .map(|c| Value::Int64(((i * 31 + c * 7) % 100) as i64))
                    .collect(),
            )
        })
        .collect()
}

/// A chain of `depth` comparisons joined by And/Or.
fn comparison_chain(depth: usize) -> Predicate {
    (1..depth).fold(Predicate::lt("c0", 50i64), |acc, i| {
        let next = Attribute::new(format!("c{}", i % 8)).greater_equal(Attribute::new("c0"));
        if i % 2 == 0 {
            acc.and(next)
        } else {
            acc.or(next)
        }
    })
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let schema = wide_schema(32);
    for depth in [1usize, 8, 64] {
        let pred = comparison_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &pred, |b, pred| {
            b.iter(|| black_box(pred.compile(&schema).unwrap()))
        });
    }
    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    let schema = wide_schema(8);
    let tuples = create_tuples(10_000, 8);

    for depth in [1usize, 8, 64] {
        let compiled = comparison_chain(depth).compile(&schema).unwrap();
        group.bench_with_input(BenchmarkId::new("chain", depth), &tuples, |b, tuples| {
            b.iter(|| tuples.iter().filter(|t| compiled.eval(*t)).count())
        });
    }

    let domain = wide_schema(2);
    let adhoc = Predicate::from(AdHoc::new(domain, |t| t.get(0) < t.get(1)))
        .compile(&schema)
        .unwrap();
    group.bench_with_input(BenchmarkId::new("ad_hoc", 2), &tuples, |b, tuples| {
        b.iter(|| tuples.iter().filter(|t| adhoc.eval(*t)).count())
    });
    group.finish();
}

fn bench_partial_equals(c: &mut Criterion) {
    let schema = wide_schema(16);
    let other = wide_schema(8);
    let corr = build_correspondence(&schema, &other);
    let left = create_tuples(1, 16).remove(0);
    let right = Tuple::new(left.values()[..8].to_vec());

    c.bench_function("partial_equals/8", |b| {
        b.iter(|| black_box(partial_equals(&left, &right, &corr)))
    });
}

criterion_group!(benches, bench_compile, bench_eval, bench_partial_equals);
criterion_main!(benches);
