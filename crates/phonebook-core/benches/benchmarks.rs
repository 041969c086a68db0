//! Lookup and churn benchmarks over a synthetic book.
//!
//! ```bash
//! cargo bench -p phonebook-core --bench benchmarks
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use phonebook_core::prelude::*;
use std::hint::black_box;

const STATES: [&str; 5] = ["MO", "IL", "CA", "TX", "NY"];
const CITIES: [&str; 4] = ["St Louis", "Chicago", "Austin", "Albany"];

fn record(i: usize) -> Record {
    let address = Address::new(
        &format!("{i} Main St"),
        CITIES[i % CITIES.len()],
        STATES[i % STATES.len()],
        "63303",
    )
    .expect("valid address");
    Record::new(
        &format!("First{}", i % 97),
        "",
        &format!("Last{i:06}"),
        &format!("{:010}", 2_000_000_000 + i),
        address,
    )
    .expect("valid record")
}

fn book_of(n: usize) -> PhoneBook {
    (0..n).map(record).collect()
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for n in [1_000usize, 10_000] {
        let mut book = book_of(n);
        let probe = record(n / 2);

        group.bench_with_input(BenchmarkId::new("full_name", n), &probe, |b, p| {
            b.iter(|| black_box(book.search_by_full_name(p.full_name()).is_some()))
        });
        group.bench_with_input(BenchmarkId::new("phone", n), &probe, |b, p| {
            b.iter(|| black_box(book.search_by_phone(p.phone()).ok().flatten().is_some()))
        });
        group.bench_with_input(BenchmarkId::new("first_name", n), &probe, |b, p| {
            b.iter(|| black_box(book.search_by_first_name(p.first_name()).len()))
        });
        group.bench_with_input(BenchmarkId::new("state", n), &"MO", |b, s| {
            b.iter(|| black_box(book.search_by_state(s).map(|v| v.len())))
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    c.bench_function("insert_then_delete_1000", |b| {
        b.iter_batched(
            || (0..1_000).map(record).collect::<Vec<_>>(),
            |records| {
                let mut book = PhoneBook::new();
                for r in &records {
                    book.insert(r.clone());
                }
                for r in &records {
                    black_box(book.delete(r).ok());
                }
                book
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_lookups, bench_churn);
criterion_main!(benches);
