//! Performance benchmarks for address book lookups.
//!
//! These benchmarks measure linear search and pagination at a few
//! dataset sizes, plus a JSON save/load round-trip through memory.

use address_book::{AddressBook, BookRepository, MemoryStore, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build an address book with `size` contacts, two phones each.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(&format!("Contact {i:05}"), Some("1990-05-20"))
                .expect("valid record");
            record
                .add_phone(&format!("{:010}", i))
                .expect("valid phone");
            record
                .add_phone(&format!("{:010}", 9_999_999_999u64 - i as u64))
                .expect("valid phone");
            record
        })
        .collect()
}

/// Benchmark substring search by name and by phone.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);

        group.bench_with_input(BenchmarkId::new("by_name", size), &book, |b, book| {
            b.iter(|| book.search(black_box("contact 0004")));
        });

        group.bench_with_input(BenchmarkId::new("by_phone", size), &book, |b, book| {
            b.iter(|| book.search(black_box("99999")));
        });
    }

    group.finish();
}

/// Benchmark draining a full pagination pass.
fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| {
                book.paginate(black_box(25))
                    .expect("non-zero batch size")
                    .map(|batch| batch.len())
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

/// Benchmark a save followed by a load.
fn bench_round_trip(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("save_load_1000", |b| {
        b.iter(|| {
            let repository = BookRepository::new(MemoryStore::new());
            repository.save(&book).expect("save");
            let mut restored = AddressBook::new();
            repository.load(&mut restored).expect("load");
            restored
        });
    });
}

criterion_group!(benches, bench_search, bench_paginate, bench_round_trip);
criterion_main!(benches);
