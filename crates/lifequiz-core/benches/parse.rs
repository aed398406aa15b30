use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lifequiz_core::lookup::find_value;
use lifequiz_core::parser::parse_table;

fn bench_parse_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_table");

    let small = generate_dataset(100);
    let medium = generate_dataset(5_000);
    let large = generate_dataset(50_000);

    group.bench_function("100_rows", |b| {
        b.iter(|| parse_table(black_box(&small)))
    });

    group.bench_function("5000_rows", |b| {
        b.iter(|| parse_table(black_box(&medium)))
    });

    group.bench_function("50000_rows", |b| {
        b.iter(|| parse_table(black_box(&large)))
    });

    group.finish();
}

fn bench_find_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_value");

    let records = parse_table(&generate_dataset(50_000));

    // First row vs. last row: linear scan, so these bracket the cost.
    group.bench_function("first_row", |b| {
        b.iter(|| {
            find_value(
                black_box(&records),
                black_box("Country 0"),
                black_box(1950),
                black_box("V"),
            )
        })
    });

    group.bench_function("last_row", |b| {
        b.iter(|| {
            find_value(
                black_box(&records),
                black_box("Country 499"),
                black_box(2049),
                black_box("V"),
            )
        })
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            find_value(
                black_box(&records),
                black_box("Nowhere"),
                black_box(2023),
                black_box("V"),
            )
        })
    });

    group.finish();
}

/// Generate `rows` data rows across 500 entities and 100 years.
fn generate_dataset(rows: usize) -> String {
    let mut s = String::from("Entity,Code,Year,V\n");
    for i in 0..rows {
        let entity = i % 500;
        let year = 1950 + (i / 500) % 100;
        s.push_str(&format!(
            "Country {entity},C{entity},{year},{}.{}\n",
            60 + entity % 30,
            i % 10
        ));
    }
    s
}

criterion_group!(benches, bench_parse_table, bench_find_value);
criterion_main!(benches);
