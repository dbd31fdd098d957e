use criterion::{Criterion, black_box, criterion_group, criterion_main};
use receipt_rules::RuleEngine;
use receipt_types::{Item, Receipt};

fn large_receipt(item_count: usize) -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-21".to_string(),
        purchase_time: "14:33".to_string(),
        items: (0..item_count)
            .map(|i| Item::new(format!("Item number {i}"), format!("{}.{:02}", i % 50, i % 100)))
            .collect(),
        total: "1234.75".to_string(),
    }
}

fn scoring_benchmark(c: &mut Criterion) {
    let engine = RuleEngine::standard();

    for item_count in [1, 100, 10_000] {
        let receipt = large_receipt(item_count);
        c.bench_function(&format!("calculate_points_{item_count}_items"), |b| {
            b.iter(|| engine.calculate_points(black_box(&receipt)))
        });
    }
}

criterion_group!(benches, scoring_benchmark);
criterion_main!(benches);
