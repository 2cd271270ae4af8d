use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bistro_stock::{ItemKind, MaterialItem, NoopSink, Packaging, StockEngine, StockPolicy};

fn batch(size: usize) -> Vec<MaterialItem> {
    (0..size)
        .map(|i| {
            let kind = match i % 3 {
                0 => ItemKind::Measurable,
                1 => ItemKind::Countable,
                _ => ItemKind::Elaborated,
            };
            let item = MaterialItem::new(format!("item-{i}"), format!("Item {i}"), kind)
                .with_stock((i % 50) as f64 * 0.75)
                .with_unit_cost(((i % 97) as f64) / 7.0);
            if kind == ItemKind::Countable {
                item.with_packaging(Packaging::new(12.0, "caja"))
            } else {
                item
            }
        })
        .collect()
}

fn bench_statistics(c: &mut Criterion) {
    let engine = StockEngine::new(StockPolicy::default(), NoopSink).expect("default policy is valid");
    let mut group = c.benchmark_group("statistics");

    for size in [100usize, 1_000, 10_000] {
        let items = batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| engine.statistics(black_box(items)))
        });
    }
    group.finish();
}

fn bench_reorder_plan(c: &mut Criterion) {
    let engine = StockEngine::new(StockPolicy::default(), NoopSink).expect("default policy is valid");
    let items = batch(10_000);
    c.bench_function("reorder_plan/10000", |b| {
        b.iter(|| engine.reorder_plan(black_box(&items)))
    });
}

criterion_group!(benches, bench_statistics, bench_reorder_plan);
criterion_main!(benches);
