use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tablestore::*;

fn make_records(size: usize) -> Vec<Record> {
    (0..size)
        .map(|i| {
            record([
                ("id", FieldValue::from(i)),
                ("name", FieldValue::from(format!("rec{}", (i * 7919) % size))),
                ("group", FieldValue::from((i % 13) as i64)),
            ])
        })
        .collect()
}

fn columns() -> Vec<RawColumn> {
    vec![
        RawColumn::new("id", "ID").sortable(),
        RawColumn::new("name", "Name").sortable(),
        RawColumn::new("group", "Group").sortable(),
    ]
}

fn bench_natural_cmp(c: &mut Criterion) {
    c.bench_function("natural_cmp", |b| {
        b.iter(|| natural_cmp(black_box("invoice-2024-00917"), black_box("invoice-2024-917b")))
    });
}

fn bench_sort_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_name");

    for size in [100, 1000, 10000].iter() {
        let mut store = DataStore::new(make_records(*size), &columns(), None).unwrap();
        store.sort("name").unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.get_all_data().len());
        });
    }
    group.finish();
}

fn bench_sort_with_ties(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_with_ties");

    for size in [100, 1000, 10000].iter() {
        let mut store = DataStore::new(make_records(*size), &columns(), None).unwrap();
        store.sort("group").unwrap();
        store.sort("group").unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.get_all_data().len());
        });
    }
    group.finish();
}

fn bench_page_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_slice");

    for size in [100, 1000, 10000].iter() {
        let mut store = DataStore::new(
            make_records(*size),
            &columns(),
            Some(PagerConfig::new().limit(25)),
        )
        .unwrap();
        store.sort("id").unwrap();
        let last = store.page_count();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.get_page(black_box(last)).len());
        });
    }
    group.finish();
}

fn bench_visible_pages(c: &mut Criterion) {
    c.bench_function("visible_pages", |b| {
        b.iter(|| visible_pages(black_box(500), black_box(1000), black_box(9)))
    });
}

criterion_group!(
    benches,
    bench_natural_cmp,
    bench_sort_by_name,
    bench_sort_with_ties,
    bench_page_slice,
    bench_visible_pages,
);

criterion_main!(benches);
