use criterion::{criterion_group, criterion_main, Criterion};

use parcelshell::model::parcel::Parcel;
use parcelshell::model::status::Status;
use parcelshell::store::{ParcelStore, SortField};

fn filled_store(n: usize) -> ParcelStore {
    let mut store = ParcelStore::new();
    for i in 0..n {
        let parcel = Parcel::with_status(
            format!("P{i:06}"),
            format!("sender-{}", (i * 7919) % n),
            format!("receiver-{}", (i * 104_729) % n),
            Status::ALL[i % 3],
        );
        store.insert(parcel).unwrap();
    }
    store
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_10k", |b| b.iter(|| filled_store(10_000)));
}

fn bench_search(c: &mut Criterion) {
    let store = filled_store(10_000);
    c.bench_function("search_10k", |b| {
        b.iter(|| store.search("P009999").unwrap().status())
    });
}

fn bench_sort(c: &mut Criterion) {
    let store = filled_store(10_000);
    c.bench_function("sort_by_sender_10k", |b| {
        b.iter(|| store.sorted_by(SortField::Sender).unwrap().len())
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_sort);
criterion_main!(benches);
