use criterion::{Criterion, criterion_group, criterion_main};

use aluna_catalog::seed;
use aluna_storefront::{CategoryFilter, SortKey, browse};

fn bench_browse(c: &mut Criterion) {
    let store = seed().expect("seed catalog");

    c.bench_function("browse_all_featured", |b| {
        b.iter(|| browse(store.products(), CategoryFilter::All, SortKey::Featured))
    });

    c.bench_function("browse_pajamas_price_low", |b| {
        b.iter(|| {
            browse(
                store.products(),
                CategoryFilter::parse("pajamas"),
                SortKey::PriceLow,
            )
        })
    });
}

criterion_group!(benches, bench_browse);
criterion_main!(benches);
