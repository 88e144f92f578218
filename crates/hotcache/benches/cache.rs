use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hotcache::HotCache;

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_hit", |b| {
        let cache = HotCache::new(1000);
        let data = vec![b'x'; 1024];

        // Pre-populate so every lookup hits
        for key in 0u64..100 {
            cache.set(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_miss", |b| {
        let cache = HotCache::new(10);
        let data = vec![b'x'; 1024];

        for key in 0u64..10 {
            cache.set(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            // Key range disjoint from the resident set, so every lookup misses
            black_box(cache.get(&(1000 + counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_set_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_churn");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_1kb_evicting", |b| {
        let cache = HotCache::new(100);
        let data = vec![b'x'; 1024];

        // Fill to capacity so every fresh key displaces one
        for key in 0u64..100 {
            cache.set(key, data.clone());
        }

        let mut counter = 100u64;
        b.iter(|| {
            black_box(cache.set(counter, data.clone()));
            counter += 1;
        });
    });

    group.bench_function("set_1kb_overwrite", |b| {
        let cache = HotCache::new(100);
        let data = vec![b'x'; 1024];

        for key in 0u64..100 {
            cache.set(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.set(counter % 100, data.clone()));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let cache = HotCache::new(1000);
        let data = vec![b'x'; 1024];

        for key in 0u64..100 {
            cache.set(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter.is_multiple_of(2) {
                black_box(cache.get(&(counter % 100)));
            } else {
                black_box(cache.set(counter % 100, data.clone()));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_cache_miss,
    bench_set_churn,
    bench_mixed_50_50
);
criterion_main!(benches);
