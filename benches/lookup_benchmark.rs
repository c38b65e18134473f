//! Benchmarks for phone dataset lookup performance.
//!
//! Run with: cargo bench
//!
//! Measures:
//! - Raw binary-search lookup throughput
//! - Cache hit vs miss performance
//! - Scalability with index size
//! - Hot reload cost

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phonedat::{CachedParser, CachedParserConfig, Parser};

/// Build a synthetic dataset with `entry_count` consecutive prefixes.
fn generate_dataset(entry_count: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"2404");
    data.extend_from_slice(&0u32.to_le_bytes());

    // A small pool of shared record blobs, like the real dataset
    let records = [
        "广东省|深圳市|518000|0755",
        "北京市|北京市|100000|010",
        "四川省|成都市|610000|028",
        "浙江省|杭州市|310000|0571",
    ];
    let mut offsets = Vec::with_capacity(records.len());
    for text in records {
        offsets.push(data.len() as u32);
        data.extend_from_slice(text.as_bytes());
        data.push(0);
    }

    let first_index_offset = data.len() as u32;
    data[4..8].copy_from_slice(&first_index_offset.to_le_bytes());
    for i in 0..entry_count {
        data.extend_from_slice(&(1300000 + i).to_le_bytes());
        data.extend_from_slice(&offsets[i as usize % offsets.len()].to_le_bytes());
        data.push(((i % 6) + 1) as u8);
    }
    data
}

/// Generate query phone numbers - mix of hits and misses.
fn generate_queries(count: usize, entry_count: u32, hit_ratio: f64) -> Vec<String> {
    let mut queries = Vec::with_capacity(count);
    let hits = (count as f64 * hit_ratio) as usize;

    for i in 0..hits {
        queries.push(format!("{}1234", 1300000 + (i as u32 * 37) % entry_count));
    }
    for _ in hits..count {
        queries.push("99999991234".to_string());
    }
    queries
}

/// Benchmark raw lookups without a cache.
fn bench_find_no_cache(c: &mut Criterion) {
    let parser = Parser::from_bytes(generate_dataset(100_000)).unwrap();
    let queries = generate_queries(1000, 100_000, 0.8);

    let mut group = c.benchmark_group("find_no_cache");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(parser.find(query));
            }
        })
    });

    group.finish();
}

/// Benchmark lookups with a warm cache.
fn bench_find_with_cache(c: &mut Criterion) {
    let config = CachedParserConfig::with_capacity(100_000);
    let parser =
        CachedParser::from_bytes_with_config(generate_dataset(100_000), config).unwrap();
    let queries = generate_queries(1000, 100_000, 0.8);

    // Warm up cache
    for query in &queries {
        let _ = parser.find(query);
    }

    let mut group = c.benchmark_group("find_with_cache");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("cache_hit", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(parser.find(query));
            }
        })
    });

    group.finish();
}

/// Benchmark scalability with different index sizes.
fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in [1_000u32, 10_000, 100_000, 500_000].iter() {
        let parser = Parser::from_bytes(generate_dataset(*size)).unwrap();
        let queries = generate_queries(100, *size, 1.0);

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, _| {
            b.iter(|| {
                for query in &queries {
                    let _ = black_box(parser.find(query));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark hot reload cost.
fn bench_hot_reload(c: &mut Criterion) {
    let data = generate_dataset(100_000);
    let parser = CachedParser::from_bytes(data.clone()).unwrap();

    let mut group = c.benchmark_group("hot_reload");

    group.bench_function("reload_100k_entries", |b| {
        b.iter_batched(
            || data.clone(),
            |data| {
                parser.reload_from_bytes(data).unwrap();
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_find_no_cache,
    bench_find_with_cache,
    bench_scalability,
    bench_hot_reload,
);

criterion_main!(benches);
