use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ksuid::{Ksuid, OsRandom, RandSource, Sequence, ThreadRandom, base62, now};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

// Number of IDs handled per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

fn sample_ids() -> Vec<Ksuid> {
    Sequence::new(Ksuid::new()).take(TOTAL_IDS).collect()
}

/// Benchmarks generation from a single entropy source on one thread.
fn bench_rand<R>(c: &mut Criterion, group_name: &str, rng: R)
where
    R: RandSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            let datetime = now();
            for _ in 0..TOTAL_IDS {
                black_box(Ksuid::from_datetime_and_rand(datetime, &rng).unwrap());
            }
        });
    });

    group.finish();
}

fn benchmark_os_random(c: &mut Criterion) {
    bench_rand(c, "rand/os", OsRandom);
}

fn benchmark_thread_random(c: &mut Criterion) {
    bench_rand(c, "rand/thread", ThreadRandom);
}

/// Benchmarks `Ksuid::new` through the process-wide source from several
/// threads at once.
fn benchmark_global_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand/global/contended");

    for thread_count in [1, 2, 4, 8] {
        let total = TOTAL_IDS * thread_count;
        group.throughput(Throughput::Elements(total as u64));
        group.bench_function(format!("elems/{total}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let mut elapsed = core::time::Duration::ZERO;
                for _ in 0..iters {
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    let start = scope(|s| {
                        for _ in 0..thread_count {
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..TOTAL_IDS {
                                    black_box(Ksuid::new());
                                }
                            });
                        }
                        barrier.wait();
                        Instant::now()
                    });
                    elapsed += start.elapsed();
                }
                elapsed
            });
        });
    }

    group.finish();
}

fn benchmark_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            let mut seq = Sequence::new(black_box(Ksuid::MAX));
            for _ in 0..TOTAL_IDS {
                black_box(seq.try_next().unwrap());
            }
        });
    });

    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let ids = sample_ids();
    let mut group = c.benchmark_group("base62/encode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for id in &ids {
                black_box(base62::encode(black_box(id.as_bytes())));
            }
        });
    });

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let encoded: Vec<_> = sample_ids().iter().map(|id| id.encode()).collect();
    let mut group = c.benchmark_group("base62/decode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for text in &encoded {
                black_box(Ksuid::parse(black_box(text.as_str())).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    // Codec
    benchmark_encode,
    benchmark_decode,
    // Generation
    benchmark_os_random,
    benchmark_thread_random,
    benchmark_global_contended,
    benchmark_sequence,
);
criterion_main!(benches);
