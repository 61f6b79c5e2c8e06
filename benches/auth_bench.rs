use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docauth::{authenticate, Directory};
use std::time::Duration;

/// Directory of `size` accounts with sequential document numbers.
fn generate_directory(size: usize) -> Directory {
    Directory::from_pairs((0..size).map(|i| (format!("45{:08}", i), format!("secret{:06}", i))))
}

/// Worst-case lookups: last entry and a miss both scan the whole list.
fn bench_authenticate(c: &mut Criterion) {
    let mut group = c.benchmark_group("authenticate");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [10, 100, 1_000, 10_000];

    for size in sizes {
        let directory = generate_directory(size);
        let last_id = format!("45{:08}", size - 1);
        let last_secret = format!("secret{:06}", size - 1);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("last_entry", size),
            &directory,
            |b, directory| {
                b.iter(|| {
                    black_box(authenticate(
                        black_box(&last_id),
                        black_box(&last_secret),
                        directory,
                    ))
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("not_found", size), &directory, |b, directory| {
            b.iter(|| black_box(authenticate(black_box("0000000000"), black_box("x"), directory)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_authenticate);
criterion_main!(benches);
