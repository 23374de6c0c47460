use std::hint::black_box;

use chrono::FixedOffset;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use utc2local::{FilterConfig, Rewriter, filter_with};

/// Generate synthetic log text, one line in `every` carrying a timestamp
fn generate_log(num_lines: usize, every: usize) -> Vec<u8> {
    let mut out = String::new();
    for i in 0..num_lines {
        if i % every == 0 {
            out.push_str(&format!(
                "2017-02-22T14:{:02}:{:02}.{:03}Z INFO request {} served\n",
                i / 60 % 60,
                i % 60,
                i % 1000,
                i
            ));
        } else {
            out.push_str(&format!("        at handler::serve (src/handler.rs:{})\n", i));
        }
    }
    out.into_bytes()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let rewriter = Rewriter::new(FixedOffset::east_opt(9 * 3600).unwrap());

    // Dense: every line has a timestamp; sparse: one in ten
    for (name, every) in [("dense", 1), ("sparse", 10)] {
        for size in [1_000, 10_000].iter() {
            let input = generate_log(*size, every);

            group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(input.len() * 2);
                    filter_with(
                        black_box(input.as_slice()),
                        &mut out,
                        &rewriter,
                        FilterConfig::default(),
                    )
                    .unwrap()
                });
            });
        }
    }

    group.finish();
}

fn bench_long_line(c: &mut Criterion) {
    let rewriter = Rewriter::new(FixedOffset::east_opt(9 * 3600).unwrap());
    let mut input = b"2017-02-22T14:33:23Z ".to_vec();
    input.extend(std::iter::repeat_n(b'x', 1024 * 1024));
    input.push(b'\n');

    let mut group = c.benchmark_group("long_line");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("1MiB", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(input.len() + 16);
            filter_with(black_box(input.as_slice()), &mut out, &rewriter, FilterConfig::default())
                .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_filter, bench_long_line);
criterion_main!(benches);
