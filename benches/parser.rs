//! Scanner and line conversion benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pty_markup::line_to_markup;
use pty_markup::parser::scan;

fn bench_scan_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    // Plain ASCII text
    let plain_text = "Hello, World! ".repeat(1000);
    group.throughput(Throughput::Bytes(plain_text.len() as u64));

    group.bench_function("plain_text", |b| {
        b.iter(|| black_box(scan(black_box(&plain_text)).count()))
    });

    group.finish();
}

fn bench_scan_csi_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    // CSI sequences (cursor movement, SGR)
    let csi_heavy = "\x1b[1;31mRed\x1b[0m \x1b[5;10H\x1b[2J".repeat(100);
    group.throughput(Throughput::Bytes(csi_heavy.len() as u64));

    group.bench_function("csi_sequences", |b| {
        b.iter(|| black_box(scan(black_box(&csi_heavy)).count()))
    });

    group.finish();
}

fn bench_convert_colored_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    // A long diagnostic line with indexed, true-color and bracketed text
    let line = "\x1b[1m\x1b[38;5;9merror[E0308]\x1b[0m: \x1b[38;2;200;200;0mmismatched\x1b[0m [types] "
        .repeat(50);
    group.throughput(Throughput::Bytes(line.len() as u64));

    group.bench_function("colored_line", |b| {
        b.iter(|| black_box(line_to_markup(black_box(&line))))
    });

    group.finish();
}

fn bench_convert_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    // UTF-8 content
    let utf8 = "Hello, 世界! ✓ ".repeat(500);
    group.throughput(Throughput::Bytes(utf8.len() as u64));

    group.bench_function("utf8_content", |b| {
        b.iter(|| black_box(line_to_markup(black_box(&utf8))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scan_plain_text,
    bench_scan_csi_sequences,
    bench_convert_colored_line,
    bench_convert_utf8
);

criterion_main!(benches);
