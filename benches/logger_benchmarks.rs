//! Criterion benchmarks for rust_log_facade

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_log_facade::prelude::*;
use std::io;

fn sample_payload() -> LogData {
    LogData::new()
        .with_field("msg", "request handled")
        .with_field("user_id", 12345)
        .with_field("latency_ms", 3.25)
        .with_field("cached", true)
        .with_field("path", "/api/v1/users")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_threshold", |b| {
        b.iter(|| {
            let logger = Logger::new(LogLevel::Info, JsonEncoder::new(io::sink()));
            black_box(logger)
        });
    });

    group.bench_function("from_config", |b| {
        let config = LoggerConfig::new()
            .with_threshold(LogLevel::Info)
            .with_redact("password");
        b.iter(|| black_box(config.build()));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_log_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_call");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new(LogLevel::Info, JsonEncoder::new(io::sink()));

    group.bench_function("filtered", |b| {
        b.iter(|| logger.trace(black_box(sample_payload())));
    });

    group.bench_function("encoded", |b| {
        b.iter(|| logger.info(black_box(sample_payload())));
    });

    group.finish();
}

fn bench_chain_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_length");
    group.throughput(Throughput::Elements(1));

    for len in [0usize, 1, 4, 16] {
        let mut builder = Logger::builder(JsonEncoder::new(io::sink()));
        for i in 0..len {
            builder = builder.filter(RenameKey::new(format!("missing_{}", i), "renamed"));
        }
        let logger = builder.build();

        group.bench_with_input(BenchmarkId::from_parameter(len), &logger, |b, logger| {
            b.iter(|| logger.info(black_box(sample_payload())));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder(JsonEncoder::new(io::sink()))
        .threshold(LogLevel::Info)
        .threshold_filter()
        .filter(Sanitize)
        .filter(Enrich::new(LogData::new().with_field("service", "bench")))
        .filter(Redact::new(["password"]))
        .filter(LevelTag::default())
        .filter(Timestamp::default())
        .build();

    group.bench_function("json", |b| {
        b.iter(|| logger.info(black_box(sample_payload().with_field("password", "x"))));
    });

    group.finish();
}

// ============================================================================
// Encoder Benchmarks
// ============================================================================

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoders");
    group.throughput(Throughput::Elements(1));

    let data = sample_payload();

    let json = JsonEncoder::new(io::sink());
    group.bench_function("json", |b| {
        b.iter(|| json.encode(black_box(&data)));
    });

    let logfmt = LogfmtEncoder::new(io::sink());
    group.bench_function("logfmt", |b| {
        b.iter(|| logfmt.encode(black_box(&data)));
    });

    let text = TextEncoder::new(io::sink());
    group.bench_function("text", |b| {
        b.iter(|| text.encode(black_box(&data)));
    });

    let (channel, receiver) = ChannelEncoder::unbounded();
    group.bench_function("channel", |b| {
        b.iter(|| {
            let result = channel.encode(black_box(&data));
            let _ = receiver.try_recv();
            result
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_log_call,
    bench_chain_length,
    bench_full_pipeline,
    bench_encoders,
);
criterion_main!(benches);
