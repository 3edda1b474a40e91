//! Criterion benchmarks for scoped_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scoped_logger::prelude::*;
use std::io;
use std::sync::Arc;

fn no_env(_: &str) -> Option<String> {
    None
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let text_factory = DefaultLoggerFactory::from_env_with(no_env).with_writer(io::sink());
    let json_factory = JsonLoggerFactory::from_env_with(no_env)
        .with_writer(io::sink())
        .with_scope_levels([("api", LogLevel::Debug)]);

    group.bench_function("text_factory", |b| {
        b.iter(|| black_box(text_factory.new_logger(black_box("api"))));
    });

    group.bench_function("json_factory_with_override", |b| {
        b.iter(|| black_box(json_factory.new_logger(black_box("api"))));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let text = TextLogger::new("bench", LogLevel::Warn, Some(Box::new(io::sink())));
    let json = JsonLogger::new("bench", LogLevel::Warn, Some(Box::new(io::sink())));

    group.bench_function("text_below_threshold", |b| {
        b.iter(|| text.debug(black_box("This should be filtered")));
    });

    group.bench_function("json_below_threshold", |b| {
        b.iter(|| json.debug(black_box("This should be filtered")));
    });

    group.bench_function("formatted_below_threshold", |b| {
        b.iter(|| scoped_logger::debug!(text, "filtered {} {}", black_box(1), black_box("x")));
    });

    group.bench_function("event_below_threshold", |b| {
        b.iter(|| {
            text.debug_lvl()
                .str("key", black_box("value"))
                .int("n", black_box(7))
                .msg("filtered")
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_text_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_logging");
    group.throughput(Throughput::Elements(1));

    let logger = TextLogger::new("bench", LogLevel::Trace, Some(Box::new(io::sink())));

    group.bench_function("message", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| scoped_logger::info!(logger, "request {} took {}ms", black_box(42), black_box(7)));
    });

    group.bench_function("event_with_fields", |b| {
        b.iter(|| {
            logger
                .info_lvl()
                .str("method", black_box("GET"))
                .int("status", black_box(200))
                .float64("ratio", black_box(0.25))
                .msg("request done")
        });
    });

    group.finish();
}

fn bench_json_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_logging");
    group.throughput(Throughput::Elements(1));

    let logger = JsonLogger::new("bench", LogLevel::Trace, Some(Box::new(io::sink())));

    group.bench_function("message", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("with_fields", |b| {
        let fields = [
            FieldValue::from("user"),
            FieldValue::from("alice"),
            FieldValue::from("attempt"),
            FieldValue::from(3_i64),
        ];
        b.iter(|| logger.info_with(black_box("login"), black_box(&fields)));
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let factory = JsonLoggerFactory::from_env_with(no_env)
        .with_writer(io::sink())
        .with_default_level(LogLevel::Info);

    group.bench_function("multi_thread_4", |b| {
        let loggers: Vec<Arc<dyn LeveledLogger>> = (0..4)
            .map(|i| Arc::from(factory.new_logger(&format!("worker-{}", i))))
            .collect();

        b.iter(|| {
            let handles: Vec<_> = loggers
                .iter()
                .map(|logger| {
                    let logger = Arc::clone(logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_level_filtering,
    bench_text_logging,
    bench_json_logging,
    bench_concurrent_logging
);

criterion_main!(benches);
