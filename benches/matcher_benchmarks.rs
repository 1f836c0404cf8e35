use criterion::{criterion_group, criterion_main, Criterion};
use errlens::services::matcher::Matcher;
use errlens::services::pattern_catalog::PatternCatalog;
use std::hint::black_box;

const TRACE: &str = "TypeError: Cannot read properties of undefined (reading 'map')
    at UserList (/app/components/UserList.tsx:12:18)
    at renderWithHooks (/app/node_modules/react-dom/cjs/react-dom.development.js:14985:18)
    at mountIndeterminateComponent (/app/node_modules/react-dom/cjs/react-dom.development.js:17811:13)";

fn bench_analyze_single_line(c: &mut Criterion) {
    let matcher = Matcher::new(PatternCatalog::builtin().unwrap()).unwrap();
    c.bench_function("analyze_single_line", |b| {
        b.iter(|| black_box(matcher.analyze(black_box("Error: Cannot find module 'express'"))));
    });
}

fn bench_analyze_stack_trace(c: &mut Criterion) {
    let matcher = Matcher::new(PatternCatalog::builtin().unwrap()).unwrap();
    c.bench_function("analyze_stack_trace", |b| {
        b.iter(|| black_box(matcher.analyze_report(black_box(TRACE), None)));
    });
}

fn bench_analyze_large_log(c: &mut Criterion) {
    let matcher = Matcher::new(PatternCatalog::builtin().unwrap()).unwrap();
    let noise = "2024-05-01T10:00:00Z INFO request handled in 12ms path=/api/users status=200\n";
    let log = format!("{}{}\n{}", noise.repeat(2_000), TRACE, noise.repeat(2_000));
    c.bench_function("analyze_large_log", |b| {
        b.iter(|| black_box(matcher.analyze(black_box(&log))));
    });
}

criterion_group!(
    benches,
    bench_analyze_single_line,
    bench_analyze_stack_trace,
    bench_analyze_large_log
);
criterion_main!(benches);
