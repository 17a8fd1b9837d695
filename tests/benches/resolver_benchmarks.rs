//! # Precedence-Engine Resolver Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | pe-01-single-update | induced graph + Kahn's sort for one update |
//! | pe-01-batch | full batch resolution with middle sums |
//! | pe-02-ingest | parsing the textual input format |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pe_01_order_resolution::{
    build_induced_graph, kahns_topological_sort, resolve_order, OrderResolutionApi,
    OrderResolutionService, ResolverConfig,
};
use pe_02_update_ingest::parse_input;
use pe_tests::workloads::{generate, Workload, WorkloadSpec};
use std::fmt::Write;
use std::time::Duration;

fn render(workload: &Workload) -> String {
    let mut text = String::new();
    for rule in &workload.rules {
        let _ = writeln!(text, "{rule}");
    }
    text.push('\n');
    for update in &workload.updates {
        let line: Vec<String> = update.iter().map(|item| item.to_string()).collect();
        let _ = writeln!(text, "{}", line.join(","));
    }
    text
}

// ============================================================================
// PE-01: Single update
// ============================================================================

fn bench_single_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("pe-01-single-update");

    for len in [5, 25, 100, 400] {
        let workload = generate(WorkloadSpec {
            items: len.max(2),
            rules: len * 10,
            updates: 1,
            update_len: len,
            ..Default::default()
        });
        let update = &workload.updates[0];

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("induced_graph", len), update, |b, update| {
            b.iter(|| black_box(build_induced_graph(update, &workload.rules)))
        });

        let graph = build_induced_graph(update, &workload.rules);
        group.bench_with_input(BenchmarkId::new("kahns_sort", len), &graph, |b, graph| {
            b.iter(|| black_box(kahns_topological_sort(graph)))
        });

        group.bench_with_input(BenchmarkId::new("resolve_order", len), update, |b, update| {
            b.iter(|| black_box(resolve_order(update, &workload.rules)))
        });
    }

    group.finish();
}

// ============================================================================
// PE-01: Batch
// ============================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pe-01-batch");
    group.measurement_time(Duration::from_secs(10));

    let service = OrderResolutionService::with_config(ResolverConfig::unbounded());

    for updates in [100, 1_000] {
        let workload = generate(WorkloadSpec {
            updates,
            ..Default::default()
        });

        group.throughput(Throughput::Elements(updates as u64));
        group.bench_with_input(
            BenchmarkId::new("resolve_batch", updates),
            &workload,
            |b, workload| {
                b.iter(|| black_box(service.resolve_batch(&workload.rules, &workload.updates)))
            },
        );
    }

    group.finish();
}

// ============================================================================
// PE-02: Ingest
// ============================================================================

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("pe-02-ingest");

    let text = render(&generate(WorkloadSpec::default()));
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("parse_input", |b| b.iter(|| black_box(parse_input(&text))));

    group.finish();
}

criterion_group!(benches, bench_single_update, bench_batch, bench_ingest);
criterion_main!(benches);
