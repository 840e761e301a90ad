//! Criterion benchmarks for the synthesizer.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use confluence_core::{CalculationResult, EngineId, ResultMap};
use confluence_synthesis::Synthesizer;

fn result_map(depth: usize) -> ResultMap {
    EngineId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let raw: Vec<_> = (0..depth).map(|j| json!({"n": (i + j) % 12, "nested": [j, i]})).collect();
            let data = json!({
                "rawData": raw,
                "formattedOutput": "A path of wisdom, growth and transformation",
                "recommendations": ["Pause before acting on a strong impulse", "Journal each evening"],
                "realityPatches": ["Breathe into the present"],
            });
            (*id, CalculationResult::success(data, Duration::from_millis(2)))
        })
        .collect()
}

fn bench_synthesis(c: &mut Criterion) {
    let synthesizer = Synthesizer::default();

    let mut group = c.benchmark_group("synthesize_reading");
    for depth in [1usize, 10, 100] {
        let results = result_map(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &results, |b, results| {
            b.iter(|| synthesizer.synthesize_reading(results));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_synthesis);
criterion_main!(benches);
