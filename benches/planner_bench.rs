//! Criterion benchmarks for u-rescue planning.
//!
//! Uses seeded synthetic incident batches over a fully connected district
//! to measure scoring and routing overhead as batch size grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_rescue::graph::{GraphConfig, TravelOverride, TravelTable, TravelTimeGraph};
use u_rescue::incident::{Incident, NeedType};
use u_rescue::planner::{PlanInput, Planner};
use u_rescue::routing::evaluate;
use u_rescue::scoring::Scorer;

const DESCRIPTIONS: [&str; 6] = [
    "5 elderly people trapped on roof",
    "Diabetic patient needs insulin",
    "Family needs drinking water",
    "Children stranded at school",
    "Road blocked by fallen trees",
    "Injured man on upper floor",
];

const NEEDS: [NeedType; 5] = [
    NeedType::Rescue,
    NeedType::Supply,
    NeedType::Info,
    NeedType::Medical,
    NeedType::Other,
];

fn synthetic_batch(n: usize, rng: &mut StdRng) -> Vec<Incident> {
    (0..n)
        .map(|i| {
            Incident::new(
                format!("Site-{}", i % (n / 2).max(1)),
                DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())],
                rng.random_range(0..50),
                NEEDS[rng.random_range(0..NEEDS.len())],
            )
        })
        .collect()
}

fn synthetic_table(sites: usize, rng: &mut StdRng) -> TravelTable {
    let mut table = TravelTable::new();
    let names: Vec<String> = std::iter::once("Depot".to_string())
        .chain((0..sites).map(|i| format!("Site-{i}")))
        .collect();
    for from in &names {
        for to in &names {
            if from != to {
                table.insert(from.clone(), to.clone(), rng.random_range(1..90));
            }
        }
    }
    table
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let mut rng = StdRng::seed_from_u64(42);
    let scorer = Scorer::default();

    for &n in &[10, 50, 200] {
        let batch = synthetic_batch(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| black_box(scorer.score_all(black_box(batch))))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let mut rng = StdRng::seed_from_u64(42);
    let scorer = Scorer::default();

    for &n in &[10, 50, 200] {
        let table = synthetic_table(n / 2, &mut rng);
        let graph = TravelTimeGraph::new(&table, &GraphConfig::default());
        let scored = scorer.score_all(&synthetic_batch(n, &mut rng));
        group.bench_with_input(BenchmarkId::from_parameter(n), &scored, |b, scored| {
            b.iter(|| black_box(evaluate(black_box(scored), "Depot", &graph)))
        });
    }
    group.finish();
}

fn bench_plan_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_many");
    group.sample_size(20);
    let mut rng = StdRng::seed_from_u64(42);
    let planner = Planner::default();

    for &requests in &[8, 64] {
        let inputs: Vec<PlanInput> = (0..requests)
            .map(|_| {
                PlanInput::new(synthetic_batch(30, &mut rng), "Depot").with_overrides(vec![
                    TravelOverride::new("Depot", "Site-0", rng.random_range(1..30)),
                ])
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(requests),
            &inputs,
            |b, inputs| b.iter(|| black_box(planner.plan_many(black_box(inputs)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scoring, bench_evaluate, bench_plan_many);
criterion_main!(benches);
