use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plexus::{
    problems::{map_coloring::random_map, n_queens::n_queens},
    solver::{
        engine::SolverEngine,
        heuristics::{
            value::IdentityValueHeuristic,
            variable::{MrvDegreeHeuristic, SelectFirstHeuristic},
        },
    },
};

fn bench_n_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens");
    for n in [6usize, 8, 10] {
        let problem = n_queens(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, problem| {
            b.iter(|| {
                let engine = SolverEngine::default();
                black_box(engine.solve(problem).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_map_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_map");
    for regions in [20usize, 50] {
        let problem = random_map(regions, &["red", "green", "blue", "yellow"], 7).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(regions),
            &problem,
            |b, problem| {
                b.iter(|| {
                    let engine = SolverEngine::default();
                    black_box(engine.solve(problem).unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_variable_heuristics(c: &mut Criterion) {
    let problem = n_queens(8).unwrap();
    let mut group = c.benchmark_group("variable_heuristics/8_queens");

    group.bench_function("mrv_degree", |b| {
        b.iter(|| {
            let engine = SolverEngine::new(
                Box::new(MrvDegreeHeuristic),
                Box::new(IdentityValueHeuristic),
            );
            black_box(engine.solve(&problem).unwrap())
        })
    });
    group.bench_function("select_first", |b| {
        b.iter(|| {
            let engine = SolverEngine::new(
                Box::new(SelectFirstHeuristic),
                Box::new(IdentityValueHeuristic),
            );
            black_box(engine.solve(&problem).unwrap())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_n_queens,
    bench_map_coloring,
    bench_variable_heuristics
);
criterion_main!(benches);
