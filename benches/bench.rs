use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparse_life::{find_pattern, Engine, EvolutionEngine, SparseGrid};

const SEED: u64 = 42;

fn random_soup(c: &mut Criterion) {
    for side in [16, 32] {
        let grid = SparseGrid::random(side, 0.3, Some(SEED));
        c.bench_function(&format!("advance_soup_{}", side), |b| {
            b.iter(|| EvolutionEngine.advance(black_box(&grid)))
        });
    }
}

fn glider_gun(c: &mut Criterion) {
    let gun = find_pattern("Gosper glider gun")
        .and_then(|p| p.grid().ok())
        .unwrap_or_default();
    c.bench_function("advance_by_gun_120", |b| {
        b.iter(|| EvolutionEngine.advance_by(black_box(&gun), 120))
    });
}

criterion_group!(benches, random_soup, glider_gun);
criterion_main!(benches);
