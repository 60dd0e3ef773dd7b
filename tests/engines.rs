use rand::{Rng, SeedableRng};
use sparse_life::{find_pattern, Coord, Engine, EvolutionEngine, Game, SparseGrid};

const SEED: u64 = 42;

/// Dense reference: scans the whole bounding box grown by one cell.
struct NaiveEngine;

impl Engine for NaiveEngine {
    fn advance(&self, current: &SparseGrid) -> SparseGrid {
        let Some(bounds) = current.bounds() else {
            return SparseGrid::new();
        };
        let bounds = bounds.expand(1);
        let mut next = SparseGrid::new();
        for y in bounds.min.y..=bounds.max.y {
            for x in bounds.min.x..=bounds.max.x {
                let mut neibs = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if (dx, dy) != (0, 0) && current.contains(Coord::new(x + dx, y + dy)) {
                            neibs += 1;
                        }
                    }
                }
                let alive = if current.contains(Coord::new(x, y)) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                if alive {
                    next.insert(Coord::new(x, y));
                }
            }
        }
        next
    }
}

fn preset(name: &str) -> SparseGrid {
    find_pattern(name).unwrap().grid().unwrap()
}

fn assert_fields_equal(sparse: &SparseGrid, naive: &SparseGrid, generation: usize) {
    if sparse == naive {
        return;
    }
    let only_sparse = sparse.iter().filter(|&c| !naive.contains(c)).collect::<Vec<_>>();
    let only_naive = naive.iter().filter(|&c| !sparse.contains(c)).collect::<Vec<_>>();
    panic!(
        "Mismatch at generation {}: only sparse {:?}, only naive {:?}",
        generation, only_sparse, only_naive
    );
}

#[test]
fn test_consistency() {
    for seed in SEED..SEED + 4 {
        let mut sparse = SparseGrid::random(24, 0.35, Some(seed));
        let mut naive = sparse.clone();
        for generation in 1..=60 {
            sparse = EvolutionEngine.advance(&sparse);
            naive = NaiveEngine.advance(&naive);
            assert_fields_equal(&sparse, &naive, generation);
        }
    }
}

#[test]
fn test_still_life() {
    let block = SparseGrid::from_coords([(1, 1), (1, 2), (2, 1), (2, 2)]);
    let mut grid = block.clone();
    for _ in 0..10 {
        grid = EvolutionEngine.advance(&grid);
        assert_eq!(grid, block);
    }
}

#[test]
fn test_blinker_period() {
    let vertical = SparseGrid::from_coords([(1, 1), (1, 2), (1, 3)]);
    let once = EvolutionEngine.advance(&vertical);
    assert_eq!(once, SparseGrid::from_coords([(0, 2), (1, 2), (2, 2)]));
    assert_eq!(EvolutionEngine.advance(&once), vertical);
}

#[test]
fn test_spaceships() {
    let cases = [
        ("Glider", 4, (1, 1)),
        ("Right-moving ship", 4, (2, 0)),
        ("Left-moving ship", 4, (-2, 0)),
        ("Lightweight spaceship", 4, (-2, 0)),
    ];
    for (name, period, (dx, dy)) in cases {
        let start = preset(name);
        let mut grid = start.clone();
        for cycle in 1..=5 {
            grid = EvolutionEngine.advance_by(&grid, period);
            assert_eq!(grid, start.translate(dx * cycle, dy * cycle), "{name}");
        }
    }
}

#[test]
fn test_glider_gun_emits_glider() {
    let gun = preset("Gosper glider gun");
    assert_eq!(EvolutionEngine.advance_by(&gun, 30).len(), 41);
}

#[test]
fn test_births_stay_near_live_cells() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..20 {
        let grid = SparseGrid::from_coords(
            (0..40).map(|_| (rng.gen_range(-20..20i64), rng.gen_range(-20..20i64))),
        );
        let next = EvolutionEngine.advance(&grid);
        for cell in next.iter() {
            assert!(
                cell.neighborhood().any(|c| grid.contains(c)),
                "{cell} is farther than one cell from the previous generation"
            );
        }
    }
}

#[test]
fn test_neighbor_count_never_counts_self() {
    let grid = SparseGrid::random(12, 0.5, Some(SEED));
    for y in -1..13 {
        for x in -1..13 {
            let c = Coord::new(x, y);
            let expected = c.neighbors().filter(|&n| grid.contains(n)).count();
            assert_eq!(usize::from(grid.neighbor_count(c)), expected);
            assert!(grid.neighbor_count(c) <= 8);
        }
    }
}

#[test]
fn test_far_away_cells() {
    let vertical = SparseGrid::from_coords([(i64::MAX - 1, -1), (i64::MAX - 1, 0), (i64::MAX - 1, 1)]);
    let next = EvolutionEngine.advance(&vertical);
    assert_eq!(
        next,
        SparseGrid::from_coords([(i64::MAX - 2, 0), (i64::MAX - 1, 0), (i64::MAX, 0)])
    );
    assert_eq!(EvolutionEngine.advance(&next), vertical);
}

#[test]
fn test_render_round_trip() {
    let mut game = Game::new(SparseGrid::random(10, 0.4, Some(SEED)).translate(-30, 7));
    for _ in 0..3 {
        let view = game.viewport();
        let parsed = view.parse_rows(&game.render(), Game::LIVE_CELL);
        assert_eq!(&parsed, game.grid());
        game.evolve();
    }
}
