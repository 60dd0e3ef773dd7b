use crate::SparseGrid;

/// Transition rule from one generation to the next.
pub trait Engine {
    /// Computes the generation following `current`. `current` is left untouched.
    fn advance(&self, current: &SparseGrid) -> SparseGrid;

    /// Applies [`Engine::advance`] `generations` times.
    ///
    /// Stops early once the grid is empty or stops changing, since neither can evolve further.
    fn advance_by(&self, current: &SparseGrid, generations: u64) -> SparseGrid {
        let mut grid = current.clone();
        for _ in 0..generations {
            let next = self.advance(&grid);
            if next.is_empty() || next == grid {
                return next;
            }
            grid = next;
        }
        grid
    }
}

/// B3/S23 on the unbounded plane, visiting only live cells and their neighborhoods.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvolutionEngine;

impl Engine for EvolutionEngine {
    fn advance(&self, current: &SparseGrid) -> SparseGrid {
        let mut next = SparseGrid::new();

        // survival
        for cell in current.iter() {
            if matches!(current.neighbor_count(cell), 2 | 3) {
                next.insert(cell);
            }
        }

        // birth; counts are always taken against `current`
        for cell in current.iter() {
            for candidate in cell.neighborhood() {
                if next.contains(candidate) {
                    continue;
                }
                if current.neighbor_count(candidate) == 3 {
                    next.insert(candidate);
                }
            }
        }

        next
    }
}
