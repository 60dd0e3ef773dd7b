use crate::{Bounds, Coord, SparseGrid};

/// Rectangular window of the plane rendered as text, one character per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub bounds: Bounds,
}

impl Viewport {
    /// Box around all live cells grown by `margin`, or `empty` when there are none.
    pub fn around(grid: &SparseGrid, margin: i64, empty: Bounds) -> Self {
        let bounds = grid.bounds().map_or(empty, |b| b.expand(margin));
        Self { bounds }
    }

    /// Top-left cell of the window.
    pub fn origin(&self) -> Coord {
        self.bounds.min
    }

    /// Rows by ascending `y`, columns by ascending `x`.
    pub fn render(&self, grid: &SparseGrid, live: char, dead: char) -> Vec<String> {
        let Bounds { min, max } = self.bounds;
        (min.y..=max.y)
            .map(|y| {
                (min.x..=max.x)
                    .map(|x| if grid.contains(Coord::new(x, y)) { live } else { dead })
                    .collect()
            })
            .collect()
    }

    /// Inverse of [`Viewport::render`]: every `live` character becomes a cell.
    pub fn parse_rows<S: AsRef<str>>(&self, rows: &[S], live: char) -> SparseGrid {
        let origin = self.origin();
        rows.iter()
            .zip(origin.y..)
            .flat_map(|(row, y)| {
                row.as_ref()
                    .chars()
                    .zip(origin.x..)
                    .filter(move |&(ch, _)| ch == live)
                    .map(move |(_, x)| Coord::new(x, y))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: Bounds = Bounds {
        min: Coord::new(0, 0),
        max: Coord::new(5, 5),
    };

    #[test]
    fn test_empty_grid_uses_default_box() {
        let view = Viewport::around(&SparseGrid::new(), 2, EMPTY);
        let rows = view.render(&SparseGrid::new(), 'X', '.');
        assert_eq!(rows, vec!["......"; 6]);
    }

    #[test]
    fn test_render_single_cell() {
        let grid = SparseGrid::from_coords([(-1, 3)]);
        let view = Viewport::around(&grid, 2, EMPTY);
        assert_eq!(view.origin(), Coord::new(-3, 1));
        assert_eq!(
            view.render(&grid, 'X', '.'),
            vec![".....", ".....", "..X..", ".....", "....."]
        );
    }

    #[test]
    fn test_round_trip() {
        let grid = SparseGrid::from_coords([(0, 0), (4, -2), (-3, 1), (2, 2)]);
        let view = Viewport::around(&grid, 2, EMPTY);
        let rows = view.render(&grid, 'X', '.');
        assert_eq!(view.parse_rows(&rows, 'X'), grid);
    }
}
