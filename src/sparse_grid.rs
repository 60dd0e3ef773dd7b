use crate::{utils::parse_rle, InvalidInputError};
use ahash::AHashSet;
use std::{fmt, str::FromStr};

/// Cell position on the unbounded plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 cells at Chebyshev distance exactly 1.
    ///
    /// Neighbors that fall outside the `i64` range do not exist.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        self.neighborhood().filter(move |&c| c != self)
    }

    /// The 3x3 block centered at `self`, including `self`.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        (-1..=1i64).flat_map(move |dy| {
            (-1..=1i64).filter_map(move |dx| {
                Some(Coord::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
            })
        })
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i64, i64) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive axis-aligned box of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Grows the box by `margin` cells on every side, saturating at the `i64` limits.
    pub fn expand(self, margin: i64) -> Self {
        Self {
            min: Coord::new(
                self.min.x.saturating_sub(margin),
                self.min.y.saturating_sub(margin),
            ),
            max: Coord::new(
                self.max.x.saturating_add(margin),
                self.max.y.saturating_add(margin),
            ),
        }
    }

    /// Columns in the box. Saturates for a box spanning the whole `i64` range.
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of cells in the box, saturating.
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn contains(&self, c: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&c.x) && (self.min.y..=self.max.y).contains(&c.y)
    }
}

/// Set of live cells. Dead cells are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: AHashSet<Coord>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a pre-built set of live coordinates.
    pub fn from_set(cells: AHashSet<Coord>) -> Self {
        Self { cells }
    }

    /// Builds a grid from `(x, y)` pairs; duplicates collapse into one cell.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        Self {
            cells: coords.into_iter().map(Into::into).collect(),
        }
    }

    /// Strict construction from rows of integers, each of which must be a pair.
    pub fn try_from_pairs(rows: &[Vec<i64>]) -> Result<Self, InvalidInputError> {
        let mut cells = AHashSet::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match row.as_slice() {
                &[x, y] => {
                    cells.insert(Coord::new(x, y));
                }
                _ => {
                    return Err(InvalidInputError::NotAPair {
                        index,
                        len: row.len(),
                    })
                }
            }
        }
        Ok(Self { cells })
    }

    /// Parses an RLE pattern with its top-left corner at the origin.
    pub fn from_rle(data: &str) -> Result<Self, InvalidInputError> {
        parse_rle(data).map(Self::from_coords)
    }

    /// Random soup filling the `side x side` square at the origin.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(side: u32, fill_rate: f64, seed: Option<u64>) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let side = i64::from(side);
        let mut cells = AHashSet::new();
        for y in 0..side {
            for x in 0..side {
                if rng.gen_bool(fill_rate) {
                    cells.insert(Coord::new(x, y));
                }
            }
        }
        Self { cells }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of live cells among the 8 neighbors of `coord`, never counting `coord` itself.
    pub fn neighbor_count(&self, coord: Coord) -> u8 {
        coord.neighbors().filter(|c| self.cells.contains(c)).count() as u8
    }

    /// Marks `coords` as live. Returns how many of them were not live before.
    pub fn add_cells<I>(&mut self, coords: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        coords
            .into_iter()
            .map(Into::into)
            .filter(|&c| self.cells.insert(c))
            .count()
    }

    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Smallest box containing every live cell, `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, c| Bounds {
                min: Coord::new(b.min.x.min(c.x), b.min.y.min(c.y)),
                max: Coord::new(b.max.x.max(c.x), b.max.y.max(c.y)),
            },
        ))
    }

    /// Copy of the grid shifted by `(dx, dy)`. Cells pushed past the `i64` range are dropped.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self {
            cells: self
                .cells
                .iter()
                .filter_map(|c| Some(Coord::new(c.x.checked_add(dx)?, c.y.checked_add(dy)?)))
                .collect(),
        }
    }
}

impl FromIterator<Coord> for SparseGrid {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Strict coordinate list: integers separated by whitespace, commas, semicolons
/// or parentheses, paired positionally.
impl FromStr for SparseGrid {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|ch: char| ch.is_whitespace() || matches!(ch, ',' | ';' | '(' | ')'))
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| InvalidInputError::NotNumeric(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let [.., last] = values.as_slice() {
            if values.len() % 2 == 1 {
                return Err(InvalidInputError::UnpairedValue(*last));
            }
        }
        Ok(Self::from_coords(
            values.chunks_exact(2).map(|pair| (pair[0], pair[1])),
        ))
    }
}
