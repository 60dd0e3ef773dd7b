use crate::{InvalidInputError, SparseGrid};

pub enum Source {
    Cells(&'static [(i64, i64)]),
    Rle(&'static str),
}

/// Named starting position offered by the console menu.
pub struct Pattern {
    pub name: &'static str,
    pub source: Source,
}

impl Pattern {
    pub fn grid(&self) -> Result<SparseGrid, InvalidInputError> {
        match self.source {
            Source::Cells(cells) => Ok(SparseGrid::from_coords(cells.iter().copied())),
            Source::Rle(data) => SparseGrid::from_rle(data),
        }
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        source: Source::Cells(&[(1, 1), (1, 2), (1, 3)]),
    },
    Pattern {
        name: "Block",
        source: Source::Cells(&[(1, 1), (1, 2), (2, 1), (2, 2)]),
    },
    Pattern {
        name: "Glider",
        source: Source::Rle("#N Glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!"),
    },
    Pattern {
        name: "Right-moving ship",
        source: Source::Cells(&[
            (2, 2), (2, 3), (3, 2), (3, 3), (3, 4), (4, 1),
            (4, 3), (4, 4), (5, 1), (5, 2), (5, 3), (6, 2),
        ]),
    },
    Pattern {
        name: "Left-moving ship",
        source: Source::Cells(&[
            (2, 4), (3, 3), (3, 4), (3, 5), (4, 2), (4, 3), (4, 5), (5, 2),
            (5, 3), (5, 4), (6, 2), (6, 3), (6, 4), (7, 3), (7, 4),
        ]),
    },
    Pattern {
        name: "Lightweight spaceship",
        source: Source::Rle("#N LWSS\nx = 5, y = 4, rule = B3/S23\nbo2bo$o4b$o3bo$4o!"),
    },
    Pattern {
        name: "Blinker and toad",
        source: Source::Cells(&[
            (2, 2), (2, 3), (2, 4), (5, 5), (8, 3),
            (9, 3), (10, 3), (7, 4), (8, 4), (9, 4),
        ]),
    },
    Pattern {
        name: "R-pentomino",
        source: Source::Rle("#N R-pentomino\nx = 3, y = 3, rule = B3/S23\nb2o$2ob$bo!"),
    },
    Pattern {
        name: "Gosper glider gun",
        source: Source::Rle(concat!(
            "#N Gosper glider gun\n",
            "x = 36, y = 9, rule = B3/S23\n",
            "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\n",
            "2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!\n",
        )),
    },
];

/// Looks a preset up by 1-based menu number or case-insensitive name.
pub fn find_pattern(query: &str) -> Option<&'static Pattern> {
    let query = query.trim();
    if let Ok(n) = query.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| PATTERNS.get(i));
    }
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(query))
}
