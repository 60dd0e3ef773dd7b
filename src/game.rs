use crate::{
    utils::Viewport, Bounds, Coord, Engine, EvolutionEngine, InvalidInputError, SparseGrid,
};

/// One running game: the current generation and how many steps led to it.
#[derive(Clone, Debug, Default)]
pub struct Game {
    grid: SparseGrid,
    generation: u64,
}

impl Game {
    pub const LIVE_CELL: char = 'X';
    pub const DEAD_CELL: char = '.';
    /// Dead cells shown around the live ones.
    pub const VIEW_MARGIN: i64 = 2;
    /// Window shown when nothing is alive.
    pub const EMPTY_VIEW: Bounds = Bounds {
        min: Coord::new(0, 0),
        max: Coord::new(5, 5),
    };

    pub fn new(grid: SparseGrid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        Self::new(SparseGrid::from_coords(coords))
    }

    /// Strict coordinate list, see [`SparseGrid`]'s `FromStr`.
    pub fn from_text(text: &str) -> Result<Self, InvalidInputError> {
        text.parse().map(Self::new)
    }

    /// Like [`Game::from_text`], but starts blank instead of failing.
    pub fn from_text_or_blank(text: &str) -> Self {
        Self::from_text(text).unwrap_or_else(|e| {
            tracing::warn!("incompatible initial cells ({e}), starting with a blank board");
            Self::default()
        })
    }

    pub fn add_cells<I>(&mut self, coords: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        let added = self.grid.add_cells(coords);
        tracing::debug!(added, population = self.grid.len(), "cells added");
        added
    }

    /// Advances one generation.
    pub fn evolve(&mut self) {
        self.grid = EvolutionEngine.advance(&self.grid);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            population = self.grid.len(),
            "evolved"
        );
    }

    /// Advances `generations` generations at once.
    pub fn evolve_by(&mut self, generations: u64) {
        self.grid = EvolutionEngine.advance_by(&self.grid, generations);
        self.generation = self.generation.saturating_add(generations);
        tracing::debug!(
            generation = self.generation,
            population = self.grid.len(),
            "evolved"
        );
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::around(&self.grid, Self::VIEW_MARGIN, Self::EMPTY_VIEW)
    }

    /// Text rows of the current generation; see [`Game::viewport`] for the window.
    pub fn render(&self) -> Vec<String> {
        self.viewport()
            .render(&self.grid, Self::LIVE_CELL, Self::DEAD_CELL)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.len()
    }

    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }
}
