mod console;
mod engine;
mod error;
mod game;
mod patterns;
mod sparse_grid;
mod utils;

pub use console::{App, Command, Config};
pub use engine::{Engine, EvolutionEngine};
pub use error::{ConsoleError, InvalidInputError};
pub use game::Game;
pub use patterns::{find_pattern, Pattern, Source, PATTERNS};
pub use sparse_grid::{Bounds, Coord, SparseGrid};
pub use utils::{parse_coords, parse_rle, FpsLimiter, NiceInt, Viewport};
