mod format_int;
mod fps_limit;
mod parse_coords;
mod parse_rle;
mod viewport;

pub use format_int::NiceInt;
pub use fps_limit::FpsLimiter;
pub use parse_coords::parse_coords;
pub use parse_rle::parse_rle;
pub use viewport::Viewport;
