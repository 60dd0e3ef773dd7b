use thiserror::Error;

/// Malformed description of the initial cells.
///
/// Always recoverable: callers fall back to an empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("entry {index} has {len} values, expected an (x, y) pair")]
    NotAPair { index: usize, len: usize },

    #[error("`{0}` is not an integer")]
    NotNumeric(String),

    #[error("value {0} has no partner to form a coordinate")]
    UnpairedValue(i64),

    #[error("malformed RLE pattern: {0}")]
    Rle(String),
}

/// Problems with a console command. Reported to the user, the session goes on,
/// except for [`ConsoleError::Io`] which ends it.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("unknown command `{0}`, type `help` for the list")]
    UnknownCommand(String),

    #[error("no preset named `{0}`, type `presets` for the list")]
    UnknownPreset(String),

    #[error("`{command}` expects {expected}, got `{value}`")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("`{0}` needs at least one coordinate pair")]
    NoCoordinates(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
