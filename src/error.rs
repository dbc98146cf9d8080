use std::path::PathBuf;

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("width must be greater than 0")]
    ZeroWidth,

    #[error("height must be greater than 0")]
    ZeroHeight,

    #[error("n must be greater than 0")]
    ZeroRunLength,

    #[error("a {width}x{height} board is too large")]
    TooLarge { width: usize, height: usize },

    #[error("a run of {n} cannot fit on a {width}x{height} board")]
    RunTooLong {
        n: usize,
        width: usize,
        height: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid board configuration: {0}")]
    InvalidBoard(#[from] BoardError),
}
