/// Errors reported by the engine. Every variant is a value returned to the
/// caller; nothing here aborts the host process.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),

    #[error("Palette has no colors")]
    EmptyPalette,

    /// Role suggestion needs two distinct colors to pick a background and a text color.
    #[error("Need at least two distinct colors, got {0}")]
    TooFewColors(usize),

    #[error("Color index {index} out of range for palette of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown vision type: {0:?}")]
    UnknownVisionType(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Malformed palette document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log filter: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
