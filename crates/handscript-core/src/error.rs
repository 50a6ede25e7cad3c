pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glyph metrics for {ch:?}: {message}")]
    InvalidGlyph { ch: char, message: String },
}
