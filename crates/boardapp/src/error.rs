use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Content is required.")]
    ContentRequired,

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl BoardError {
    /// Validation failures are user input problems; everything else is a
    /// storage failure. The controller passes validation messages through
    /// verbatim and wraps the rest with a contextual prefix.
    pub fn is_validation(&self) -> bool {
        matches!(self, BoardError::TitleRequired | BoardError::ContentRequired)
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
