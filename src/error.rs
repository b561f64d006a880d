use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocSearchError {
    #[error("Search query must be a single line")]
    MultilineQuery,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
