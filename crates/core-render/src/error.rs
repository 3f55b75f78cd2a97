use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("container `{id}` does not exist")]
    MissingContainer { id: String },
    #[error("row `{id}` does not exist")]
    MissingRow { id: String },
    #[error("row `{id}` (depth {depth}) does not fit in {available} lines")]
    RowOutOfBounds {
        id: String,
        depth: usize,
        available: u16,
    },
    #[error("item count must be at least 1")]
    EmptyItemCount,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
