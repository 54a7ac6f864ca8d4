use thiserror::Error;

/// Errors returned by the catalog library
#[derive(Debug, Error)]
pub enum LibraryError {
    /// A required form field is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// Another Pokémon already uses this number
    #[error("A Pokémon with number {0} already exists.")]
    DuplicateKey(i64),

    /// Update or delete attempted with nothing selected
    #[error("Select a Pokémon to {0}.")]
    SelectionRequired(&'static str),

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Could not prepare the data directory: {0}")]
    Io(#[from] std::io::Error),
}

pub type LibraryResult<T> = Result<T, LibraryError>;
