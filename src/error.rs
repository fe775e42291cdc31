//! Unified error type for all store operations.

/// Things that can go wrong when using the store.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No record with the given id.
    NotFound(u64),
    /// File system problem (read, write, rename).
    Io(String),
    /// Failed to serialize the table to bytes.
    Serialize(String),
    /// Failed to deserialize bytes back into the table.
    Deserialize(String),
}

impl Error {
    /// `true` for failures of the durable snapshot write. When one of these
    /// comes back from a mutation the in-memory table has already been
    /// rolled back, so the store stays consistent for later calls.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Serialize(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "no user with id {id}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Error::Deserialize(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
