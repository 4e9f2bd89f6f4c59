//! Error type shared by every recgraph-core operation.

use thiserror::Error;

/// Errors reported by graph, collection, and codec operations.
///
/// None of these are fatal: the caller decides whether to retry, prompt
/// again, or carry on with the state it already has.
#[derive(Error, Debug)]
pub enum Error {
    /// The store already holds its maximum number of nodes.
    #[error("graph is full ({max} nodes)")]
    Full { max: usize },

    /// An edge endpoint does not name a node in the store.
    #[error("invalid node index {index} (node count is {node_count})")]
    InvalidIndex { index: usize, node_count: usize },

    /// A source holds more records than a flat collection can take.
    #[error("{len} records exceed collection capacity of {max}")]
    CapacityExceeded { len: usize, max: usize },

    /// The operation has nothing to work on.
    #[error("collection is empty")]
    Empty,

    /// Underlying open, read, or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data on disk cannot describe a valid collection.
    #[error("corrupt data: {0}")]
    CorruptData(String),
}

impl Error {
    /// Create a corrupt data error.
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptData(msg.into())
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full { .. })
    }

    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData(_))
    }
}

/// Result alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
