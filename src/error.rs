use std::io;
use std::path::PathBuf;

/// Errors raised while building a corpus or a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Weight strategy name that is neither similarity nor co-occurrence count.
    #[error("weight strategy must be \"sim\" or \"count\", got {0:?}")]
    InvalidStrategy(String),

    /// Two term vectors of different length were compared.
    /// All vectors come from the same matrix, so this is an internal bug.
    #[error("length of two vectors must be equal ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("cannot read stopword file {}: {source}", path.display())]
    Stopwords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no documents found in input")]
    EmptyInput,

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = NetworkError> = std::result::Result<T, E>;
