use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The mapping document could not be read or written.
///
/// All variants belong to one category: the store is unavailable. They are
/// split only so the message says which step failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store unavailable: failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store unavailable: failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store unavailable: failed to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),
}
