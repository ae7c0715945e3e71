use std::path::PathBuf;

use thiserror::Error;

/// Failures of a stock level query
#[derive(Debug, Error)]
pub enum Error {
    /// The backing file could not be read
    #[error("Could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing document is not a JSON array of the expected records
    #[error("Malformed data source: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Stock lookup failed, the underlying cause is not kept
    #[error("Could not find stock")]
    Lookup,

    /// Applying the transactions took the level out of the representable range
    #[error("Stock level out of range (sku = {0})")]
    Overflow(String),

    /// Neither a stock record nor any transactions exist for the SKU
    #[error("Stock not found (sku = {0})")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
