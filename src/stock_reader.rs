use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::json_source::load_records;
use crate::types::StockRecord;

/// Provides the base stock records
pub trait StockSource {
    /// Read all stock records in source order
    fn find_all(&self) -> Result<Vec<StockRecord>>;

    /// Find the first stock record for the given SKU
    ///
    /// Any failure of the underlying source is reported as `Error::Lookup`, the cause is only
    /// logged.
    fn find_by_sku(&self, sku: &str) -> Result<Option<StockRecord>> {
        let records = self.find_all().map_err(|err| {
            debug!("Stock lookup failed (sku = {}): {}", sku, err);
            Error::Lookup
        })?;

        Ok(records.into_iter().find(|record| record.sku == sku))
    }
}

/// Stock records backed by a static JSON file
pub struct JsonStockReader {
    path: PathBuf,
}

impl JsonStockReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StockSource for JsonStockReader {
    fn find_all(&self) -> Result<Vec<StockRecord>> {
        load_records(&self.path)
    }
}
