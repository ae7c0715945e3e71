use std::path::PathBuf;

use crate::error::Result;
use crate::json_source::load_records;
use crate::types::TransactionRecord;

/// Provides the transactions that adjust the base stock
pub trait TransactionSource {
    /// Read all transactions in source order
    fn find_all(&self) -> Result<Vec<TransactionRecord>>;

    /// All transactions for the given SKU, in source order
    ///
    /// Errors of the underlying source are passed on as they are.
    fn find_by_sku(&self, sku: &str) -> Result<Vec<TransactionRecord>> {
        let records = self.find_all()?;
        Ok(records
            .into_iter()
            .filter(|record| record.sku == sku)
            .collect())
    }
}

/// Transactions backed by a static JSON file
pub struct JsonTransactionReader {
    path: PathBuf,
}

impl JsonTransactionReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for JsonTransactionReader {
    fn find_all(&self) -> Result<Vec<TransactionRecord>> {
        load_records(&self.path)
    }
}
