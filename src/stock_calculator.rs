use std::path::PathBuf;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::stock_reader::{JsonStockReader, StockSource};
use crate::transaction_reader::{JsonTransactionReader, TransactionSource};
use crate::types::{Quantity, StockLevel, TransactionRecord, TransactionType};

/// Apply the transactions one after another to the base quantity
///
/// Orders decrease and refunds increase the quantity, other transaction types have no effect.
/// Returns `None` if the quantity leaves the range of `Quantity` at any step.
pub fn apply_transactions(base: Quantity, transactions: &[TransactionRecord]) -> Option<Quantity> {
    transactions.iter().try_fold(base, |qty, transaction| {
        if let TransactionType::Other(kind) = &transaction.transaction_type {
            warn!(
                "Ignoring transaction of unknown type '{}' (sku = {})",
                kind, transaction.sku
            );
        }
        qty.checked_add(transaction.delta())
    })
}

/// Computes the current stock level of a SKU from a stock source and a transaction source
pub struct StockLevelCalculator<S, T> {
    stock_source: S,
    transaction_source: T,
}

/// The calculator as wired up by the command line tool
pub type JsonStockLevelCalculator = StockLevelCalculator<JsonStockReader, JsonTransactionReader>;

impl JsonStockLevelCalculator {
    pub fn from_paths(stock: impl Into<PathBuf>, transactions: impl Into<PathBuf>) -> Self {
        Self::new(
            JsonStockReader::new(stock),
            JsonTransactionReader::new(transactions),
        )
    }
}

impl<S: StockSource, T: TransactionSource> StockLevelCalculator<S, T> {
    pub fn new(stock_source: S, transaction_source: T) -> Self {
        Self {
            stock_source,
            transaction_source,
        }
    }

    /// Base stock (0 if there is no record) adjusted by all transactions of the SKU
    ///
    /// Fails with `Error::NotFound` only if there is neither a stock record nor any transaction,
    /// and with `Error::Overflow` if the level does not fit into a `Quantity`.
    /// Errors of the sources are returned as they are.
    pub fn current_stock_level(&self, sku: &str) -> Result<StockLevel> {
        let stock = self.stock_source.find_by_sku(sku)?;
        let transactions = self.transaction_source.find_by_sku(sku)?;

        if stock.is_none() && transactions.is_empty() {
            return Err(Error::NotFound(sku.to_string()));
        }

        let base = stock.map_or(0, |record| record.stock);
        debug!(
            "Applying {} transactions to base stock {} (sku = {})",
            transactions.len(),
            base,
            sku
        );

        let qty = apply_transactions(base, &transactions)
            .ok_or_else(|| Error::Overflow(sku.to_string()))?;

        Ok(StockLevel {
            sku: sku.to_string(),
            qty,
        })
    }
}
