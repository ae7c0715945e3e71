use serde::Deserialize;

pub type Sku = String;

pub type Quantity = i64;

/// The recorded on-hand quantity of a SKU before any transactions are applied
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockRecord {
    pub sku: Sku,
    pub stock: Quantity,
}

/// The kind of a transaction as found in the input document
///
/// Anything other than `order` or `refund` is kept as `Other` so that a single odd entry does not
/// make the whole document unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TransactionType {
    Order,
    Refund,
    Other(String),
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "order" => TransactionType::Order,
            "refund" => TransactionType::Refund,
            _ => TransactionType::Other(raw),
        }
    }
}

/// A single order or refund affecting a SKU
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    pub sku: Sku,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub qty: u32,
}

impl TransactionRecord {
    /// Signed effect of this transaction on the stock level
    pub fn delta(&self) -> Quantity {
        match self.transaction_type {
            TransactionType::Order => -Quantity::from(self.qty),
            TransactionType::Refund => Quantity::from(self.qty),
            TransactionType::Other(_) => 0,
        }
    }
}

/// Result of a stock level query, may be negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    pub sku: Sku,
    pub qty: Quantity,
}
