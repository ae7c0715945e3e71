use std::path::PathBuf;

pub const DEFAULT_SKU: &str = "MDH133414/85/14";
pub const DEFAULT_STOCK_FILE: &str = "data/stock.json";
pub const DEFAULT_TRANSACTIONS_FILE: &str = "data/transactions.json";

pub const STOCK_FILE_VAR: &str = "STOCK_LEVEL_STOCK_FILE";
pub const TRANSACTIONS_FILE_VAR: &str = "STOCK_LEVEL_TRANSACTIONS_FILE";

/// What to query and where the data lives
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sku: String,
    pub stock_path: PathBuf,
    pub transactions_path: PathBuf,
}

impl Config {
    /// Build the configuration from positional arguments (executable name already skipped)
    ///
    /// Usage: `[SKU] [STOCK_FILE] [TRANSACTIONS_FILE]`. Missing file arguments fall back to the
    /// variables returned by `env`, then to the files under `data/`.
    pub fn from_args(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut args = args.into_iter();

        let sku = args.next().unwrap_or_else(|| DEFAULT_SKU.to_string());
        let stock_path = args
            .next()
            .or_else(|| env(STOCK_FILE_VAR))
            .unwrap_or_else(|| DEFAULT_STOCK_FILE.to_string());
        let transactions_path = args
            .next()
            .or_else(|| env(TRANSACTIONS_FILE_VAR))
            .unwrap_or_else(|| DEFAULT_TRANSACTIONS_FILE.to_string());

        Self {
            sku,
            stock_path: stock_path.into(),
            transactions_path: transactions_path.into(),
        }
    }

    /// Configuration of the running process
    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args().skip(1), // skip executable name
            |name| std::env::var(name).ok(),
        )
    }
}
