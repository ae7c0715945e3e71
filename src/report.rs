use std::fmt;

use anyhow::Result;

use crate::types::StockLevel;

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current stock level for SKU {}: {}", self.sku, self.qty)
    }
}

/// Write the stock level as a single line to the provided destination
pub fn write_stock_level(destination: &mut dyn std::io::Write, level: &StockLevel) -> Result<()> {
    writeln!(destination, "{}", level)?;
    Ok(())
}
