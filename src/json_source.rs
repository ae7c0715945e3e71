use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decode a whole JSON document holding an array of records
pub fn read_records<T: DeserializeOwned>(reader: impl std::io::Read) -> Result<Vec<T>> {
    let records = serde_json::from_reader(std::io::BufReader::new(reader))?;
    Ok(records)
}

/// Open the file at `path` and decode it with `read_records`
///
/// The file is read again on every call, nothing is cached.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use crate::types::{StockRecord, TransactionRecord, TransactionType};

    #[test]
    fn empty_array() {
        let buffer = br#"[]"#;
        let records: Vec<StockRecord> = read_records(&buffer[..]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn stock_records() {
        let buffer = br#"
[
    { "sku": "LTV719449/39/39", "stock": 8525 },
    { "sku": "CLQ759166/79/58", "stock": 3086 }
]
"#;
        let records: Vec<StockRecord> = read_records(&buffer[..]).unwrap();
        assert_eq!(
            records,
            vec![
                StockRecord {
                    sku: "LTV719449/39/39".to_string(),
                    stock: 8525,
                },
                StockRecord {
                    sku: "CLQ759166/79/58".to_string(),
                    stock: 3086,
                },
            ]
        );
    }

    #[test]
    fn transactions_with_unknown_type() {
        let buffer = br#"
[
    { "sku": "a", "type": "order", "qty": 2 },
    { "sku": "a", "type": "transfer", "qty": 5 },
    { "sku": "b", "type": "refund", "qty": 1 }
]
"#;
        let records: Vec<TransactionRecord> = read_records(&buffer[..]).unwrap();
        let types: Vec<_> = records.into_iter().map(|r| r.transaction_type).collect();
        assert_eq!(
            types,
            vec![
                TransactionType::Order,
                TransactionType::Other("transfer".to_string()),
                TransactionType::Refund,
            ]
        );
    }

    #[test]
    fn malformed_documents() {
        let not_json = br#"sku,stock"#;
        let err = read_records::<StockRecord>(&not_json[..]).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));

        let not_an_array = br#"{ "sku": "a", "stock": 1 }"#;
        let err = read_records::<StockRecord>(&not_an_array[..]).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));

        let negative_qty = br#"[{ "sku": "a", "type": "order", "qty": -1 }]"#;
        let err = read_records::<TransactionRecord>(&negative_qty[..]).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "sku": "a", "stock": 4 }}]"#).unwrap();

        let records: Vec<StockRecord> = load_records(file.path()).unwrap();
        assert_eq!(
            records,
            vec![StockRecord {
                sku: "a".to_string(),
                stock: 4,
            }]
        );
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.json");

        let err = load_records::<StockRecord>(&path).unwrap_err();
        match err {
            Error::Io { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
