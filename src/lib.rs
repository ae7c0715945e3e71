#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod json_source;
pub mod report;
pub mod stock_calculator;
pub mod stock_reader;
pub mod transaction_reader;
pub mod types;

pub use error::{Error, Result};
