#![forbid(unsafe_code)]

use anyhow::Result;
use log::{debug, error};

use stock_level::{
    config::Config, report::write_stock_level, stock_calculator::JsonStockLevelCalculator,
};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env();
    debug!("Using {:?}", config);

    let calculator =
        JsonStockLevelCalculator::from_paths(&config.stock_path, &config.transactions_path);

    let level = match calculator.current_stock_level(&config.sku) {
        Ok(level) => level,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout();
    write_stock_level(&mut stdout, &level)?;

    Ok(())
}
