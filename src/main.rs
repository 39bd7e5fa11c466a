//! Sockdrawer CLI entrypoint for the terminal catalog page.

use std::io::{self, Write};
use std::process::ExitCode;

use sockdrawer::{CatalogError, SockdrawerConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = SockdrawerConfig::load_page_config()?;
    cli::catalog_tui::run(&config).await
}
