//! Command-line entry point for datestride

use anyhow::Result;
use clap::Parser;
use datestride_cli::{Cli, Dispatcher, Session};
use log::LevelFilter;
use std::process;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG applies unless --verbose asks for more
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let session = match Session::new(&cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error initializing session: {:#}", e);
            process::exit(2);
        }
    };

    let mut dispatcher = Dispatcher::new(session);

    match dispatcher.execute(&cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            // Show error chain one cause per line in verbose mode
            if cli.verbose {
                eprintln!("Error: {}", e);
                for cause in e.chain().skip(1) {
                    eprintln!("Caused by: {}", cause);
                }
            } else {
                eprintln!("Error: {:#}", e);
            }

            process::exit(2);
        }
    }
}
