use anyhow::Context;
use clap::Parser;
use std::io;

use parking_slot_booking::console::Console;
use parking_slot_booking::loader::parser::load_config;
use parking_slot_booking::{build_booking_service, logger};

/// Reserve one of ten parking slots (1-5 car, 6-10 bike).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file (databasePath, storeTyp, logDir).
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    logger::init(&config.log_dir);
    log::info!("Starting parking slot booking with {:?}.", config);

    let service = build_booking_service(&config).context("Failed to start booking service")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), service).run()?;

    Ok(())
}
