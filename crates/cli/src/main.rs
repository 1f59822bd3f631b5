// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoecount CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;

use shoecount_core::Shoe;

pub mod report;
pub mod session;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of decks in the shoe.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..=64))]
    decks: u16,
    /// Seed for a reproducible shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Keep the report clean unless RUST_LOG asks for more.
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let decks = cli.decks as usize;
    let shoe = match cli.seed {
        Some(seed) => Shoe::with_seed(decks, seed)?,
        None => Shoe::shuffled(decks)?,
    };

    info!("Starting session with {decks} decks");

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::Session::new(shoe, stdin.lock(), stdout.lock()).run()
}
