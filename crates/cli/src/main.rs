// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawdeck draw poker session.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;

use drawdeck_core::Catalog;

pub mod session;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=7))]
    players: u8,
    /// Number of exchange rounds.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=10))]
    rounds: u8,
    /// Seed for a reproducible session.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the cards catalog and exit.
    #[clap(long)]
    catalog: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if cli.catalog {
        for card in Catalog::new().iter() {
            println!("{}", card.diagnostic());
        }
        return;
    }

    let config = session::Config {
        players: cli.players as usize,
        rounds: cli.rounds as usize,
        seed: cli.seed,
    };

    if let Err(e) = session::run(&config) {
        error!("{e}");
    }
}
