//! Minesweeper on a fixed-size board, with a safe first click.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

use anyhow::Context;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod config;
mod game;
mod gui;
mod render;

use gui::DISPLAY;

const TITLE: &str = "Deminer";

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .context("failed to initialize logger")?;

    let config = &*config::CONFIG;
    log::debug!("Using {:?}", config);
    let game = game::Game::new(config).context("invalid board configuration")?;

    gui::show_gui(game)
}
