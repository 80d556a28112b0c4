//! vitae CLI: renders the CV data files into the static site page.
//!
//! Takes no arguments. By default reads the category data files from
//! `./data/` and writes `./index.html`, then prints `Done.`.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(&cli)
}
