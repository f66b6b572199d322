//! squarepad CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, check the
//! decoders are present, then run the interactive loop (or a single batch
//! when `--size` is given). For programmatic use, prefer the library API.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
