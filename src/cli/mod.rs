//! Command Line Interface (CLI) layer for squarepad.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! the stdin prompts (`prompt`), and the interactive loop (`runner`) that
//! drives `squarepad::BatchResizer` batch after batch.
pub mod args;
pub mod errors;
pub mod prompt;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
