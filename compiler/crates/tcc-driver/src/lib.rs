//! The `tcc` CLI driver: argument parsing, logging setup, and stage-dispatch
//! orchestration over the `tcc-lex` / `tcc-parse` / `tcc-tacky` /
//! `tcc-asmgen` stage crates.

mod cli;
mod config;
mod error;
mod session;

pub use cli::{init_logging, Cli};
pub use config::{Config, Stage};
pub use error::{DriverError, Result};
pub use session::Session;

use clap::Parser;

/// Entry point shared by the `tcc` binary: parse arguments, run the
/// pipeline, and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.into_config()?;
    Session::new(config).compile()
}
