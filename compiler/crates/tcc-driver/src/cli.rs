use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, Stage};
use crate::error::Result;

/// A from-scratch compiler for a tiny subset of C.
#[derive(Debug, Parser)]
#[command(name = "tcc", author, version, about, propagate_version = true)]
pub struct Cli {
    /// Path to the source file to compile.
    pub source: PathBuf,

    /// Pipeline stage to stop after: 0=Lex, 1=Parse, 2=Tacky, 3=Codegen.
    pub stage: u8,

    /// Overrides the default `<source-without-extension>.s` output path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Assemble and link the emitted assembly into an executable.
    #[arg(long)]
    pub build: bool,

    /// Build (implied) and immediately run the resulting executable.
    #[arg(long)]
    pub run: bool,

    /// Enable debug-level tracing; also settable via `TCC_LOG`.
    #[arg(short, long, env = "TCC_LOG")]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config> {
        let stage = Stage::try_from(self.stage)?;
        Ok(Config {
            source: self.source,
            stage,
            output: self.output,
            build: self.build || self.run,
            run: self.run,
        })
    }
}

pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .try_init();
}
