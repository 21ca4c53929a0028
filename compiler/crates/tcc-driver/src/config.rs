use std::path::PathBuf;

use crate::error::DriverError;

/// Which stage of the pipeline to run before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Tacky,
    Codegen,
}

impl TryFrom<u8> for Stage {
    type Error = DriverError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Stage::Lex),
            1 => Ok(Stage::Parse),
            2 => Ok(Stage::Tacky),
            3 => Ok(Stage::Codegen),
            other => Err(DriverError::InvalidStage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub stage: Stage,
    /// Overrides the default `<source-without-extension>.s` output path.
    pub output: Option<PathBuf>,
    /// Ambient convenience: assemble and link the emitted `.s` with the host
    /// `cc`, producing an executable.
    pub build: bool,
    /// Ambient convenience: run the built executable and propagate its exit
    /// code. Implies `build`.
    pub run: bool,
}
