use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read {0:?}: {1}")]
    ReadSource(PathBuf, #[source] std::io::Error),

    #[error("could not write {0:?}: {1}")]
    WriteOutput(PathBuf, #[source] std::io::Error),

    #[error("could not run {0:?}: {1}")]
    RunFailed(PathBuf, #[source] std::io::Error),

    #[error("invalid stage `{0}`, expected 0 (Lex), 1 (Parse), 2 (Tacky), or 3 (Codegen)")]
    InvalidStage(String),

    #[error(transparent)]
    Syntax(#[from] tcc_util::SyntaxError),

    #[error(transparent)]
    CodeGen(#[from] tcc_asmgen::CodeGenError),
}

pub type Result<T> = std::result::Result<T, DriverError>;
