use thiserror::Error;

/// Fatal internal-compiler-bug errors. These can only occur if an earlier
/// stage produced IR this generator was never built to accept; they are not
/// reachable for any input the parser accepts, and are not meant to be
/// recovered from.
#[derive(Debug, Error)]
pub enum CodeGenError {
    #[error("internal compiler error: unknown instruction variant reached codegen")]
    UnknownInstruction,

    #[error("internal compiler error: unknown operand variant reached emission")]
    UnknownOperand,

    #[error("internal compiler error: pseudo-register `{0}` survived to emission")]
    PseudoSurvivedToEmission(String),

    #[error("failed to invoke host linker: {0}")]
    LinkFailed(String),
}

pub type Result<T> = std::result::Result<T, CodeGenError>;
