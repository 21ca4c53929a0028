use thiserror::Error;

/// A failure raised by the lexer or parser.
///
/// One variant per distinct message shape; the wording is part of the
/// compiler's external contract and must not drift.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Identifiers can't begin with a digit: {0}")]
    IdentifierStartsWithDigit(String),

    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    #[error("Missing \"{0}\"")]
    MissingToken(String),

    #[error("Expected \"{expected}\" but got \"{actual}\"")]
    UnexpectedToken { expected: String, actual: String },

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Invalid expression")]
    MissingExpression,

    #[error("Invalid function name: {0}")]
    InvalidFunctionName(String),

    #[error("Unexpected token found: {0}")]
    TrailingTokens(String),
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
