//! Shared error types for the tcc compiler pipeline.
//!
//! Every stage from the lexer through the assembly generator reports failures
//! through [`SyntaxError`]; the message text is part of the external contract
//! (stage-dump output and CLI diagnostics quote it verbatim), so each variant's
//! `#[error(...)]` format string is pinned to the exact wording rather than
//! assembled ad hoc at call sites.

mod error;

pub use error::{Result, SyntaxError};
