//! Token sequence to typed AST.
//!
//! The grammar is small enough that a single `Parser` over an index cursor
//! needs no lookahead beyond the current token: every production either
//! consumes a known literal via `expect`, or dispatches on the head token
//! (only `parse_exp` has more than one alternative).

mod ast;
mod parser;

pub use ast::{Exp, Function, Program, Statement, UnaryOp};
pub use parser::Parser;

use tcc_util::SyntaxError;

/// Convenience entry point: lex and parse a full source string.
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tcc_lex::Lexer::tokenize(source)?;
    Parser::new(tokens).parse()
}
