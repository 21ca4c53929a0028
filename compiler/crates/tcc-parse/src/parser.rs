//! Recursive-descent parser over an index cursor.
//!
//! ```text
//! program    := function
//! function   := "int" IDENT "(" "void" ")" "{" statement "}"
//! statement  := "return" exp ";"
//! exp        := INT | "~" exp | "-" exp | "(" exp ")"
//! ```
//!
//! `expect` is the only place token mismatches are reported; every other
//! production either matches against `expect` or inspects the head token
//! itself (as `parse_exp` must, since its four alternatives aren't
//! distinguished by a single expected spelling).

use crate::ast::{Exp, Function, Program, Statement, UnaryOp};
use tcc_lex::{Reserved, Token};
use tcc_util::SyntaxError;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, position: 0 }
    }

    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        let function = self.parse_function()?;
        if self.position != self.tokens.len() {
            return Err(SyntaxError::TrailingTokens(
                self.tokens[self.position].spelling(),
            ));
        }
        Ok(Program { function })
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.position).cloned();
        if tok.is_some() {
            self.position += 1;
        }
        tok
    }

    /// Consumes one token, failing if it is missing or does not match
    /// `expected`'s printed spelling (e.g. `"int"`, `"("`, `";"`).
    fn expect(&mut self, expected: &str) -> Result<(), SyntaxError> {
        if self.is_at_end() {
            return Err(SyntaxError::MissingToken(expected.to_string()));
        }
        let actual = self.advance().expect("checked not at end");
        if actual.spelling() != expected {
            return Err(SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                actual: actual.spelling(),
            });
        }
        Ok(())
    }

    pub fn parse_function(&mut self) -> Result<Function, SyntaxError> {
        self.expect(Reserved::IntType.spelling())?;

        if self.is_at_end() {
            return Err(SyntaxError::MissingToken("<function name>".to_string()));
        }
        let name_tok = self.advance().expect("checked not at end");
        let name = match name_tok {
            Token::Identifier(name) => name,
            other => return Err(SyntaxError::InvalidFunctionName(other.spelling())),
        };

        self.expect(Reserved::OpenParen.spelling())?;
        self.expect(Reserved::Void.spelling())?;
        self.expect(Reserved::CloseParen.spelling())?;
        self.expect(Reserved::OpenBrace.spelling())?;
        let body = self.parse_statement()?;
        self.expect(Reserved::CloseBrace.spelling())?;

        Ok(Function { name, body })
    }

    pub fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(Reserved::Return.spelling())?;
        let exp = self.parse_exp()?;
        self.expect(Reserved::Semicolon.spelling())?;
        Ok(Statement::Return(exp))
    }

    pub fn parse_exp(&mut self) -> Result<Exp, SyntaxError> {
        let Some(token) = self.current().cloned() else {
            return Err(SyntaxError::MissingExpression);
        };

        match token {
            Token::Integer(digits) => {
                self.advance();
                Ok(Exp::Constant(digits))
            }
            Token::Reserved(Reserved::Complement) => {
                self.advance();
                let inner = self.parse_exp()?;
                Ok(Exp::Unary(UnaryOp::Complement, Box::new(inner)))
            }
            Token::Reserved(Reserved::Negate) => {
                self.advance();
                let inner = self.parse_exp()?;
                Ok(Exp::Unary(UnaryOp::Negate, Box::new(inner)))
            }
            Token::Reserved(Reserved::OpenParen) => {
                self.advance();
                let inner = self.parse_exp()?;
                self.expect(Reserved::CloseParen.spelling())?;
                Ok(inner)
            }
            other => {
                self.advance();
                Err(SyntaxError::InvalidExpression(other.spelling()))
            }
        }
    }
}
