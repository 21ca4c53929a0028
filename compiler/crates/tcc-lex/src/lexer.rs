//! Finite-state-machine lexer.
//!
//! # States
//!
//! - `Start` — the only state that can end the stream or dispatch to another.
//! - `Identifier` — consuming `[A-Za-z0-9_]`, classified into a keyword or a
//!   plain identifier once the run ends.
//! - `Integer` — consuming `[0-9]`, with a following identifier character
//!   rejected as a malformed identifier (`2foo` is not `2` then `foo`).
//! - `Hyphen` — disambiguates `-` (`Negate`) from `--` (`Decrement`) with one
//!   character of lookahead, never more.
//!
//! Every state other than `Start` ends by emitting a token and returning to
//! `Start`; the character that ended a run is only ever peeked, never
//! consumed, so `Start` sees it unchanged on the next call.

use crate::cursor::Cursor;
use crate::token::{Reserved, Token};
use tcc_util::SyntaxError;

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Tokenizes the whole source, stopping at the first error.
    pub fn tokenize(source: &'a str) -> Result<Vec<Token>, SyntaxError> {
        Lexer::new(source).collect()
    }

    fn next_token(&mut self) -> Option<Result<Token, SyntaxError>> {
        self.cursor.skip_whitespace();

        let c = self.cursor.current_char()?;

        if c == '_' || c.is_ascii_alphabetic() {
            return Some(Ok(self.lex_identifier()));
        }
        if c.is_ascii_digit() {
            return Some(self.lex_integer());
        }

        Some(match c {
            '-' => Ok(self.lex_hyphen()),
            '(' => {
                self.cursor.advance();
                Ok(Token::Reserved(Reserved::OpenParen))
            }
            ')' => {
                self.cursor.advance();
                Ok(Token::Reserved(Reserved::CloseParen))
            }
            '{' => {
                self.cursor.advance();
                Ok(Token::Reserved(Reserved::OpenBrace))
            }
            '}' => {
                self.cursor.advance();
                Ok(Token::Reserved(Reserved::CloseBrace))
            }
            ';' => {
                self.cursor.advance();
                Ok(Token::Reserved(Reserved::Semicolon))
            }
            '~' => {
                self.cursor.advance();
                Ok(Token::Reserved(Reserved::Complement))
            }
            other => {
                self.cursor.advance();
                Err(SyntaxError::UnexpectedCharacter(other))
            }
        })
    }

    fn lex_identifier(&mut self) -> Token {
        let mut buf = String::new();
        while let Some(c) = self.cursor.current_char() {
            if c == '_' || c.is_ascii_alphanumeric() {
                buf.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        match Reserved::keyword(&buf) {
            Some(kw) => Token::Reserved(kw),
            None => Token::Identifier(buf),
        }
    }

    fn lex_integer(&mut self) -> Result<Token, SyntaxError> {
        let mut buf = String::new();
        while let Some(c) = self.cursor.current_char() {
            if c.is_ascii_digit() {
                buf.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        // A digit run directly followed by an identifier character (`2foo`)
        // is not `Integer("2")` then `Identifier("foo")`; it is a single
        // malformed identifier.
        if let Some(c) = self.cursor.current_char() {
            if c == '_' || c.is_ascii_alphabetic() {
                while let Some(c) = self.cursor.current_char() {
                    if c == '_' || c.is_ascii_alphanumeric() {
                        buf.push(c);
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
                return Err(SyntaxError::IdentifierStartsWithDigit(buf));
            }
        }
        Ok(Token::Integer(buf))
    }

    fn lex_hyphen(&mut self) -> Token {
        self.cursor.advance(); // consume the first '-'
        if self.cursor.match_char('-') {
            Token::Reserved(Reserved::Decrement)
        } else {
            Token::Reserved(Reserved::Negate)
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Some(Ok(tok)) => Some(Ok(tok)),
            Some(Err(e)) => {
                self.done = true;
                Some(Err(e))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_ok(src: &str) -> Vec<Token> {
        Lexer::tokenize(src).expect("expected successful lex")
    }

    #[test]
    fn full_program() {
        let toks = lex_ok("int main(void) { return 42; }");
        assert_eq!(
            toks,
            vec![
                Token::Reserved(Reserved::IntType),
                Token::Identifier("main".into()),
                Token::Reserved(Reserved::OpenParen),
                Token::Reserved(Reserved::Void),
                Token::Reserved(Reserved::CloseParen),
                Token::Reserved(Reserved::OpenBrace),
                Token::Reserved(Reserved::Return),
                Token::Integer("42".into()),
                Token::Reserved(Reserved::Semicolon),
                Token::Reserved(Reserved::CloseBrace),
            ]
        );
        assert_eq!(toks.len(), 10);
    }

    #[test]
    fn complement_of_negate_does_not_collapse_to_decrement() {
        let toks = lex_ok("~(-2)");
        assert_eq!(
            toks,
            vec![
                Token::Reserved(Reserved::Complement),
                Token::Reserved(Reserved::OpenParen),
                Token::Reserved(Reserved::Negate),
                Token::Integer("2".into()),
                Token::Reserved(Reserved::CloseParen),
            ]
        );
    }

    #[test]
    fn double_hyphen_is_decrement() {
        let toks = lex_ok("--");
        assert_eq!(toks, vec![Token::Reserved(Reserved::Decrement)]);
    }

    #[test]
    fn lone_hyphen_is_negate() {
        let toks = lex_ok("-");
        assert_eq!(toks, vec![Token::Reserved(Reserved::Negate)]);
    }

    #[test]
    fn lone_tilde_is_complement() {
        let toks = lex_ok("~");
        assert_eq!(toks, vec![Token::Reserved(Reserved::Complement)]);
    }

    #[test]
    fn mixed_negate_decrement_complement_run() {
        // "-~--~" -> Negate, Complement, Decrement, Complement
        let toks = lex_ok("-~--~");
        assert_eq!(
            toks,
            vec![
                Token::Reserved(Reserved::Negate),
                Token::Reserved(Reserved::Complement),
                Token::Reserved(Reserved::Decrement),
                Token::Reserved(Reserved::Complement),
            ]
        );
    }

    #[test]
    fn identifier_starting_with_digit_is_an_error() {
        let err = Lexer::tokenize("2foo;").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::IdentifierStartsWithDigit("2foo".to_string())
        );
    }

    #[test]
    fn identifier_then_open_paren() {
        let toks = lex_ok("i2x6(");
        assert_eq!(
            toks,
            vec![
                Token::Identifier("i2x6".into()),
                Token::Reserved(Reserved::OpenParen),
            ]
        );
    }

    #[test]
    fn integer_then_semicolon() {
        let toks = lex_ok("2246;");
        assert_eq!(
            toks,
            vec![
                Token::Integer("2246".into()),
                Token::Reserved(Reserved::Semicolon),
            ]
        );
    }

    #[test]
    fn whitespace_only_yields_no_tokens() {
        assert_eq!(lex_ok("   \n\t  "), Vec::<Token>::new());
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let err = Lexer::tokenize("@").unwrap_err();
        assert_eq!(err, SyntaxError::UnexpectedCharacter('@'));
    }

    // ------------------------------------------------------------------
    // Property-based tests
    // ------------------------------------------------------------------

    #[test]
    fn property_arbitrary_identifiers_lex_to_one_token() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}")| {
            let tokens = lex_ok(&input);
            if Reserved::keyword(&input).is_some() {
                prop_assert_eq!(tokens.len(), 1);
                prop_assert!(matches!(tokens[0], Token::Reserved(_)));
            } else {
                prop_assert_eq!(tokens, vec![Token::Identifier(input)]);
            }
        });
    }

    #[test]
    fn property_arbitrary_integers_lex_to_one_token() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9]{1,18}")| {
            let tokens = lex_ok(&digits);
            prop_assert_eq!(tokens, vec![Token::Integer(digits)]);
        });
    }

    #[test]
    fn property_lexer_is_deterministic() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z0-9_ ~\\-(){};]{0,60}")| {
            let once = Lexer::tokenize(&input);
            let twice = Lexer::tokenize(&input);
            prop_assert_eq!(once, twice);
        });
    }
}
