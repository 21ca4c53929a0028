//! Character stream to flat token sequence.
//!
//! # Lexical grammar
//!
//! The supported subset has exactly three token kinds: `Reserved` (fixed
//! keywords and punctuation), `Identifier` (`[A-Za-z_][A-Za-z0-9_]*`, not
//! already a keyword), and `Integer` (`[0-9]+`). Tokenizing is a single pass
//! over a byte cursor with at most one character of lookahead, implemented as
//! a finite-state machine (see the `lexer` module for the state table).
//!
//! The lexer never buffers more than the current run: an `Identifier` or
//! `Integer` run is built up character by character, and a `Hyphen` run looks
//! exactly one character ahead to tell `-` from `--`.

mod cursor;
mod lexer;
mod token;

pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::Lexer;
pub use token::{Reserved, Token};

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn nested_parens_collapse_correctly() {
        let toks = Lexer::tokenize("~((((-100))))").expect("lex");
        assert_eq!(toks.first(), Some(&Token::Reserved(Reserved::Complement)));
        assert_eq!(toks.last(), Some(&Token::Reserved(Reserved::CloseParen)));
        assert_eq!(toks.len(), 8);
    }

    #[test]
    fn keyword_prefix_is_not_misclassified() {
        // "intx" must not be split into the keyword "int" plus "x".
        let toks = Lexer::tokenize("intx").expect("lex");
        assert_eq!(toks, vec![Token::Identifier("intx".to_string())]);
    }

    #[test]
    fn three_hyphens_is_decrement_then_negate() {
        let toks = Lexer::tokenize("---").expect("lex");
        assert_eq!(
            toks,
            vec![
                Token::Reserved(Reserved::Decrement),
                Token::Reserved(Reserved::Negate),
            ]
        );
    }

    #[test]
    fn underscore_only_identifier() {
        let toks = Lexer::tokenize("_").expect("lex");
        assert_eq!(toks, vec![Token::Identifier("_".to_string())]);
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert_eq!(Lexer::tokenize("").expect("lex"), Vec::<Token>::new());
    }
}
