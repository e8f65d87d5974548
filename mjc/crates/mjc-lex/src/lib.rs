//! mjc-lex - Lexical analyzer for Mini-Java.
//!
//! Transforms Mini-Java source text into a stream of [`Token`]s. The lexer
//! skips whitespace and `//` line comments, recognizes the fixed
//! multi-character lexemes (`System.out.println`, `==`, `!=`, `>=`, `<=`)
//! ahead of single-character operators, reclassifies identifiers that match
//! reserved words (including `lerDouble`), and scans numeric literals in
//! integer and fractional form. Any other character is reported as a
//! lexical error through the shared diagnostic handler, after which
//! scanning continues so one pass can surface every bad character.
//!
//! The lexer is a pure function of its input text and handler; it keeps no
//! global state.
//!
//! # Examples
//!
//! ```
//! use mjc_lex::{tokenize, TokenKind};
//! use mjc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = tokenize("x = 2 + 3;", &handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(tokens[0].kind, TokenKind::Ident("x".into()));
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod cursor;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

use mjc_util::Handler;

/// Tokenize an entire source text.
///
/// Returns the full token sequence, always terminated by a single
/// [`TokenKind::Eof`] token. Lexical errors are reported to `handler`;
/// callers should check [`Handler::has_errors`] before handing the tokens
/// to the parser.
pub fn tokenize(source: &str, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}
