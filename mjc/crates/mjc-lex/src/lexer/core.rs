//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, the dispatch loop, and
//! error reporting.

use mjc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
use mjc_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::lexer::identifier::is_ident_start;
use crate::token::{Token, TokenKind};

/// Lexer for Mini-Java source text.
///
/// The lexer transforms source code into a stream of tokens, handling
/// whitespace, `//` comments, keywords, identifiers, numeric literals,
/// operators, and the fixed `System.out.println` lexeme.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Fixed multi-character lexemes (`System.out.println`,
    /// `==`, `!=`, `>=`, `<=`) take priority over their single-character
    /// prefixes. An unrecognized character is reported as a lexical error
    /// and skipped, and scanning continues with the next character.
    ///
    /// # Returns
    /// The next token, or a token with [`TokenKind::Eof`] at end of input.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                return self.make_token(TokenKind::Eof);
            }

            let kind = match self.cursor.current_char() {
                '{' => {
                    self.cursor.advance();
                    Some(TokenKind::LBrace)
                },
                '}' => {
                    self.cursor.advance();
                    Some(TokenKind::RBrace)
                },
                '(' => {
                    self.cursor.advance();
                    Some(TokenKind::LParen)
                },
                ')' => {
                    self.cursor.advance();
                    Some(TokenKind::RParen)
                },
                '[' => {
                    self.cursor.advance();
                    Some(TokenKind::LBracket)
                },
                ']' => {
                    self.cursor.advance();
                    Some(TokenKind::RBracket)
                },
                ';' => {
                    self.cursor.advance();
                    Some(TokenKind::Semicolon)
                },
                ',' => {
                    self.cursor.advance();
                    Some(TokenKind::Comma)
                },
                '+' => {
                    self.cursor.advance();
                    Some(TokenKind::Plus)
                },
                '-' => {
                    self.cursor.advance();
                    Some(TokenKind::Minus)
                },
                '*' => {
                    self.cursor.advance();
                    Some(TokenKind::Star)
                },
                '/' => {
                    // skip_whitespace_and_comments consumed any `//`, so a
                    // slash here is always the division operator.
                    self.cursor.advance();
                    Some(TokenKind::Slash)
                },
                '=' => Some(self.lex_equals()),
                '<' => Some(self.lex_less()),
                '>' => Some(self.lex_greater()),
                '!' => self.lex_bang(),
                'S' if self.at_println() => Some(self.lex_println()),
                c if is_ident_start(c) => Some(self.lex_identifier()),
                c if c.is_ascii_digit() => Some(self.lex_number()),
                c => {
                    self.report_error(format!("unexpected character '{}'", c));
                    self.cursor.advance();
                    None
                },
            };

            if let Some(kind) = kind {
                return self.make_token(kind);
            }
        }
    }

    /// Builds a token of the given kind from the current token slice.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            lexeme: self.cursor.slice_from(self.token_start).to_string(),
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    /// Reports a lexical error at the current token position.
    pub(crate) fn report_error(&mut self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message)
            .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
