//! Operator and fixed multi-character lexeme lexing.
//!
//! Multi-character lexemes are matched before their single-character
//! prefixes: `==` before `=`, `>=` before `>`, `<=` before `<`, and the
//! full `System.out.println` before the identifier path.

use crate::lexer::identifier::is_ident_continue;
use crate::token::TokenKind;
use crate::Lexer;

/// The print keyword's fixed lexeme.
const PRINTLN: &str = "System.out.println";

impl<'a> Lexer<'a> {
    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::EqEq
        } else {
            TokenKind::Assign
        }
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else {
            TokenKind::Lt
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else {
            TokenKind::Gt
        }
    }

    /// Lexes not-equals.
    ///
    /// A bare `!` is not an operator in this language, so it is reported
    /// as a lexical error and `None` is returned to resume scanning.
    pub(crate) fn lex_bang(&mut self) -> Option<TokenKind> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Some(TokenKind::NotEq)
        } else {
            self.report_error("unexpected character '!'".to_string());
            None
        }
    }

    /// Returns true if the cursor sits on the full `System.out.println`
    /// lexeme (and not on a longer identifier-like run such as
    /// `System.out.printlnx`).
    pub(crate) fn at_println(&self) -> bool {
        let rest = self.cursor.remaining();
        if !rest.starts_with(PRINTLN) {
            return false;
        }
        match rest[PRINTLN.len()..].chars().next() {
            Some(c) => !is_ident_continue(c),
            None => true,
        }
    }

    /// Consumes the `System.out.println` lexeme.
    pub(crate) fn lex_println(&mut self) -> TokenKind {
        self.cursor.advance_n(PRINTLN.chars().count());
        TokenKind::Println
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mjc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler).map(|t| t.kind).collect()
    }

    #[test]
    fn test_relational_operators() {
        assert_eq!(
            kinds("== != >= <= > <"),
            vec![
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::GtEq,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::Lt,
            ]
        );
    }

    #[test]
    fn test_assign_vs_eqeq() {
        assert_eq!(kinds("= =="), vec![TokenKind::Assign, TokenKind::EqEq]);
        // Three equals lex greedily as `==` then `=`.
        assert_eq!(kinds("==="), vec![TokenKind::EqEq, TokenKind::Assign]);
    }

    #[test]
    fn test_compound_without_space() {
        assert_eq!(
            kinds("a>=b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::GtEq,
                TokenKind::Ident("b".into()),
            ]
        );
    }

    #[test]
    fn test_bare_bang_is_error() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("a ! b", &handler).collect();
        assert!(handler.has_errors());
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_println_keyword() {
        assert_eq!(
            kinds("System.out.println(x)"),
            vec![
                TokenKind::Println,
                TokenKind::LParen,
                TokenKind::Ident("x".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_println_longer_run_falls_back_to_identifier() {
        // `System.out.printlnx` is not the print keyword; `System` lexes
        // as an identifier and the following `.` is a lexical error.
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("System.out.printlnx", &handler).collect();
        assert_eq!(tokens[0].kind, TokenKind::Ident("System".into()));
        assert!(handler.has_errors());
    }

    #[test]
    fn test_system_alone_is_identifier() {
        assert_eq!(kinds("System"), vec![TokenKind::Ident("System".into())]);
    }
}
