//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

/// Returns true if `c` can start an identifier.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits, or underscores. After reading the identifier, checks whether
    /// it matches a reserved word (including `lerDouble`).
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mjc_util::Handler;

    fn lex_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.next_token().kind
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_one("cont"), TokenKind::Ident("cont".into()));
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(lex_one("valor_2x"), TokenKind::Ident("valor_2x".into()));
    }

    #[test]
    fn test_underscore_start() {
        assert_eq!(lex_one("_tmp"), TokenKind::Ident("_tmp".into()));
    }

    #[test]
    fn test_keyword_double() {
        assert_eq!(lex_one("double"), TokenKind::Double);
    }

    #[test]
    fn test_keyword_if() {
        assert_eq!(lex_one("if"), TokenKind::If);
    }

    #[test]
    fn test_keyword_else() {
        assert_eq!(lex_one("else"), TokenKind::Else);
    }

    #[test]
    fn test_keyword_while() {
        assert_eq!(lex_one("while"), TokenKind::While);
    }

    #[test]
    fn test_keyword_ler_double() {
        assert_eq!(lex_one("lerDouble"), TokenKind::LerDouble);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        // A keyword prefix followed by more identifier characters is a
        // plain identifier.
        assert_eq!(lex_one("whilex"), TokenKind::Ident("whilex".into()));
        assert_eq!(lex_one("doubled"), TokenKind::Ident("doubled".into()));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_one("While"), TokenKind::Ident("While".into()));
        assert_eq!(lex_one("Double"), TokenKind::Ident("Double".into()));
    }
}
