//! Numeric literal lexing.
//!
//! Mini-Java admits nonnegative decimal literals in integer (`42`) and
//! fractional (`3.14`) form; both produce a real-valued number token.
//! Negation is supplied by the unary minus operator in the grammar, not
//! by the literal.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// A decimal point is consumed only when a digit follows it, so `12.`
    /// lexes as the number `12` and leaves the `.` to be diagnosed as an
    /// unexpected character.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        match text.parse::<f64>() {
            Ok(value) => TokenKind::Number(value),
            Err(e) => {
                self.report_error(format!("invalid numeric literal '{}': {}", text, e));
                TokenKind::Number(0.0)
            },
        }
    }
}
