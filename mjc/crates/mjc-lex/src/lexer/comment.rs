//! Whitespace and comment skipping.
//!
//! The language has `//` line comments only; there are no block comments.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. Stops at the first character that
    /// belongs to a token, including a `/` not followed by another `/`
    /// (the division operator).
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment (from `//` to end of line).
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}
