//! Token definitions for the Mini-Java lexer.

use mjc_util::Span;

/// The kind of a lexical token.
///
/// This is the closed set of token categories the language admits. The
/// reserved words include `lerDouble` (console input) and the full
/// `System.out.println` lexeme, which is scanned as a single keyword
/// token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// "public"
    Public,
    /// "class"
    Class,
    /// "static"
    Static,
    /// "void"
    Void,
    /// "main"
    Main,
    /// "String"
    StringKw,
    /// "double" - the language's only type
    Double,
    /// "if"
    If,
    /// "else"
    Else,
    /// "while"
    While,
    /// "System.out.println" - console output
    Println,
    /// "lerDouble" - console input
    LerDouble,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// "{"
    LBrace,
    /// "}"
    RBrace,
    /// "("
    LParen,
    /// ")"
    RParen,
    /// "["
    LBracket,
    /// "]"
    RBracket,
    /// ";"
    Semicolon,
    /// ","
    Comma,
    /// "=" - assignment
    Assign,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Star,
    /// "/"
    Slash,
    /// "=="
    EqEq,
    /// "!="
    NotEq,
    /// ">="
    GtEq,
    /// "<="
    LtEq,
    /// ">"
    Gt,
    /// "<"
    Lt,

    // =========================================================================
    // LITERALS AND IDENTIFIERS
    // =========================================================================
    /// Identifier (variable name, class name, `main` parameter name)
    Ident(String),
    /// Numeric literal carrying its parsed value
    Number(f64),

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// End of file marker
    Eof,
}

/// A lexical token: kind, verbatim lexeme, and source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The token category (plus payload for identifiers and numbers).
    pub kind: TokenKind,
    /// The verbatim source text that produced this token.
    pub lexeme: String,
    /// Line where the token starts (1-based).
    pub line: u32,
    /// Column where the token starts (1-based).
    pub column: u32,
}

impl Token {
    /// The span of this token's starting position.
    pub fn span(&self) -> Span {
        Span::point(self.line, self.column)
    }

    /// How this token reads in a diagnostic message.
    ///
    /// Regular tokens display their lexeme in backticks; end of file has
    /// no lexeme and displays as prose.
    pub fn display_name(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end of file".to_string()
        } else {
            format!("`{}`", self.lexeme)
        }
    }
}

/// Reclassify an identifier lexeme to a keyword, if it is one.
///
/// Returns `None` for ordinary identifiers.
///
/// # Examples
///
/// ```
/// use mjc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("lerDouble"), Some(TokenKind::LerDouble));
/// assert_eq!(keyword_from_ident("cont"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "public" => Some(TokenKind::Public),
        "class" => Some(TokenKind::Class),
        "static" => Some(TokenKind::Static),
        "void" => Some(TokenKind::Void),
        "main" => Some(TokenKind::Main),
        "String" => Some(TokenKind::StringKw),
        "double" => Some(TokenKind::Double),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "lerDouble" => Some(TokenKind::LerDouble),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(keyword_from_ident("public"), Some(TokenKind::Public));
        assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
        assert_eq!(keyword_from_ident("static"), Some(TokenKind::Static));
        assert_eq!(keyword_from_ident("void"), Some(TokenKind::Void));
        assert_eq!(keyword_from_ident("main"), Some(TokenKind::Main));
        assert_eq!(keyword_from_ident("String"), Some(TokenKind::StringKw));
        assert_eq!(keyword_from_ident("double"), Some(TokenKind::Double));
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::If));
        assert_eq!(keyword_from_ident("else"), Some(TokenKind::Else));
        assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
        assert_eq!(keyword_from_ident("lerDouble"), Some(TokenKind::LerDouble));
    }

    #[test]
    fn test_non_keywords() {
        assert_eq!(keyword_from_ident("Main"), None);
        assert_eq!(keyword_from_ident("string"), None);
        assert_eq!(keyword_from_ident("lerdouble"), None);
        assert_eq!(keyword_from_ident("x"), None);
        assert_eq!(keyword_from_ident("System"), None);
    }

    #[test]
    fn test_display_name() {
        let semi = Token {
            kind: TokenKind::Semicolon,
            lexeme: ";".into(),
            line: 1,
            column: 8,
        };
        assert_eq!(semi.display_name(), "`;`");

        let eof = Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line: 2,
            column: 1,
        };
        assert_eq!(eof.display_name(), "end of file");
    }

    #[test]
    fn test_token_span() {
        let token = Token {
            kind: TokenKind::Plus,
            lexeme: "+".into(),
            line: 3,
            column: 14,
        };
        let span = token.span();
        assert_eq!(span.line, 3);
        assert_eq!(span.column, 14);
    }
}
