//! mjc-par - Recursive-descent parser for Mini-Java.
//!
//! Recognizes the Mini-Java grammar with one token of lookahead and builds
//! the [`ast::Program`] tree. The parser halts at the first syntactic
//! error: each parse method returns `Option`, the failing method emits
//! exactly one diagnostic naming the expected construct and the offending
//! token, and `None` propagates to the caller.
//!
//! Grammar (canonical):
//!
//! ```text
//! PROG   ::= 'public' 'class' IDENT '{' 'public' 'static' 'void' 'main'
//!            '(' 'String' '[' ']' IDENT ')' '{' CMDS '}' '}'
//! CMDS   ::= ( DECL | STMT )*
//! DECL   ::= 'double' IDENT ( ',' IDENT )* ';'
//! STMT   ::= PRINT ';' | ASSIGN ';' | IF | WHILE
//! PRINT  ::= 'System.out.println' '(' EXPR ')'
//! ASSIGN ::= IDENT '=' ( 'lerDouble' '(' ')' | EXPR )
//! IF     ::= 'if' '(' COND ')' '{' CMDS '}' ( 'else' '{' CMDS '}' )?
//! WHILE  ::= 'while' '(' COND ')' '{' CMDS '}'
//! COND   ::= EXPR RELOP EXPR
//! EXPR   ::= TERM ( ('+'|'-') TERM )*
//! TERM   ::= FACTOR ( ('*'|'/') FACTOR )*
//! FACTOR ::= NUMBER | IDENT | '(' EXPR ')' | '-' FACTOR
//! ```

pub mod ast;
mod expr;
mod stmt;

pub use ast::{
    AssignStmt, BinOp, Block, Cond, Expr, Ident, IfStmt, PrintStmt, Program, ReadStmt, RelOp,
    Stmt, VarDeclStmt, WhileStmt,
};

use mjc_lex::{Token, TokenKind};
use mjc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
use mjc_util::Handler;

/// Parser for Mini-Java token streams.
///
/// Holds the full token buffer (terminated by `Eof`) and a cursor into it.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token stream.
    ///
    /// The stream is expected to end with an `Eof` token, as produced by
    /// [`mjc_lex::tokenize`]; one is appended if missing so lookahead never
    /// runs off the buffer.
    pub fn new(mut tokens: Vec<Token>, handler: &'a Handler) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                line: 0,
                column: 0,
            });
        }
        Self {
            tokens,
            pos: 0,
            handler,
        }
    }

    /// Parse a complete program.
    ///
    /// Returns `None` after emitting a diagnostic if the source does not
    /// match the grammar.
    pub fn parse(&mut self) -> Option<Program> {
        self.expect(TokenKind::Public, "`public`")?;
        self.expect(TokenKind::Class, "`class`")?;
        let class_name = self.expect_ident("a class name")?;
        self.expect(TokenKind::LBrace, "`{`")?;
        self.expect(TokenKind::Public, "`public`")?;
        self.expect(TokenKind::Static, "`static`")?;
        self.expect(TokenKind::Void, "`void`")?;
        self.expect(TokenKind::Main, "`main`")?;
        self.expect(TokenKind::LParen, "`(`")?;
        self.expect(TokenKind::StringKw, "`String`")?;
        self.expect(TokenKind::LBracket, "`[`")?;
        self.expect(TokenKind::RBracket, "`]`")?;
        let args_name = self.expect_ident("a parameter name")?;
        self.expect(TokenKind::RParen, "`)`")?;
        self.expect(TokenKind::LBrace, "`{`")?;
        let body = self.parse_stmts()?;
        self.expect(TokenKind::RBrace, "`}`")?;
        self.expect(TokenKind::RBrace, "`}`")?;
        self.expect(TokenKind::Eof, "end of file")?;

        Some(Program {
            class_name,
            args_name,
            body,
        })
    }

    /// The token at the cursor. Always valid; the buffer ends with `Eof`.
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Advance past the current token and return it.
    ///
    /// The cursor never moves past the trailing `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Is the current token of the given kind?
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    /// Consume the current token if it is of the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(&kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or emit a diagnostic.
    ///
    /// `what` names the expected construct in the error message, e.g.
    /// `` "`;`" `` or `"a parameter name"`.
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Option<Token> {
        if self.check(&kind) {
            Some(self.advance())
        } else {
            self.error_at_current(format!(
                "expected {}, found {}",
                what,
                self.current().display_name()
            ));
            None
        }
    }

    /// Consume an identifier token or emit a diagnostic.
    pub(crate) fn expect_ident(&mut self, what: &str) -> Option<ast::Ident> {
        if let TokenKind::Ident(name) = &self.current().kind {
            let name = name.clone();
            let token = self.advance();
            Some(ast::Ident {
                name,
                line: token.line,
                column: token.column,
            })
        } else {
            self.error_at_current(format!(
                "expected {}, found {}",
                what,
                self.current().display_name()
            ));
            None
        }
    }

    /// Emit a syntax error at the current token.
    pub(crate) fn error_at_current(&self, message: String) {
        let token = self.current();
        let code = if token.kind == TokenKind::Eof {
            DiagnosticCode::E_PAR_UNEXPECTED_EOF
        } else {
            DiagnosticCode::E_PAR_EXPECTED_TOKEN
        };
        DiagnosticBuilder::error(message)
            .code(code)
            .span(token.span())
            .emit(self.handler);
    }
}

/// Parse a token stream into a program.
///
/// Convenience entry point wrapping [`Parser::parse`].
pub fn parse(tokens: Vec<Token>, handler: &Handler) -> Option<Program> {
    Parser::new(tokens, handler).parse()
}
