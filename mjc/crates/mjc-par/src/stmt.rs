//! Statement and declaration parsing.

use crate::ast::*;
use crate::Parser;
use mjc_lex::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a statement sequence (the CMDS production), stopping at `}`
    /// or end of file.
    pub(crate) fn parse_stmts(&mut self) -> Option<Block> {
        let mut stmts = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::RBrace | TokenKind::Eof => break,
                _ => stmts.push(self.parse_stmt()?),
            }
        }
        Some(Block { stmts })
    }

    /// Parse a single declaration or statement.
    pub(crate) fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current().kind {
            TokenKind::Double => self.parse_var_decl(),
            TokenKind::Println => self.parse_print_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Ident(_) => self.parse_assign_stmt(),
            _ => {
                self.error_at_current(format!(
                    "expected a statement, found {}",
                    self.current().display_name()
                ));
                None
            },
        }
    }

    /// Parse a declaration: `double IDENT ( ',' IDENT )* ';'`
    fn parse_var_decl(&mut self) -> Option<Stmt> {
        self.expect(TokenKind::Double, "`double`")?;

        let mut names = vec![self.expect_ident("a variable name")?];
        while self.match_kind(TokenKind::Comma) {
            names.push(self.expect_ident("a variable name")?);
        }
        self.expect(TokenKind::Semicolon, "`;`")?;

        Some(Stmt::VarDecl(VarDeclStmt { names }))
    }

    /// Parse a print statement: `System.out.println '(' EXPR ')' ';'`
    fn parse_print_stmt(&mut self) -> Option<Stmt> {
        self.expect(TokenKind::Println, "`System.out.println`")?;
        self.expect(TokenKind::LParen, "`(`")?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::RParen, "`)`")?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Some(Stmt::Print(PrintStmt { value }))
    }

    /// Parse an assignment: `IDENT '=' ( 'lerDouble' '(' ')' | EXPR ) ';'`
    ///
    /// An assignment whose right-hand side is `lerDouble()` lowers to a
    /// read statement.
    fn parse_assign_stmt(&mut self) -> Option<Stmt> {
        let target = self.expect_ident("a variable name")?;
        self.expect(TokenKind::Assign, "`=`")?;

        if self.match_kind(TokenKind::LerDouble) {
            self.expect(TokenKind::LParen, "`(`")?;
            self.expect(TokenKind::RParen, "`)`")?;
            self.expect(TokenKind::Semicolon, "`;`")?;
            return Some(Stmt::Read(ReadStmt { target }));
        }

        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "`;`")?;

        Some(Stmt::Assign(AssignStmt { target, value }))
    }

    /// Parse an if statement with optional else branch.
    fn parse_if_stmt(&mut self) -> Option<Stmt> {
        self.expect(TokenKind::If, "`if`")?;
        self.expect(TokenKind::LParen, "`(`")?;
        let cond = self.parse_cond()?;
        self.expect(TokenKind::RParen, "`)`")?;
        self.expect(TokenKind::LBrace, "`{`")?;
        let then_block = self.parse_stmts()?;
        self.expect(TokenKind::RBrace, "`}`")?;

        let else_block = if self.match_kind(TokenKind::Else) {
            self.expect(TokenKind::LBrace, "`{`")?;
            let block = self.parse_stmts()?;
            self.expect(TokenKind::RBrace, "`}`")?;
            Some(block)
        } else {
            None
        };

        Some(Stmt::If(IfStmt {
            cond,
            then_block,
            else_block,
        }))
    }

    /// Parse a while statement.
    fn parse_while_stmt(&mut self) -> Option<Stmt> {
        self.expect(TokenKind::While, "`while`")?;
        self.expect(TokenKind::LParen, "`(`")?;
        let cond = self.parse_cond()?;
        self.expect(TokenKind::RParen, "`)`")?;
        self.expect(TokenKind::LBrace, "`{`")?;
        let body = self.parse_stmts()?;
        self.expect(TokenKind::RBrace, "`}`")?;

        Some(Stmt::While(WhileStmt { cond, body }))
    }
}
