//! The semantic analyzer: declaration collection and use checking.

use crate::symtab::SymbolTable;
use mjc_par::ast::{Block, Cond, Expr, Ident, Program, Stmt};
use mjc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
use mjc_util::Handler;

/// Semantic analyzer for Mini-Java programs.
///
/// Runs two passes over the AST: the first collects every declaration
/// (including those nested inside `if`/`while` bodies; the scope is flat)
/// into the symbol table in source order, diagnosing duplicates; the
/// second checks every identifier use against the finished table.
pub struct Analyzer<'a> {
    table: SymbolTable,
    handler: &'a Handler,
}

impl<'a> Analyzer<'a> {
    /// Creates a new analyzer reporting into `handler`.
    pub fn new(handler: &'a Handler) -> Self {
        Self {
            table: SymbolTable::new(),
            handler,
        }
    }

    /// Analyzes a program and returns its symbol table.
    ///
    /// Diagnostics are collected into the handler; the table is returned
    /// even when errors were found, so callers can inspect it, but the
    /// pipeline must not proceed to code generation while
    /// [`Handler::has_errors`] is true.
    pub fn analyze(mut self, program: &Program) -> SymbolTable {
        self.collect_decls(&program.body);
        self.check_block(&program.body);
        self.table
    }

    /// First pass: collect declarations in source order.
    fn collect_decls(&mut self, block: &Block) {
        for stmt in &block.stmts {
            match stmt {
                Stmt::VarDecl(decl) => {
                    for name in &decl.names {
                        if self.table.declare(&name.name).is_none() {
                            self.duplicate_decl(name);
                        }
                    }
                },
                Stmt::If(if_stmt) => {
                    self.collect_decls(&if_stmt.then_block);
                    if let Some(else_block) = &if_stmt.else_block {
                        self.collect_decls(else_block);
                    }
                },
                Stmt::While(while_stmt) => {
                    self.collect_decls(&while_stmt.body);
                },
                Stmt::Assign(_) | Stmt::Read(_) | Stmt::Print(_) => {},
            }
        }
    }

    /// Second pass: check every identifier use.
    fn check_block(&mut self, block: &Block) {
        for stmt in &block.stmts {
            match stmt {
                Stmt::VarDecl(_) => {},
                Stmt::Assign(assign) => {
                    self.check_ident(&assign.target);
                    self.check_expr(&assign.value);
                },
                Stmt::Read(read) => {
                    self.check_ident(&read.target);
                },
                Stmt::Print(print) => {
                    self.check_expr(&print.value);
                },
                Stmt::If(if_stmt) => {
                    self.check_cond(&if_stmt.cond);
                    self.check_block(&if_stmt.then_block);
                    if let Some(else_block) = &if_stmt.else_block {
                        self.check_block(else_block);
                    }
                },
                Stmt::While(while_stmt) => {
                    self.check_cond(&while_stmt.cond);
                    self.check_block(&while_stmt.body);
                },
            }
        }
    }

    fn check_cond(&mut self, cond: &Cond) {
        self.check_expr(&cond.left);
        self.check_expr(&cond.right);
    }

    fn check_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Num(_) => {},
            Expr::Var(ident) => self.check_ident(ident),
            Expr::Neg(operand) => self.check_expr(operand),
            Expr::Binary { left, right, .. } => {
                self.check_expr(left);
                self.check_expr(right);
            },
        }
    }

    fn check_ident(&mut self, ident: &Ident) {
        if !self.table.contains(&ident.name) {
            DiagnosticBuilder::error(format!("undeclared variable `{}`", ident.name))
                .code(DiagnosticCode::E_SEM_UNDECLARED_VAR)
                .span(ident.span())
                .emit(self.handler);
        }
    }

    fn duplicate_decl(&mut self, ident: &Ident) {
        DiagnosticBuilder::error(format!("duplicate declaration of `{}`", ident.name))
            .code(DiagnosticCode::E_SEM_DUPLICATE_DECL)
            .span(ident.span())
            .note("all variables share one scope; each name may be declared once")
            .emit(self.handler);
    }
}

/// Analyze a program and return its symbol table.
///
/// Convenience entry point wrapping [`Analyzer::analyze`].
pub fn analyze(program: &Program, handler: &Handler) -> SymbolTable {
    Analyzer::new(handler).analyze(program)
}
