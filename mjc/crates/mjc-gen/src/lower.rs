//! AST lowering to stack machine instructions.

use mjc_obj::{Instr, Program};
use mjc_par::ast;
use mjc_sem::SymbolTable;
use rustc_hash::FxHashMap;

use crate::error::{CodeGenError, Result};

/// A symbolic jump target, valid only during emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LabelId(u32);

/// Code generator for one program.
///
/// Appends instructions to a growing buffer. Jumps are emitted with a
/// placeholder operand and recorded in a patch list; [`CodeGen::bind`]
/// fixes a label to the next instruction index, and the final fixup pass
/// rewrites every patched jump.
pub struct CodeGen<'a> {
    table: &'a SymbolTable,
    code: Vec<Instr>,
    labels: FxHashMap<LabelId, usize>,
    patches: Vec<(usize, LabelId)>,
    next_label: u32,
}

impl<'a> CodeGen<'a> {
    /// Creates a generator resolving addresses against `table`.
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            code: Vec::new(),
            labels: FxHashMap::default(),
            patches: Vec::new(),
            next_label: 0,
        }
    }

    /// Lowers a program to object code.
    pub fn generate(mut self, program: &ast::Program) -> Result<Program> {
        self.emit(Instr::Inpp);
        self.emit(Instr::Alme(self.table.len()));
        self.gen_block(&program.body)?;
        self.emit(Instr::Para);
        self.finish()
    }

    fn emit(&mut self, instr: Instr) -> usize {
        let index = self.code.len();
        self.code.push(instr);
        index
    }

    fn new_label(&mut self) -> LabelId {
        let label = LabelId(self.next_label);
        self.next_label += 1;
        label
    }

    /// Binds `label` to the next instruction index.
    fn bind(&mut self, label: LabelId) {
        self.labels.insert(label, self.code.len());
    }

    /// Emits a conditional jump to a label, to be patched later.
    fn emit_jump_false(&mut self, label: LabelId) {
        let index = self.emit(Instr::Dsvf(0));
        self.patches.push((index, label));
    }

    /// Emits an unconditional jump to a label, to be patched later.
    fn emit_jump(&mut self, label: LabelId) {
        let index = self.emit(Instr::Dsvi(0));
        self.patches.push((index, label));
    }

    fn gen_block(&mut self, block: &ast::Block) -> Result<()> {
        for stmt in &block.stmts {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    fn gen_stmt(&mut self, stmt: &ast::Stmt) -> Result<()> {
        match stmt {
            // Declarations reserve addresses but produce no code; the
            // prologue's ALME already covers the whole table.
            ast::Stmt::VarDecl(_) => Ok(()),

            ast::Stmt::Assign(assign) => {
                self.gen_expr(&assign.value)?;
                let address = self.addr(&assign.target)?;
                self.emit(Instr::Armz(address));
                Ok(())
            },

            ast::Stmt::Read(read) => {
                self.emit(Instr::Leit);
                let address = self.addr(&read.target)?;
                self.emit(Instr::Armz(address));
                Ok(())
            },

            ast::Stmt::Print(print) => {
                self.gen_expr(&print.value)?;
                self.emit(Instr::Impr);
                Ok(())
            },

            ast::Stmt::If(if_stmt) => self.gen_if(if_stmt),

            ast::Stmt::While(while_stmt) => self.gen_while(while_stmt),
        }
    }

    /// Lower an if statement.
    ///
    /// With an else branch:
    /// ```text
    ///     <cond>
    ///     DSVF else
    ///     <then>
    ///     DSVI end
    /// else:
    ///     <else>
    /// end:
    /// ```
    /// Without one, `else` and `end` coincide and the `DSVI` is elided.
    fn gen_if(&mut self, if_stmt: &ast::IfStmt) -> Result<()> {
        self.gen_cond(&if_stmt.cond)?;
        let l_else = self.new_label();
        self.emit_jump_false(l_else);
        self.gen_block(&if_stmt.then_block)?;

        match &if_stmt.else_block {
            Some(else_block) => {
                let l_end = self.new_label();
                self.emit_jump(l_end);
                self.bind(l_else);
                self.gen_block(else_block)?;
                self.bind(l_end);
            },
            None => {
                self.bind(l_else);
            },
        }
        Ok(())
    }

    /// Lower a while statement.
    ///
    /// ```text
    /// top:
    ///     <cond>
    ///     DSVF end
    ///     <body>
    ///     DSVI top
    /// end:
    /// ```
    fn gen_while(&mut self, while_stmt: &ast::WhileStmt) -> Result<()> {
        let l_top = self.new_label();
        self.bind(l_top);
        self.gen_cond(&while_stmt.cond)?;
        let l_end = self.new_label();
        self.emit_jump_false(l_end);
        self.gen_block(&while_stmt.body)?;
        self.emit_jump(l_top);
        self.bind(l_end);
        Ok(())
    }

    /// Lower a condition: both operands, then one comparison opcode
    /// leaving 1.0 or 0.0 on the stack.
    fn gen_cond(&mut self, cond: &ast::Cond) -> Result<()> {
        self.gen_expr(&cond.left)?;
        self.gen_expr(&cond.right)?;
        self.emit(match cond.op {
            ast::RelOp::Eq => Instr::Cpig,
            ast::RelOp::Ne => Instr::Cdes,
            ast::RelOp::Gt => Instr::Cpma,
            ast::RelOp::Lt => Instr::Cpme,
            ast::RelOp::Ge => Instr::Cpmai,
            ast::RelOp::Le => Instr::Cpmei,
        });
        Ok(())
    }

    /// Lower an expression post-order, leaving its value on the stack.
    fn gen_expr(&mut self, expr: &ast::Expr) -> Result<()> {
        match expr {
            ast::Expr::Num(value) => {
                self.emit(Instr::Crct(*value));
                Ok(())
            },
            ast::Expr::Var(ident) => {
                let address = self.addr(ident)?;
                self.emit(Instr::Crvl(address));
                Ok(())
            },
            ast::Expr::Neg(operand) => {
                self.gen_expr(operand)?;
                self.emit(Instr::Inve);
                Ok(())
            },
            ast::Expr::Binary { op, left, right } => {
                self.gen_expr(left)?;
                self.gen_expr(right)?;
                self.emit(match op {
                    ast::BinOp::Add => Instr::Soma,
                    ast::BinOp::Sub => Instr::Subt,
                    ast::BinOp::Mul => Instr::Mult,
                    ast::BinOp::Div => Instr::Divi,
                });
                Ok(())
            },
        }
    }

    fn addr(&self, ident: &ast::Ident) -> Result<usize> {
        self.table
            .address(&ident.name)
            .map(|a| a as usize)
            .ok_or_else(|| CodeGenError::UnknownVariable(ident.name.clone()))
    }

    /// Resolve every patched jump to its bound label.
    fn finish(mut self) -> Result<Program> {
        for (index, label) in &self.patches {
            let target = *self
                .labels
                .get(label)
                .ok_or(CodeGenError::UnboundLabel(label.0))?;
            match &mut self.code[*index] {
                Instr::Dsvf(t) | Instr::Dsvi(t) => *t = target,
                _ => return Err(CodeGenError::NotAJump(*index)),
            }
        }
        Ok(Program::new(self.code))
    }
}

/// Lower a program to object code.
///
/// Convenience entry point wrapping [`CodeGen::generate`].
pub fn generate(program: &ast::Program, table: &SymbolTable) -> Result<Program> {
    CodeGen::new(table).generate(program)
}
