//! mjc-drv - Compiler driver.
//!
//! Orchestrates the compilation pipeline and the VM:
//!
//! ```text
//! source text -> tokens -> AST -> symbol table -> object program -> execution
//!    (lex)      (parse)   (sem)       (gen)           (vm)
//! ```
//!
//! Stages run strictly in order. Lexical, syntactic, and semantic
//! diagnostics are collected in a shared [`Handler`]; the driver checks it
//! after each stage and aborts before code generation when any error was
//! reported, in which case no `.obj` file is written. Runtime faults
//! surface as errors from [`exec_object`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use mjc_obj::Program;
use mjc_util::Handler;

/// Compile source text into an object program.
///
/// Returns `Ok(None)` when the source has errors; the diagnostics are in
/// `handler`. An `Err` is an internal pipeline failure, not a problem with
/// the compiled program.
pub fn compile_source(source: &str, handler: &Handler) -> Result<Option<Program>> {
    info!("lexing");
    let tokens = mjc_lex::tokenize(source, handler);
    if handler.has_errors() {
        return Ok(None);
    }

    info!(tokens = tokens.len(), "parsing");
    let ast = match mjc_par::parse(tokens, handler) {
        Some(ast) => ast,
        None => return Ok(None),
    };

    info!("semantic analysis");
    let table = mjc_sem::analyze(&ast, handler);
    if handler.has_errors() {
        return Ok(None);
    }

    info!(variables = table.len(), "generating code");
    let program = mjc_gen::generate(&ast, &table).context("internal code generation error")?;
    Ok(Some(program))
}

/// Compile a source file and write the object file next to it.
///
/// Returns the path of the written `.obj` file. Diagnostics are printed
/// to stderr and turn into an error; no object file is written in that
/// case.
pub fn compile_file(source_path: &Path) -> Result<PathBuf> {
    let source = fs::read_to_string(source_path)
        .with_context(|| format!("cannot read {}", source_path.display()))?;

    let handler = Handler::new();
    let program = compile_source(&source, &handler)?;
    report_diagnostics(&handler);

    let program = match program {
        Some(program) => program,
        None => bail!(
            "compilation failed with {} error(s)",
            handler.error_count()
        ),
    };

    let object_path = source_path.with_extension("obj");
    fs::write(&object_path, mjc_obj::write_listing(&program))
        .with_context(|| format!("cannot write {}", object_path.display()))?;
    info!(path = %object_path.display(), "wrote object file");

    Ok(object_path)
}

/// Load an object file and execute it against stdin/stdout.
pub fn exec_object(object_path: &Path) -> Result<()> {
    let text = fs::read_to_string(object_path)
        .with_context(|| format!("cannot read {}", object_path.display()))?;
    let program = mjc_obj::parse_listing(&text)
        .with_context(|| format!("malformed object file {}", object_path.display()))?;

    info!(instructions = program.len(), "executing");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut vm = mjc_vm::Vm::new(program);
    vm.run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Print collected diagnostics to stderr, in emission order.
pub fn report_diagnostics(handler: &Handler) {
    for diagnostic in handler.diagnostics() {
        eprintln!("{}", diagnostic);
    }
}
