//! mjc-sem - Semantic analysis for Mini-Java.
//!
//! The language has a single type (`double`) and a single flat scope, so
//! semantic analysis reduces to identifier resolution: build the symbol
//! table from the declarations (in source order, diagnosing duplicates),
//! then verify that every identifier used as an assignment target, read
//! target, or expression operand is declared.
//!
//! Semantic diagnostics are non-fatal: the analyzer visits the whole tree
//! and collects every problem into the shared handler, so one run reports
//! all undeclared uses and duplicate declarations together. The driver
//! aborts before code generation when the handler holds any error.
//!
//! # Examples
//!
//! ```
//! use mjc_lex::tokenize;
//! use mjc_par::parse;
//! use mjc_sem::analyze;
//! use mjc_util::Handler;
//!
//! let source = "public class P { public static void main(String[] args) {
//!     double a, b; a = 1; b = a + 2;
//! } }";
//! let handler = Handler::new();
//! let tokens = tokenize(source, &handler);
//! let program = parse(tokens, &handler).unwrap();
//! let table = analyze(&program, &handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(table.address("a"), Some(0));
//! assert_eq!(table.address("b"), Some(1));
//! ```

mod analysis;
mod symtab;

pub use analysis::{analyze, Analyzer};
pub use symtab::SymbolTable;
