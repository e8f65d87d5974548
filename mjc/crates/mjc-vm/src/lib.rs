//! mjc-vm - The stack virtual machine.
//!
//! Interprets an object [`Program`](mjc_obj::Program) against a value
//! stack and an indexed memory. All arithmetic is double precision;
//! comparison opcodes push exactly `1.0` or `0.0`. Execution ends
//! normally at `PARA`; every other halt is a [`Fault`] carrying the
//! offending program counter.
//!
//! Console I/O is injected: `LEIT` pulls lines from any [`std::io::BufRead`]
//! and `IMPR` writes to any [`std::io::Write`], so programs run the same
//! against a terminal or a test buffer. Given identical object code and
//! identical input, the VM produces identical output.
//!
//! # Examples
//!
//! ```
//! use mjc_obj::{Instr, Program};
//! use mjc_vm::Vm;
//!
//! let program = Program::new(vec![
//!     Instr::Inpp,
//!     Instr::Alme(0),
//!     Instr::Crct(2.0),
//!     Instr::Crct(3.0),
//!     Instr::Soma,
//!     Instr::Impr,
//!     Instr::Para,
//! ]);
//!
//! let mut output = Vec::new();
//! Vm::new(program).run(std::io::empty(), &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "5.0\n");
//! ```

mod error;
mod machine;

pub use error::{Fault, FaultKind};
pub use machine::Vm;
