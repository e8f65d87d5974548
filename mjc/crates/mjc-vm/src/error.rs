//! Runtime fault types.
//!
//! A fault is any abnormal halt of the VM, distinguishable from normal
//! `PARA` termination. Every fault reports the program counter of the
//! offending instruction.

use thiserror::Error;

/// Abnormal VM halt at a specific instruction.
#[derive(Debug, Error)]
#[error("fault at pc {pc}: {kind}")]
pub struct Fault {
    /// Index of the instruction that faulted.
    pub pc: usize,
    /// What went wrong.
    pub kind: FaultKind,
}

/// The kinds of runtime fault.
#[derive(Debug, Error)]
pub enum FaultKind {
    /// An operator needed more operands than the stack held
    #[error("stack underflow")]
    StackUnderflow,

    /// A memory access outside the allocated area
    #[error("memory address {0} is out of range")]
    MemoryOutOfRange(usize),

    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// A jump to an index with no instruction
    #[error("jump target {0} is out of range")]
    JumpOutOfRange(usize),

    /// LEIT with no input line left
    #[error("read past end of input")]
    InputExhausted,

    /// LEIT line that does not parse as a number
    #[error("input '{0}' is not a number")]
    MalformedInput(String),

    /// Execution ran past the last instruction without PARA
    #[error("program ran off the end without PARA")]
    PcOutOfRange,

    /// The input or output handle failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display_includes_pc_and_kind() {
        let fault = Fault {
            pc: 7,
            kind: FaultKind::DivisionByZero,
        };
        assert_eq!(format!("{}", fault), "fault at pc 7: division by zero");
    }

    #[test]
    fn test_malformed_input_display() {
        let fault = Fault {
            pc: 3,
            kind: FaultKind::MalformedInput("abc".into()),
        };
        assert!(format!("{}", fault).contains("'abc'"));
    }
}
