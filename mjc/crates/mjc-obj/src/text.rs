//! Textual object-file writer and loader.
//!
//! The format is line oriented. Each line is one instruction: an integer
//! label, the opcode mnemonic, and at most one operand, separated by
//! whitespace. Labels equal the 1-based line position and are the targets
//! of jumps. Blank lines and lines beginning with `#` are ignored by the
//! loader.

use crate::instr::{Instr, Program};
use thiserror::Error;

/// Error type for object-file loading.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Line does not start with an integer label
    #[error("line {line}: expected an integer label, found '{found}'")]
    BadLabel { line: usize, found: String },

    /// Label present but no mnemonic follows
    #[error("line {line}: missing opcode mnemonic")]
    MissingMnemonic { line: usize },

    /// Mnemonic not in the instruction set
    #[error("line {line}: unknown opcode mnemonic '{mnemonic}'")]
    UnknownMnemonic { line: usize, mnemonic: String },

    /// Instruction requires an operand and none was given
    #[error("line {line}: {mnemonic} requires an operand")]
    MissingOperand { line: usize, mnemonic: &'static str },

    /// Instruction takes no operand but one was given
    #[error("line {line}: {mnemonic} takes no operand")]
    UnexpectedOperand { line: usize, mnemonic: &'static str },

    /// Operand is not a number of the required form
    #[error("line {line}: invalid operand '{operand}' for {mnemonic}")]
    InvalidOperand {
        line: usize,
        mnemonic: &'static str,
        operand: String,
    },

    /// More fields than label, mnemonic, and one operand
    #[error("line {line}: trailing text after instruction")]
    TrailingText { line: usize },

    /// A jump refers to a label outside the program
    #[error("line {line}: jump target {target} does not name an instruction")]
    JumpOutOfRange { line: usize, target: usize },
}

/// Render a real number in the stable textual form used for `CRCT`
/// operands and `IMPR` output.
///
/// Finite integral values print with exactly one decimal (`14.0`), so
/// whole results are visibly real-valued; every other finite value prints
/// via Rust's shortest round-trippable form. The output always parses
/// back to the identical `f64`.
///
/// # Examples
///
/// ```
/// use mjc_obj::format_real;
///
/// assert_eq!(format_real(14.0), "14.0");
/// assert_eq!(format_real(3.5), "3.5");
/// assert_eq!(format_real(-2.0), "-2.0");
/// ```
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Write a program as an object-file listing.
///
/// Lines are numbered from 1 and jump operands are written as 1-based
/// labels.
pub fn write_listing(program: &Program) -> String {
    let mut out = String::new();
    for (index, instr) in program.instrs().iter().enumerate() {
        let label = index + 1;
        match instr {
            Instr::Alme(n) => push_line(&mut out, label, "ALME", Some(n.to_string())),
            Instr::Crct(v) => push_line(&mut out, label, "CRCT", Some(format_real(*v))),
            Instr::Crvl(a) => push_line(&mut out, label, "CRVL", Some(a.to_string())),
            Instr::Armz(a) => push_line(&mut out, label, "ARMZ", Some(a.to_string())),
            Instr::Dsvf(t) => push_line(&mut out, label, "DSVF", Some((t + 1).to_string())),
            Instr::Dsvi(t) => push_line(&mut out, label, "DSVI", Some((t + 1).to_string())),
            other => push_line(&mut out, label, other.mnemonic(), None),
        }
    }
    out
}

fn push_line(out: &mut String, label: usize, mnemonic: &str, operand: Option<String>) {
    out.push_str(&label.to_string());
    out.push(' ');
    out.push_str(mnemonic);
    if let Some(operand) = operand {
        out.push(' ');
        out.push_str(&operand);
    }
    out.push('\n');
}

/// Parse an object-file listing back into a program.
///
/// Blank lines and `#` comment lines are skipped. Jump targets are
/// converted from 1-based labels to instruction indices and validated
/// against the program length.
pub fn parse_listing(text: &str) -> Result<Program, ObjError> {
    let mut instrs = Vec::new();
    // Remember each jump's source line for range errors after the full
    // program length is known.
    let mut jump_lines = Vec::new();

    for (line_index, raw) in text.lines().enumerate() {
        let line = line_index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let label = fields.next().expect("non-blank line has a first field");
        if label.parse::<usize>().is_err() {
            return Err(ObjError::BadLabel {
                line,
                found: label.to_string(),
            });
        }

        let mnemonic = fields
            .next()
            .ok_or(ObjError::MissingMnemonic { line })?;
        let operand = fields.next();
        if fields.next().is_some() {
            return Err(ObjError::TrailingText { line });
        }

        let instr = decode(line, mnemonic, operand)?;
        if instr.jump_target().is_some() {
            jump_lines.push((instrs.len(), line));
        }
        instrs.push(instr);
    }

    let program = Program::new(instrs);
    if let Err(bad) = program.check_jumps() {
        let line = jump_lines
            .iter()
            .find(|(index, _)| *index == bad.index)
            .map(|(_, line)| *line)
            .unwrap_or(0);
        return Err(ObjError::JumpOutOfRange {
            line,
            target: bad.target + 1,
        });
    }

    Ok(program)
}

/// Decode one mnemonic and optional operand into an instruction.
fn decode(line: usize, mnemonic: &str, operand: Option<&str>) -> Result<Instr, ObjError> {
    match mnemonic {
        "INPP" => no_operand(line, "INPP", operand, Instr::Inpp),
        "ALME" => Ok(Instr::Alme(int_operand(line, "ALME", operand)?)),
        "CRCT" => Ok(Instr::Crct(real_operand(line, "CRCT", operand)?)),
        "CRVL" => Ok(Instr::Crvl(int_operand(line, "CRVL", operand)?)),
        "ARMZ" => Ok(Instr::Armz(int_operand(line, "ARMZ", operand)?)),
        "LEIT" => no_operand(line, "LEIT", operand, Instr::Leit),
        "IMPR" => no_operand(line, "IMPR", operand, Instr::Impr),
        "SOMA" => no_operand(line, "SOMA", operand, Instr::Soma),
        "SUBT" => no_operand(line, "SUBT", operand, Instr::Subt),
        "MULT" => no_operand(line, "MULT", operand, Instr::Mult),
        "DIVI" => no_operand(line, "DIVI", operand, Instr::Divi),
        "INVE" => no_operand(line, "INVE", operand, Instr::Inve),
        "CPIG" => no_operand(line, "CPIG", operand, Instr::Cpig),
        "CDES" => no_operand(line, "CDES", operand, Instr::Cdes),
        "CPMA" => no_operand(line, "CPMA", operand, Instr::Cpma),
        "CPME" => no_operand(line, "CPME", operand, Instr::Cpme),
        "CPMAI" => no_operand(line, "CPMAI", operand, Instr::Cpmai),
        "CPMEI" => no_operand(line, "CPMEI", operand, Instr::Cpmei),
        "DSVF" => Ok(Instr::Dsvf(label_operand(line, "DSVF", operand)?)),
        "DSVI" => Ok(Instr::Dsvi(label_operand(line, "DSVI", operand)?)),
        "PARA" => no_operand(line, "PARA", operand, Instr::Para),
        other => Err(ObjError::UnknownMnemonic {
            line,
            mnemonic: other.to_string(),
        }),
    }
}

fn no_operand(
    line: usize,
    mnemonic: &'static str,
    operand: Option<&str>,
    instr: Instr,
) -> Result<Instr, ObjError> {
    match operand {
        None => Ok(instr),
        Some(_) => Err(ObjError::UnexpectedOperand { line, mnemonic }),
    }
}

fn int_operand(
    line: usize,
    mnemonic: &'static str,
    operand: Option<&str>,
) -> Result<usize, ObjError> {
    let text = operand.ok_or(ObjError::MissingOperand { line, mnemonic })?;
    text.parse().map_err(|_| ObjError::InvalidOperand {
        line,
        mnemonic,
        operand: text.to_string(),
    })
}

fn real_operand(
    line: usize,
    mnemonic: &'static str,
    operand: Option<&str>,
) -> Result<f64, ObjError> {
    let text = operand.ok_or(ObjError::MissingOperand { line, mnemonic })?;
    text.parse().map_err(|_| ObjError::InvalidOperand {
        line,
        mnemonic,
        operand: text.to_string(),
    })
}

/// Parse a 1-based jump label into a 0-based instruction index.
fn label_operand(
    line: usize,
    mnemonic: &'static str,
    operand: Option<&str>,
) -> Result<usize, ObjError> {
    let value = int_operand(line, mnemonic, operand)?;
    if value == 0 {
        return Err(ObjError::JumpOutOfRange {
            line,
            target: value,
        });
    }
    Ok(value - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_program() -> Program {
        Program::new(vec![
            Instr::Inpp,
            Instr::Alme(1),
            Instr::Crct(3.0),
            Instr::Armz(0),
            Instr::Crvl(0),
            Instr::Crct(0.0),
            Instr::Cpma,
            Instr::Dsvf(10),
            Instr::Crvl(0),
            Instr::Impr,
            Instr::Para,
        ])
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(14.0), "14.0");
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(-2.0), "-2.0");
        assert_eq!(format_real(3.5), "3.5");
        assert_eq!(format_real(0.25), "0.25");
        assert_eq!(format_real(1234567.0), "1234567.0");
    }

    #[test]
    fn test_format_real_round_trips() {
        for v in [14.0, 3.5, 0.1, -7.25, 1e-9, 123456.789] {
            let text = format_real(v);
            assert_eq!(text.parse::<f64>().unwrap(), v, "via {:?}", text);
        }
    }

    #[test]
    fn test_listing_lines_are_numbered_from_one() {
        let listing = write_listing(&sample_program());
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines[0], "1 INPP");
        assert_eq!(lines[1], "2 ALME 1");
        assert_eq!(lines[2], "3 CRCT 3.0");
        assert_eq!(lines[10], "11 PARA");
    }

    #[test]
    fn test_jump_operands_are_one_based_labels() {
        let listing = write_listing(&sample_program());
        // The in-memory DSVF target 10 points at PARA, line 11.
        assert_eq!(listing.lines().nth(7).unwrap(), "8 DSVF 11");
    }

    #[test]
    fn test_listing_round_trip() {
        let program = sample_program();
        let reloaded = parse_listing(&write_listing(&program)).unwrap();
        assert_eq!(program, reloaded);
    }

    #[test]
    fn test_loader_skips_blank_and_comment_lines() {
        let text = "# generated\n\n1 INPP\n\n# body\n2 ALME 0\n3 PARA\n";
        let program = parse_listing(text).unwrap();
        assert_eq!(
            program.instrs(),
            &[Instr::Inpp, Instr::Alme(0), Instr::Para]
        );
    }

    #[test]
    fn test_loader_rejects_unknown_mnemonic() {
        let err = parse_listing("1 NOPE\n").unwrap_err();
        assert!(matches!(err, ObjError::UnknownMnemonic { line: 1, .. }));
    }

    #[test]
    fn test_loader_rejects_missing_label() {
        let err = parse_listing("INPP\n").unwrap_err();
        assert!(matches!(err, ObjError::BadLabel { line: 1, .. }));
    }

    #[test]
    fn test_loader_rejects_missing_operand() {
        let err = parse_listing("1 CRCT\n").unwrap_err();
        assert!(matches!(
            err,
            ObjError::MissingOperand {
                line: 1,
                mnemonic: "CRCT"
            }
        ));
    }

    #[test]
    fn test_loader_rejects_stray_operand() {
        let err = parse_listing("1 PARA 3\n").unwrap_err();
        assert!(matches!(
            err,
            ObjError::UnexpectedOperand {
                line: 1,
                mnemonic: "PARA"
            }
        ));
    }

    #[test]
    fn test_loader_rejects_bad_operand() {
        let err = parse_listing("1 ALME oito\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidOperand { line: 1, .. }));
    }

    #[test]
    fn test_loader_rejects_out_of_range_jump() {
        let err = parse_listing("1 INPP\n2 DSVI 9\n3 PARA\n").unwrap_err();
        match err {
            ObjError::JumpOutOfRange { line, target } => {
                assert_eq!(line, 2);
                assert_eq!(target, 9);
            },
            other => panic!("expected JumpOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_loader_rejects_zero_jump_label() {
        let err = parse_listing("1 DSVI 0\n2 PARA\n").unwrap_err();
        assert!(matches!(err, ObjError::JumpOutOfRange { line: 1, .. }));
    }

    #[test]
    fn test_loader_accepts_real_operand_forms() {
        let program = parse_listing("1 CRCT 2\n2 CRCT 2.5\n3 PARA\n").unwrap();
        assert_eq!(
            program.instrs(),
            &[Instr::Crct(2.0), Instr::Crct(2.5), Instr::Para]
        );
    }
}
