//! Case replay: each input line holds `lhs <TAB> op <TAB> rhs <TAB> expected`;
//! the harness recomputes `lhs op rhs` and writes a mismatch block for every
//! case whose result differs from the recorded expectation.

use std::io::{BufRead, Write};

use big_int::{BigInt, ParseBigIntError};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Why a replay aborted early.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: operand `{operand}` does not parse: {source}")]
    BadOperand {
        line: usize,
        operand: String,
        source: ParseBigIntError,
    },
}

/// Case counts from one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub passed: u32,
    pub failed: u32,
}

/// Applies one operator; `None` when the operator is not recognized.
pub fn apply_op(op: &str, lhs: &BigInt, rhs: &BigInt) -> Option<BigInt> {
    match op {
        "+" => Some(lhs + rhs),
        "-" => Some(lhs - rhs),
        "*" => Some(lhs * rhs),
        "/" => Some(lhs / rhs),
        "%" => Some(lhs % rhs),
        _ => None,
    }
}

/// Replays every case from `input`, writing mismatch blocks to `out`.
///
/// Reading stops quietly at the first line without exactly four fields, so a
/// case file may end with a trailer. Lines with an unrecognized operator are
/// skipped and counted in neither total; an operand that does not parse
/// aborts the replay.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Report, HarnessError> {
    let mut report = Report::default();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            debug!(line = number, fields = fields.len(), "stopping at short line");
            break;
        }
        trace!(line = number, "replaying case");
        let lhs = parse_operand(fields[0], number)?;
        let rhs = parse_operand(fields[2], number)?;
        let op = fields[1];
        let Some(result) = apply_op(op, &lhs, &rhs) else {
            warn!(line = number, op, "unknown operator, skipping");
            continue;
        };
        let got = result.to_string();
        if got == fields[3] {
            report.passed += 1;
        } else {
            report.failed += 1;
            // operands are echoed re-serialized, so separators and leading
            // zeros from the input do not reach the report
            writeln!(out, "TEST:")?;
            writeln!(out, "{} {} {}", lhs, op, rhs)?;
            writeln!(out, "= {}", got)?;
            writeln!(out, "# {}", fields[3])?;
            writeln!(out, "FAIL!")?;
            writeln!(out)?;
        }
    }
    Ok(report)
}

fn parse_operand(text: &str, line: usize) -> Result<BigInt, HarnessError> {
    text.parse().map_err(|source| HarnessError::BadOperand {
        line,
        operand: text.to_string(),
        source,
    })
}

#[cfg(test)]
fn run_lines(text: &str) -> (Report, String) {
    let mut out = Vec::new();
    let report = run(std::io::Cursor::new(text), &mut out).expect("replay runs");
    (report, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn test_run_counts_passes() {
    let (report, out) = run_lines("1\t+\t2\t3\n-7\t/\t2\t-4\n-7\t%\t2\t1\n");
    assert_eq!(report, Report { passed: 3, failed: 0 });
    assert!(out.is_empty());
}

#[test]
fn test_run_reports_mismatch() {
    let (report, out) = run_lines("2\t*\t2\t5\n");
    assert_eq!(report, Report { passed: 0, failed: 1 });
    assert_eq!(out, "TEST:\n2 * 2\n= 4\n# 5\nFAIL!\n\n");
}

#[test]
fn test_run_echoes_canonical_operands() {
    let (report, out) = run_lines("+2,000\t*\t2\t5\n");
    assert_eq!(report, Report { passed: 0, failed: 1 });
    assert_eq!(out, "TEST:\n2000 * 2\n= 4000\n# 5\nFAIL!\n\n");
}

#[test]
fn test_run_stops_at_short_line() {
    // nothing after the stop line is replayed
    let (report, _) = run_lines("1\t+\t1\t2\nEOF\n9\t+\t9\t18\n");
    assert_eq!(report, Report { passed: 1, failed: 0 });
}

#[test]
fn test_run_skips_unknown_operator() {
    let (report, _) = run_lines("1\t^\t1\t1\n1\t-\t1\t0\n");
    assert_eq!(report, Report { passed: 1, failed: 0 });
}

#[test]
fn test_run_checks_division_by_zero() {
    let (report, _) = run_lines("1\t/\t0\tNaN\n5\t%\t0\tNaN\n");
    assert_eq!(report, Report { passed: 2, failed: 0 });
}

#[test]
fn test_run_rejects_bad_operand() {
    let err = run(std::io::Cursor::new("x\t+\t1\t1\n"), &mut Vec::new()).unwrap_err();
    match err {
        HarnessError::BadOperand { line, operand, .. } => {
            assert_eq!(line, 1);
            assert_eq!(operand, "x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
