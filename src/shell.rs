//! Line oriented front end.
//!
//! Each input line is one request, `a.b.c.d p` or `a.b.c.d/p`. A rejected line is
//! reported and the next one is read.

use crate::config::{Config, OutputFormat};
use crate::error::ValidationError;
use crate::models::SubnetReport;
use crate::output::{render_error, render_json, render_report};
use crate::processing::{calculate, calculate_cidr};
use std::error::Error;
use std::io::{BufRead, Write};

/// What a single input line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// Blank line or `#` comment.
    Skip,
    Clear,
    Quit,
    Calculate(Result<SubnetReport, ValidationError>),
}

/// Interpret one input line.
pub fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }
    match line {
        "clear" => return Line::Clear,
        "quit" | "exit" => return Line::Quit,
        _ => {}
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [cidr] => Line::Calculate(calculate_cidr(cidr)),
        [address, prefix] => Line::Calculate(calculate(address, prefix)),
        _ => Line::Calculate(Err(ValidationError::malformed_address(line))),
    }
}

/// Totals for one run, used for the exit code.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub failed: usize,
}

/// Write the outcome of one request to `out`. Returns `false` when it was rejected.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<SubnetReport, ValidationError>,
    config: &Config,
) -> Result<bool, Box<dyn Error>> {
    match outcome {
        Ok(report) => {
            match config.output {
                OutputFormat::Text => write!(out, "{}", render_report(report, config.color))?,
                OutputFormat::Json => writeln!(out, "{}", render_json(report)?)?,
            }
            Ok(true)
        }
        Err(e) => {
            log::info!("Rejected input: {e}");
            writeln!(out, "{}", render_error(e, config.color))?;
            Ok(false)
        }
    }
}

/// Process `input` line by line until it ends or a `quit` line is read.
pub fn run_lines<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &Config,
) -> Result<Summary, Box<dyn Error>> {
    log::info!("#Start run_lines()");
    let mut summary = Summary::default();

    for bytes in input.split(b'\n') {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                let text = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                log::debug!("Line is not UTF-8: {text:?}");
                let outcome = Err(ValidationError::malformed_address(&text));
                write_outcome(out, &outcome, config)?;
                summary.failed += 1;
                continue;
            }
        };
        match parse_line(&line) {
            Line::Skip => {}
            Line::Clear => writeln!(out, "{}", "-".repeat(40))?,
            Line::Quit => break,
            Line::Calculate(outcome) => {
                if write_outcome(out, &outcome, config)? {
                    summary.ok += 1;
                } else {
                    summary.failed += 1;
                }
            }
        }
    }

    log::info!(
        "# End run_lines() ok={} failed={}",
        summary.ok,
        summary.failed
    );
    Ok(summary)
}
