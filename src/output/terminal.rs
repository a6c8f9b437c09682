//! Terminal output utilities.
//!
//! Renders a report as a labelled table, optionally coloured.

use crate::error::ValidationError;
use crate::models::SubnetReport;
use colored::Colorize;

/// Width of the label column, including the colon.
const LABEL_WIDTH: usize = 14;

/// Format a label and value as one left-aligned table row.
///
/// # Arguments
/// * `label` - The row label, a colon is appended
/// * `value` - The value to print after the label column
/// * `width` - The minimum width of the label column
pub fn format_row<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$}{}", value.to_string())
}

/// Render a report as text, one row per derived value.
pub fn render_report(report: &SubnetReport, color: bool) -> String {
    let mut out = String::new();
    for (label, value) in report.rows() {
        let row = format_row(label, &value, LABEL_WIDTH);
        if color {
            let (label_col, value_col) = row.split_at(LABEL_WIDTH.min(row.len()));
            out.push_str(&format!("{}{}\n", label_col.bold(), value_col.green()));
        } else {
            out.push_str(&row);
            out.push('\n');
        }
    }
    if !report.has_usable_range() {
        let note = "note: no usable host range for /31 and /32";
        if color {
            out.push_str(&format!("{}\n", note.yellow()));
        } else {
            out.push_str(note);
            out.push('\n');
        }
    }
    out
}

/// Render a validation error the way the shell shows it to the user.
pub fn render_error(err: &ValidationError, color: bool) -> String {
    if color {
        format!("{} {err}", "error:".on_red())
    } else {
        format!("error: {err}")
    }
}
