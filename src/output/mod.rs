//! Output formatting for subnet reports.
//!
//! - `terminal` - text table with colours
//! - `json` - JSON output

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{format_row, render_error, render_report};
