//! Export domain module.
//!
//! Turns a plan into something that leaves the program: a downloaded text
//! report, a print sheet, or an email summary posted to a webhook.
//!
//! # Module Structure
//!
//! - `report`: template rendering, money formatting, `ReportFile`
//! - `email`: `PlanEmail`, `PlanMailer`, address validation
//! - `notice`: success and failure messages

mod email;
mod notice;
mod report;

pub use email::{ExportProfile, PlanEmail, PlanMailer, validate_email};
pub use notice::{Notice, NoticeKind};
pub use report::{
    LineGroup, ReportContext, ReportFile, format_usd, line_groups, render, report_glyph,
};

/// Checkbox glyph used on print sheets.
pub fn print_glyph(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
