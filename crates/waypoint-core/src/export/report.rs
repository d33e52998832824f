//! Plain-text report rendering and report files.

use chrono::{DateTime, Utc};
use minijinja::Environment;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::ContactInfo;
use crate::error::Result;
use crate::item::{ItemList, LineItem};

static ENVIRONMENT: OnceCell<Environment<'static>> = OnceCell::new();

const TEMPLATES: &[(&str, &str)] = &[
    ("budget_report.txt", include_str!("templates/budget_report.txt")),
    ("budget_email.txt", include_str!("templates/budget_email.txt")),
    ("packing_report.txt", include_str!("templates/packing_report.txt")),
    ("packing_email.txt", include_str!("templates/packing_email.txt")),
    ("itinerary_report.txt", include_str!("templates/itinerary_report.txt")),
    ("itinerary_email.txt", include_str!("templates/itinerary_email.txt")),
    ("print.txt", include_str!("templates/print.txt")),
];

fn build_environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("usd", format_usd);
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Renders one of the bundled text templates.
pub fn render(template: &str, context: impl Serialize) -> Result<String> {
    let env = ENVIRONMENT.get_or_try_init(build_environment)?;
    let rendered = env.get_template(template)?.render(context)?;
    Ok(rendered)
}

/// Formats a dollar amount the way reports show it: `$5,000`, `$89.50`,
/// `-$120`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if cents % 100 != 0 {
        grouped.push_str(&format!(".{:02}", cents % 100));
    }

    if amount < 0.0 && cents > 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Details shared by every rendered report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    pub generated_at: DateTime<Utc>,
    pub contact: ContactInfo,
}

impl ReportContext {
    pub fn new(generated_at: DateTime<Utc>, contact: ContactInfo) -> Self {
        Self {
            generated_at,
            contact,
        }
    }

    /// Date line printed under the report title, e.g. `3/7/2026`.
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%-m/%-d/%Y").to_string()
    }
}

/// One titled block of pre-formatted lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGroup {
    pub title: String,
    pub lines: Vec<String>,
}

/// Groups a list by category and formats each row as one line.
pub fn line_groups<D>(
    items: &ItemList<D>,
    title: impl Fn(&str) -> String,
    line: impl Fn(&LineItem<D>) -> String,
) -> Vec<LineGroup> {
    items
        .group_by_category()
        .into_iter()
        .map(|group| LineGroup {
            title: title(group.name),
            lines: group.items.into_iter().map(&line).collect(),
        })
        .collect()
}

/// Checkbox glyph used in downloaded reports.
pub fn report_glyph(checked: bool) -> &'static str {
    if checked { "☑" } else { "☐" }
}

/// A rendered report ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub file_name: String,
    pub contents: String,
}

impl ReportFile {
    /// Names the file `<prefix>-<epoch-millis>.txt`.
    pub fn new(prefix: &str, created_at: DateTime<Utc>, contents: String) -> Self {
        Self::with_extension(prefix, "txt", created_at, contents)
    }

    pub fn with_extension(
        prefix: &str,
        extension: &str,
        created_at: DateTime<Utc>,
        contents: String,
    ) -> Self {
        Self {
            file_name: format!(
                "{}-{}.{}",
                prefix,
                created_at.timestamp_millis(),
                extension
            ),
            contents,
        }
    }

    /// Writes the report into `dir`, creating the directory if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        tracing::info!("Wrote report to {}", path.display());
        Ok(path)
    }
}
