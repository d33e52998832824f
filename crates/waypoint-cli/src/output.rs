//! Terminal formatting shared by the commands.

use colored::Colorize;
use waypoint_core::export::{Notice, NoticeKind};

pub fn success(message: impl AsRef<str>) {
    println!("{} {}", "✓".green().bold(), message.as_ref());
}

pub fn skipped(message: impl AsRef<str>) {
    println!("{} {}", "·".bright_black(), message.as_ref().bright_black());
}

pub fn heading(text: impl AsRef<str>) {
    println!("{}", text.as_ref().bold());
}

pub fn section(text: impl AsRef<str>) {
    println!();
    println!("{}", text.as_ref().cyan().bold());
}

pub fn notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => success(&notice.message),
        NoticeKind::Failure => eprintln!("{} {}", "✗".red().bold(), notice.message.red()),
    }
}

pub fn checkbox(checked: bool) -> String {
    if checked {
        "[x]".green().to_string()
    } else {
        "[ ]".bright_black().to_string()
    }
}

/// Reports whether an edit changed anything.
pub fn outcome(changed: bool, done: impl AsRef<str>, id: &str) {
    if changed {
        success(done);
    } else {
        skipped(format!("No change for '{}'", id));
    }
}
