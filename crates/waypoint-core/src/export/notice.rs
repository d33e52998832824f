//! User-facing messages for export actions.

use serde::Serialize;

use super::email::ExportProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A short message shown after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn sent(profile: &ExportProfile, email: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: format!(
                "{} has been sent to {}! Check your inbox.",
                profile.label, email
            ),
        }
    }

    /// Failure text naming the phone fallback.
    pub fn send_failed(profile: &ExportProfile, phone: &str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: format!(
                "Failed to send {}. Please try again or call us at {}.",
                profile.label.to_lowercase(),
                phone
            ),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
