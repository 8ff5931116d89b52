//! User-facing notification sink.
//!
//! The engine describes what happened; the sink decides how to surface it.
//! Failures to display are never propagated - notifications are best-effort.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// One operator-facing event: a parcel moved, a migration ran, an import
/// committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }
}

/// Injected notification sink.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Prints notifications to the terminal, colored by severity.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        let title = match notification.severity {
            Severity::Info => notification.title.bold().blue(),
            Severity::Success => notification.title.bold().green(),
            Severity::Warning => notification.title.bold().yellow(),
        };
        println!("{title} — {}", notification.description);
    }
}
