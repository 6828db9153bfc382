//! Diagnostic reporting for transfer operations.
//!
//! Operations tell the user what they did (or why they refused) through a
//! [`Reporter`]: a callback standing in for the host editor's notification
//! area. Every report is also forwarded to the [`log`] facade.
//!
//! # Example
//!
//! ```
//! use uvtransfer::transfer::{Reporter, Severity};
//!
//! let reporter = Reporter::new(|severity, message| {
//!     if severity == Severity::Warning {
//!         eprintln!("warning: {}", message);
//!     }
//! });
//!
//! reporter.info("3 face(s) are selected");
//! ```

use std::fmt;

/// Severity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress or outcome notice.
    Info,
    /// The operation was refused or stopped early.
    Warning,
}

impl Severity {
    fn level(self) -> log::Level {
        match self {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
        }
    }
}

/// A notification callback that receives user-facing reports.
pub struct Reporter {
    callback: Box<dyn Fn(Severity, &str) + Send + Sync>,
}

impl Reporter {
    /// Create a new reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Severity, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report a message.
    pub fn report(&self, severity: Severity, message: &str) {
        log::log!(target: "uvtransfer", severity.level(), "{}", message);
        (self.callback)(severity, message);
    }

    /// Report an informational message.
    #[inline]
    pub fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    /// Report a warning.
    #[inline]
    pub fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    /// Create a reporter that only logs.
    pub fn none() -> Self {
        Self::new(|_, _| {})
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_reports_reach_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let reporter = Reporter::new(move |severity, message| {
            sink.lock().unwrap().push((severity, message.to_string()));
        });

        reporter.info("copied");
        reporter.warning("nothing selected");

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (Severity::Info, "copied".to_string()),
                (Severity::Warning, "nothing selected".to_string()),
            ]
        );
    }

    #[test]
    fn test_none_discards() {
        Reporter::none().warning("ignored");
        assert_eq!(format!("{:?}", Reporter::default()), "Reporter { .. }");
    }
}
