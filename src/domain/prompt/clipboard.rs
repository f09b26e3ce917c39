//! "Copied!" confirmation for clipboard export.

use chrono::Duration;

use crate::domain::foundation::Timestamp;

/// How long the confirmation stays visible.
pub const COPY_CONFIRMATION_MILLIS: i64 = 2_000;

/// Tracks the last copy so the export button can show its confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyConfirmation {
    copied_at: Option<Timestamp>,
}

impl CopyConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a copy at `at`. A later copy restarts the window.
    pub fn record_copy(&mut self, at: Timestamp) {
        self.copied_at = Some(at);
    }

    /// True while `now` is inside the window that starts at the last copy.
    pub fn is_showing(&self, now: Timestamp) -> bool {
        match self.copied_at {
            Some(copied_at) => {
                let elapsed = now.duration_since(&copied_at);
                elapsed >= Duration::zero()
                    && elapsed < Duration::milliseconds(COPY_CONFIRMATION_MILLIS)
            }
            None => false,
        }
    }

    /// Button caption at `now`.
    pub fn label(&self, now: Timestamp) -> &'static str {
        if self.is_showing(now) {
            "Copied!"
        } else {
            "Copy to Clipboard"
        }
    }
}
