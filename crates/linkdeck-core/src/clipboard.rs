//! Copy-to-clipboard with a self-clearing "copied" indicator.

use crate::error::ClipboardError;
use crate::transient::{Transient, COPIED_INDICATOR_TTL};

/// Write-only access to the system clipboard
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Card-local copy state.
///
/// A failed write leaves the indicator untouched; the failure is only
/// logged.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    copied: Transient<()>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self {
            copied: Transient::new(COPIED_INDICATOR_TTL),
        }
    }
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text`; returns whether the indicator is now showing
    pub fn copy(&mut self, clipboard: &mut impl Clipboard, text: &str) -> bool {
        match clipboard.set_text(text) {
            Ok(()) => {
                self.copied.set(());
                true
            }
            Err(e) => {
                tracing::debug!("clipboard write failed: {}", e);
                false
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_active()
    }

    /// When the indicator should be re-checked, if it is showing
    pub fn deadline(&self) -> Option<tokio::time::Instant> {
        self.copied.deadline()
    }

    pub fn clear_expired(&mut self) -> bool {
        self.copied.clear_expired()
    }
}
