//! Desktop integrations: system clipboard and the external browser.

use linkdeck_core::{normalize_url, Clipboard, ClipboardError};

/// System clipboard via arboard
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Open `url` in the user's default browser.
///
/// The page lands in a separate process with no handle back to this
/// window and no referrer.
pub fn open_in_browser(url: &str) {
    let target = normalize_url(url);
    if let Err(e) = open::that_detached(&target) {
        tracing::warn!("Failed to open {}: {}", target, e);
    }
}
