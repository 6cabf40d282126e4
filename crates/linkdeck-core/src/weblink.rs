//! Helpers for the text that ends up in a link: the scanned-text URL
//! heuristic, domain extraction, favicon addresses.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Size in pixels requested from the favicon service
pub const FAVICON_SIZE: u32 = 64;

fn scheme_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("static regex"))
}

/// Decide whether decoded QR text should be treated as a navigable URL.
///
/// Loose on purpose: an `http(s)://` scheme followed by non-whitespace
/// anywhere in the text, or any text that contains a `.` and no whitespace.
/// Version strings like `1.2.3` therefore count as URLs.
pub fn is_probably_url(text: &str) -> bool {
    scheme_pattern().is_match(text) || (text.contains('.') && !text.chars().any(char::is_whitespace))
}

/// Add `https://` when the text has no scheme of its own.
pub fn normalize_url(text: &str) -> String {
    let text = text.trim();
    if Url::parse(text).map(|u| u.has_host()).unwrap_or(false) {
        text.to_string()
    } else {
        format!("https://{text}")
    }
}

/// Host part of a URL without a leading `www.`, or the input itself when
/// it does not parse.
pub fn domain_of(url: &str) -> String {
    Url::parse(&normalize_url(url))
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .unwrap_or_else(|| url.trim().to_string())
}

/// Address of the per-domain icon for a link
pub fn favicon_url(url: &str) -> String {
    format!(
        "https://www.google.com/s2/favicons?domain={}&sz={}",
        domain_of(url),
        FAVICON_SIZE
    )
}

/// Favicon load state for one card.
///
/// Once the image fails it stays on the fallback glyph: `src()` returns
/// `None` until a fresh state is built for a new mount or a new URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconState {
    url: String,
    failed: bool,
}

impl FaviconState {
    pub fn new(link_url: &str) -> Self {
        Self {
            url: favicon_url(link_url),
            failed: false,
        }
    }

    /// Image source to request, or None when the fallback glyph is showing
    pub fn src(&self) -> Option<&str> {
        (!self.failed).then_some(self.url.as_str())
    }

    pub fn mark_failed(&mut self) {
        if !self.failed {
            tracing::debug!(url = %self.url, "favicon failed, using fallback");
        }
        self.failed = true;
    }

    pub fn mark_loaded(&mut self) {
        self.failed = false;
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any scheme URL without whitespace classifies as a URL
        #[test]
        fn scheme_urls_classify(rest in "[^\\s]{1,64}", secure in any::<bool>()) {
            let scheme = if secure { "https" } else { "http" };
            let url = format!("{scheme}://{rest}");
            prop_assert!(is_probably_url(&url));
        }

        /// Text with whitespace and no scheme is never a URL
        #[test]
        fn whitespace_without_scheme_rejected(a in "[a-z.]{0,16}", b in "[a-z.]{0,16}") {
            let text = format!("{a} {b}");
            prop_assert!(!is_probably_url(&text));
        }

        /// Dotted text without whitespace always classifies as a URL
        #[test]
        fn dotted_tokens_classify(a in "[a-z0-9-]{0,16}", b in "[a-z0-9/-]{0,16}") {
            let dotted = format!("{a}.{b}");
            prop_assert!(is_probably_url(&dotted));
        }
    }
}
