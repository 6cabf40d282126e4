//! LinkDeck Core Library
//!
//! Local-first link organizer: the link library and its data file, backup
//! import/export, and the QR scan session that feeds new links in.
//!
//! ## Overview
//!
//! Nothing here renders anything. The desktop app and the CLI both own a
//! [`Library`], persist it through [`LibraryStore`], and hand user intents
//! to it. The scanner view drives a [`scanner::ScanSession`] over whatever
//! [`scanner::ScanEngine`] the platform provides.
//!
//! ## Quick Start
//!
//! ```ignore
//! use linkdeck_core::{Library, LibraryStore};
//!
//! let store = LibraryStore::new("~/.local/share/linkdeck");
//! let mut library = store.load()?;
//! library.add_link("https://docs.rs", "Docs", None, None)?;
//! store.save(&library)?;
//! ```

pub mod backup;
pub mod clipboard;
pub mod drag;
pub mod error;
pub mod library;
pub mod logging;
pub mod scanner;
pub mod storage;
pub mod transient;
pub mod types;
pub mod weblink;

// Re-exports
pub use backup::Backup;
pub use clipboard::{Clipboard, CopyFeedback};
pub use drag::DragPayload;
pub use error::{ClipboardError, LinkError, LinkResult, ScanError};
pub use library::Library;
pub use storage::{LibraryStore, Recovered};
pub use transient::{Transient, COPIED_INDICATOR_TTL, SCAN_NOTICE_TTL};
pub use types::*;
pub use weblink::{domain_of, favicon_url, is_probably_url, normalize_url, FaviconState};
