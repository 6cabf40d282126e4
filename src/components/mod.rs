//! UI Components for LinkDeck.

mod data_manager;
mod group_section;
mod link_card;
mod link_editor;
mod qr_code_display;
mod qr_scanner;
mod settings_modal;

pub use group_section::GroupSection;
pub use link_editor::{LinkDraft, LinkEditor};
pub use qr_code_display::QrCodeDisplay;
pub use qr_scanner::QrScanner;
pub use settings_modal::SettingsModal;
