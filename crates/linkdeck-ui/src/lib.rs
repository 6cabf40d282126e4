//! LinkDeck UI primitives
//!
//! Small Dioxus building blocks shared by the desktop app: buttons and the
//! modal shell. Styling lives in the app's global stylesheet; these
//! components only pick class names.

pub mod components;

pub use components::*;
