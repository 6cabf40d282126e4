//! Visual theme for LinkDeck.

mod styles;

pub use styles::GLOBAL_STYLES;
