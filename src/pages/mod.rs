//! Page components for LinkDeck.

mod home;

pub use home::Home;
