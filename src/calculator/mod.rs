//! Keypad-driven calculator state.
//!
//! The shell owns a [`Calculator`] and a [`History`](crate::history::History)
//! and feeds key presses in; nothing here touches the UI.

pub mod keypad;
pub mod session;

#[cfg(test)]
mod tests;

pub use keypad::{Key, Operator};
pub use session::Calculator;
