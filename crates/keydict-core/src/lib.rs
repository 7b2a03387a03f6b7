//! Shared leaf types for the keydict compact-dictionary engine.
//!
//! This crate holds the types that cross crate boundaries: the fixed size
//! limits of the engine, BMP character-code helpers, the per-keystroke
//! [`InputPosition`] alternative set, and the [`SuggestionResult`] returned
//! to callers. It carries no dependencies so that the format and engine
//! crates can share it freely.

pub mod character;
pub mod input;
pub mod limits;
pub mod suggestion;

pub use input::InputPosition;
pub use suggestion::{SuggestedWord, SuggestionResult};
