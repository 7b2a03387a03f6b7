//! Suggestion engine for the keydict compact binary dictionary.
//!
//! Given the noisy keystroke sequence of a word being typed -- one bounded
//! set of plausible character codes per position -- the engine walks the
//! dictionary trie, scores every reachable word by match quality and stored
//! frequency, and returns a small ranked candidate list. A secondary pass
//! that wildcards one position at a time recovers words where a single
//! keystroke matched none of its alternatives.
//!
//! # Architecture
//!
//! - [`proximity`] -- keystroke to nearby-key alternative mapping
//! - [`composer`] -- convenience construction of per-position alternatives
//! - [`sink`] -- fixed-capacity ranked result buffer
//! - [`search`] -- the recursive trie search (primary and wildcard passes)
//! - [`validity`] -- exact-match word lookup
//! - [`handle`] -- [`BinaryDictionary`](handle::BinaryDictionary), the
//!   top-level integration point owning store, scratch buffers and options

pub mod composer;
pub mod handle;
pub mod proximity;
pub mod search;
pub mod sink;
pub mod validity;

pub use handle::BinaryDictionary;
pub use proximity::{KeyProximityModel, ProximityModel};

use keydict_core::limits::MAX_INPUT_LENGTH;

/// Error type for malformed queries.
///
/// Oversized input is not a fault: the plain `suggest` entry point maps it
/// to an empty result, while `try_suggest` surfaces it to callers that want
/// the distinction.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// More input positions than the engine's word-length cap allows.
    #[error("input of {0} positions exceeds the maximum of {MAX_INPUT_LENGTH}")]
    InputTooLong(usize),
}
