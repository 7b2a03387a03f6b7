//! Binary trie dictionary format and store.
//!
//! This crate loads and traverses the compact binary word-list blob used by
//! the keydict suggestion engine. The blob encodes a character trie with
//! per-word frequency weights; it is produced offline, loaded once, and
//! never mutated.
//!
//! # Architecture
//!
//! - [`format`] -- Binary header parsing and validation
//! - [`node`] -- Zero-copy node entry layout
//! - [`store`] -- [`DictionaryStore`](store::DictionaryStore): blob
//!   ownership and the traversal primitives (child lookup by character
//!   code, terminal frequency, deterministic release)
//! - [`builder`] -- minimal in-memory blob builder (`builder` feature)

pub mod format;
pub mod node;
pub mod store;

#[cfg(feature = "builder")]
pub mod builder;

pub use store::{DictionaryStore, NodeId};

/// Error type for dictionary blob loading.
///
/// Both variants are recoverable: a store that fails to load is left empty
/// and answers every query with "no match" instead of faulting.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Fewer bytes were available than the blob declares.
    #[error("dictionary truncated: declared {declared} bytes, got {actual}")]
    Truncated { declared: usize, actual: usize },

    /// A structural invariant of the blob is violated.
    #[error("dictionary corrupt: {0}")]
    Corrupt(&'static str),
}
