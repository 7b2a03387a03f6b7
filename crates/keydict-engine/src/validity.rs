// Exact-match word lookup.

use keydict_core::character;
use keydict_trie::{DictionaryStore, NodeId};

/// Walks the store edge-by-edge for the literal character sequence.
///
/// Returns `true` only when the final node ends a word. Presence counts
/// even at frequency 0: a suppressed word is still a valid word, it is
/// only excluded from suggestion emission. Empty input (or input with no
/// representable codes) returns `false` without touching the store.
pub fn is_valid_word(store: &DictionaryStore, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut node = NodeId::ROOT;
    for c in word.chars() {
        let Some(code) = character::code_of(c) else {
            return false;
        };
        match store.child(node, code) {
            Some(next) => node = next,
            None => return false,
        }
    }
    store.terminal_frequency(node).is_some()
}
