// BinaryDictionary: top-level integration point for the suggestion engine.
//
// Owns the store, the scoring options and the reusable scratch (word
// buffer and ranked sink). Queries take &mut self because they reuse the
// scratch, which makes the one-query-at-a-time discipline a compile-time
// guarantee rather than a calling convention; callers wanting cross-thread
// sharing put the handle behind a mutex.

use keydict_core::InputPosition;
use keydict_core::limits::{
    DEFAULT_FULL_WORD_MULTIPLIER, DEFAULT_TYPED_LETTER_MULTIPLIER, MAX_INPUT_LENGTH,
    MAX_WORD_LENGTH,
};
use keydict_core::suggestion::SuggestionResult;
use keydict_trie::{DictionaryStore, LoadError};

use crate::QueryError;
use crate::composer;
use crate::proximity::ProximityModel;
use crate::search::{SearchParams, WordSearch};
use crate::sink::ResultSink;
use crate::validity;

/// Primary-pass result counts below this trigger the wildcard fallback.
const SUFFICIENT_SUGGESTIONS: usize = 5;

/// A loaded compact binary dictionary with suggestion and validity queries.
///
/// The handle degrades rather than faults: a failed load leaves it empty,
/// and every query against an empty handle returns no matches.
pub struct BinaryDictionary {
    store: DictionaryStore,
    typed_letter_multiplier: u64,
    full_word_multiplier: u64,
    // Reusable per-instance scratch.
    word: [u16; MAX_WORD_LENGTH],
    sink: ResultSink,
}

impl BinaryDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self {
            store: DictionaryStore::new(),
            typed_letter_multiplier: DEFAULT_TYPED_LETTER_MULTIPLIER,
            full_word_multiplier: DEFAULT_FULL_WORD_MULTIPLIER,
            word: [0; MAX_WORD_LENGTH],
            sink: ResultSink::new(),
        }
    }

    /// Creates a dictionary from a blob.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        let mut dict = Self::new();
        dict.load(data)?;
        Ok(dict)
    }

    /// Loads a blob, replacing any current dictionary. On failure the
    /// handle stays usable in the empty state.
    pub fn load(&mut self, data: &[u8]) -> Result<(), LoadError> {
        self.store.load(data)
    }

    /// Overrides the scoring multipliers (calibration knobs; defaults
    /// favor the primary alternative 2:1 and exact-length words 2:1).
    pub fn set_multipliers(&mut self, typed_letter: u64, full_word: u64) {
        self.typed_letter_multiplier = typed_letter;
        self.full_word_multiplier = full_word;
    }

    /// Byte length of the loaded blob, 0 when empty.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Drops the loaded dictionary. Idempotent; queries afterwards return
    /// no matches.
    pub fn release(&mut self) {
        self.store.release();
    }

    /// Exact-match lookup; see [`validity::is_valid_word`].
    pub fn is_valid_word(&self, word: &str) -> bool {
        validity::is_valid_word(&self.store, word)
    }

    /// Ranked suggestions for the typed input, without a histogram.
    /// Oversized input yields an empty result.
    pub fn suggest(&mut self, positions: &[InputPosition]) -> SuggestionResult {
        self.try_suggest(positions, 0)
            .unwrap_or_else(|_| SuggestionResult::empty())
    }

    /// Like [`suggest`](Self::suggest), also collecting the next-letter
    /// histogram with `width` slots.
    pub fn suggest_with_next_letters(
        &mut self,
        positions: &[InputPosition],
        width: usize,
    ) -> SuggestionResult {
        self.try_suggest(positions, width)
            .unwrap_or_else(|_| SuggestionResult::empty())
    }

    /// Convenience entry point: composes the positions for `typed` with
    /// `model` and suggests.
    pub fn suggest_for(&mut self, typed: &str, model: &impl ProximityModel) -> SuggestionResult {
        let positions = composer::compose(typed, model);
        self.suggest(&positions)
    }

    /// Full suggestion query. `next_letter_width` of 0 disables the
    /// histogram.
    ///
    /// Runs the primary pass; when it yields fewer than 5 emittable words,
    /// wildcard passes merge into the same ranked set one skip position at
    /// a time, stopping at the first position whose merged set is
    /// non-empty. A word found by both passes keeps its higher (primary)
    /// score, so the fallback can only add candidates, never re-rank the
    /// primary ones.
    pub fn try_suggest(
        &mut self,
        positions: &[InputPosition],
        next_letter_width: usize,
    ) -> Result<SuggestionResult, QueryError> {
        if positions.len() > MAX_INPUT_LENGTH {
            return Err(QueryError::InputTooLong(positions.len()));
        }

        let mut next_letters = (next_letter_width > 0).then(|| vec![0u32; next_letter_width]);

        self.sink.clear();
        self.run_pass(positions, None, next_letters.as_deref_mut());
        let mut words = self.sink.emit();

        if words.len() < SUFFICIENT_SUGGESTIONS {
            for skip in 0..positions.len() {
                self.run_pass(positions, Some(skip), None);
                let merged = self.sink.emit();
                if !merged.is_empty() {
                    words = merged;
                    break;
                }
            }
        }

        Ok(SuggestionResult {
            words,
            next_letters,
        })
    }

    fn run_pass(
        &mut self,
        positions: &[InputPosition],
        skip_pos: Option<usize>,
        next_letters: Option<&mut [u32]>,
    ) {
        WordSearch::new(
            &self.store,
            SearchParams {
                positions,
                skip_pos,
                typed_letter_multiplier: self.typed_letter_multiplier,
                full_word_multiplier: self.full_word_multiplier,
            },
            &mut self.word,
            &mut self.sink,
            next_letters,
        )
        .run();
    }
}

impl Default for BinaryDictionary {
    fn default() -> Self {
        Self::new()
    }
}
