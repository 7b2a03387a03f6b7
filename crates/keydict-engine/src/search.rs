// Core trie search: recursive DFS guided by the per-position alternatives.
//
// One WordSearch is one pass. The primary pass matches supplied
// alternatives at every position; a wildcard pass accepts any edge at one
// designated position. Once all input is consumed the search keeps
// descending to collect completions. Recursion depth is capped by
// MAX_WORD_LENGTH, so a pass always terminates in bounded time.

use keydict_core::InputPosition;
use keydict_core::character::{self, QUOTE};
use keydict_core::limits::MAX_WORD_LENGTH;
use keydict_trie::{DictionaryStore, NodeId};

use crate::sink::ResultSink;

/// Per-pass parameters of the trie search.
#[derive(Clone, Copy)]
pub struct SearchParams<'a> {
    /// The typed input: one ordered alternative set per position.
    pub positions: &'a [InputPosition],
    /// Input position treated as a wildcard, if this is a fallback pass.
    pub skip_pos: Option<usize>,
    /// Weight for matching a position's primary alternative.
    pub typed_letter_multiplier: u64,
    /// Weight applied when a word ends exactly at the end of the input.
    pub full_word_multiplier: u64,
}

/// One search pass over the dictionary trie.
///
/// Borrows the store and the reusable scratch (word buffer, sink,
/// histogram) from the handle; results accumulate in the sink.
pub struct WordSearch<'a> {
    store: &'a DictionaryStore,
    params: SearchParams<'a>,
    word: &'a mut [u16; MAX_WORD_LENGTH],
    sink: &'a mut ResultSink,
    next_letters: Option<&'a mut [u32]>,
}

impl<'a> WordSearch<'a> {
    pub fn new(
        store: &'a DictionaryStore,
        params: SearchParams<'a>,
        word: &'a mut [u16; MAX_WORD_LENGTH],
        sink: &'a mut ResultSink,
        next_letters: Option<&'a mut [u32]>,
    ) -> Self {
        Self {
            store,
            params,
            word,
            sink,
            next_letters,
        }
    }

    /// Runs the pass to completion.
    pub fn run(mut self) {
        self.descend(NodeId::ROOT, 0, 0, 1);
    }

    /// Visits the children of `parent`.
    ///
    /// `depth` is the number of word characters built so far, `input_index`
    /// the number of input positions consumed; they diverge only across a
    /// skipped dictionary apostrophe.
    fn descend(&mut self, parent: NodeId, depth: usize, input_index: usize, snr: u64) {
        if depth >= MAX_WORD_LENGTH {
            return;
        }
        let store = self.store;
        let input_len = self.params.positions.len();

        for child in store.children(parent) {
            let Some(code) = store.code(child) else {
                continue;
            };
            let freq = store.terminal_frequency(child);

            if input_index >= input_len {
                // All input consumed: collect completions.
                self.word[depth] = code;
                if depth == input_len && self.params.skip_pos.is_none() {
                    self.register_next_letter(code);
                }
                if let Some(f) = freq {
                    self.offer(depth, u64::from(f) * snr);
                }
                if store.has_children(child) {
                    self.descend(child, depth + 1, input_index, snr);
                }
            } else if code == QUOTE && self.params.positions[input_index].primary() != Some(QUOTE) {
                // Dictionary apostrophe the user did not type: skip over it
                // without consuming an input position.
                self.word[depth] = code;
                if store.has_children(child) {
                    self.descend(child, depth + 1, input_index, snr);
                }
            } else if self.params.skip_pos == Some(input_index) {
                // Wildcard position: any edge matches, weight 1.
                self.word[depth] = code;
                if input_index + 1 == input_len {
                    if let Some(f) = freq {
                        self.offer(depth, u64::from(f) * snr);
                    }
                }
                if store.has_children(child) {
                    self.descend(child, depth + 1, input_index + 1, snr);
                }
            } else {
                let lower = character::lower_code(code);
                let alternatives = self.params.positions[input_index];
                for (j, &alt) in alternatives.codes().iter().enumerate() {
                    if alt != lower && alt != code {
                        continue;
                    }
                    let weight = if j == 0 {
                        self.params.typed_letter_multiplier
                    } else {
                        1
                    };
                    self.word[depth] = code;
                    if input_index + 1 == input_len {
                        if let Some(f) = freq {
                            // No full-word bonus in a wildcard pass.
                            let bonus = if self.params.skip_pos.is_none() {
                                self.params.full_word_multiplier
                            } else {
                                1
                            };
                            self.offer(depth, u64::from(f) * snr * weight * bonus);
                        }
                    }
                    if store.has_children(child) {
                        self.descend(child, depth + 1, input_index + 1, snr * weight);
                    }
                }
            }
        }
    }

    #[inline]
    fn offer(&mut self, depth: usize, score: u64) {
        self.sink.offer(&self.word[..=depth], score);
    }

    #[inline]
    fn register_next_letter(&mut self, code: u16) {
        if let Some(hist) = self.next_letters.as_deref_mut() {
            if let Some(slot) = hist.get_mut(code as usize) {
                *slot += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keydict_core::limits::{DEFAULT_FULL_WORD_MULTIPLIER, DEFAULT_TYPED_LETTER_MULTIPLIER};
    use keydict_core::suggestion::SuggestedWord;
    use keydict_trie::builder::DictionaryBuilder;

    fn store_with(words: &[(&str, u8)]) -> DictionaryStore {
        let mut builder = DictionaryBuilder::new();
        for (word, freq) in words {
            builder.add(word, *freq);
        }
        DictionaryStore::from_bytes(&builder.build()).unwrap()
    }

    fn positions(typed: &str) -> Vec<InputPosition> {
        typed
            .chars()
            .map(|c| InputPosition::new(c as u16))
            .collect()
    }

    fn run_pass(
        store: &DictionaryStore,
        positions: &[InputPosition],
        skip_pos: Option<usize>,
        next_letters: Option<&mut [u32]>,
    ) -> Vec<SuggestedWord> {
        let mut word = [0u16; MAX_WORD_LENGTH];
        let mut sink = ResultSink::new();
        WordSearch::new(
            store,
            SearchParams {
                positions,
                skip_pos,
                typed_letter_multiplier: DEFAULT_TYPED_LETTER_MULTIPLIER,
                full_word_multiplier: DEFAULT_FULL_WORD_MULTIPLIER,
            },
            &mut word,
            &mut sink,
            next_letters,
        )
        .run();
        sink.emit()
    }

    #[test]
    fn exact_match_scores_full_word() {
        let store = store_with(&[("cat", 100)]);
        let out = run_pass(&store, &positions("cat"), None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "cat");
        // freq 100 * (2^3 typed letters) * 2 full word
        assert_eq!(out[0].score, 100 * 8 * 2);
    }

    #[test]
    fn alternate_key_scores_below_primary() {
        let store = store_with(&[("cat", 100), ("bat", 100)]);
        // Primary 'c' with alternate 'b' at position 0.
        let mut pos = positions("cat");
        pos[0].push(b'b' as u16);
        let out = run_pass(&store, &pos, None, None);
        assert_eq!(out[0].word, "cat");
        assert_eq!(out[1].word, "bat");
        assert!(out[0].score > out[1].score);
    }

    #[test]
    fn completions_extend_past_input() {
        let store = store_with(&[("car", 50), ("cart", 50), ("carton", 50)]);
        let out = run_pass(&store, &positions("car"), None, None);
        let words: Vec<&str> = out.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words[0], "car"); // full-word bonus ranks the exact match first
        assert!(words.contains(&"cart"));
        assert!(words.contains(&"carton"));
    }

    #[test]
    fn wildcard_consumes_the_skipped_position() {
        let store = store_with(&[("cat", 100)]);
        // Position 1 only offers 'x'; the primary pass fails.
        let mut pos = positions("cat");
        pos[1] = InputPosition::new(b'x' as u16);
        assert!(run_pass(&store, &pos, None, None).is_empty());

        let out = run_pass(&store, &pos, Some(1), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "cat");
        // No full-word bonus in a wildcard pass: 100 * 2 ('c') * 1 (wild) * 2 ('t')
        assert_eq!(out[0].score, 400);
    }

    #[test]
    fn apostrophe_in_dictionary_is_skipped() {
        let store = store_with(&[("don't", 90)]);
        let out = run_pass(&store, &positions("dont"), None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "don't");
    }

    #[test]
    fn typed_apostrophe_matches_directly() {
        let store = store_with(&[("don't", 90)]);
        let out = run_pass(&store, &positions("don't"), None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "don't");
    }

    #[test]
    fn capitalized_dictionary_word_matches_lowercase_keys() {
        let store = store_with(&[("Paris", 120)]);
        let out = run_pass(&store, &positions("paris"), None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "Paris");
    }

    #[test]
    fn histogram_counts_explored_continuations() {
        let store = store_with(&[("car", 50), ("cat", 50), ("cab", 5)]);
        let mut hist = vec![0u32; 128];
        let out = run_pass(&store, &positions("ca"), None, Some(&mut hist));
        assert!(!out.is_empty());
        assert_eq!(hist[b'r' as usize], 1);
        assert_eq!(hist[b't' as usize], 1);
        assert_eq!(hist[b'b' as usize], 1);
        assert_eq!(hist[b'z' as usize], 0);
    }

    #[test]
    fn histogram_ignores_codes_beyond_width() {
        let store = store_with(&[("car", 50)]);
        let mut hist = vec![0u32; b'r' as usize]; // too narrow for 'r'
        run_pass(&store, &positions("ca"), None, Some(&mut hist));
        assert!(hist.iter().all(|&n| n == 0));
    }

    #[test]
    fn empty_input_enumerates_top_words() {
        let store = store_with(&[("a", 10), ("be", 200)]);
        let out = run_pass(&store, &[], None, None);
        assert_eq!(out[0].word, "be");
        assert_eq!(out[1].word, "a");
    }

    #[test]
    fn suppressed_frequency_blocks_emission() {
        let store = store_with(&[("damn", 0)]);
        let out = run_pass(&store, &positions("damn"), None, None);
        assert!(out.is_empty());
    }
}
