// Fixed-capacity ranked result buffer.
//
// Holds up to MAX_WORDS (word, score) pairs in descending score order in
// flat preallocated arrays. The buffer lives inside the dictionary handle
// and is reused across queries, so a query allocates only for the final
// emitted strings.

use keydict_core::character;
use keydict_core::limits::{MAX_WORD_LENGTH, MAX_WORDS};
use keydict_core::suggestion::SuggestedWord;

/// Bounded max-retaining collector of candidate words.
///
/// A candidate is kept only if the buffer has free capacity or its score
/// beats the current lowest-ranked entry. Ties are stable: at equal score
/// the earlier-offered candidate ranks higher. Each distinct word appears
/// at most once; re-offering a word keeps the higher score.
pub struct ResultSink {
    words: [[u16; MAX_WORD_LENGTH]; MAX_WORDS],
    lens: [u8; MAX_WORDS],
    scores: [u64; MAX_WORDS],
    count: usize,
}

impl ResultSink {
    pub fn new() -> Self {
        Self {
            words: [[0; MAX_WORD_LENGTH]; MAX_WORDS],
            lens: [0; MAX_WORDS],
            scores: [0; MAX_WORDS],
            count: 0,
        }
    }

    /// Empties the buffer for the next pass.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Offers a candidate; returns `true` if it was retained.
    pub fn offer(&mut self, word: &[u16], score: u64) -> bool {
        if word.is_empty() || word.len() > MAX_WORD_LENGTH {
            return false;
        }

        if let Some(existing) = (0..self.count).find(|&i| self.word_at(i) == word) {
            if self.scores[existing] >= score {
                return false;
            }
            self.remove(existing);
        }

        // Insertion point: after every entry scoring at least as high, so
        // equal scores keep discovery order.
        let mut pos = 0;
        while pos < self.count && self.scores[pos] >= score {
            pos += 1;
        }
        if pos == MAX_WORDS {
            return false;
        }

        if self.count < MAX_WORDS {
            self.count += 1;
        }
        for i in (pos + 1..self.count).rev() {
            self.words[i] = self.words[i - 1];
            self.lens[i] = self.lens[i - 1];
            self.scores[i] = self.scores[i - 1];
        }
        self.words[pos][..word.len()].copy_from_slice(word);
        self.lens[pos] = word.len() as u8;
        self.scores[pos] = score;
        true
    }

    /// Emits the ranked entries, stopping at the first score below 1
    /// (the "present but suppressed" sentinel).
    pub fn emit(&self) -> Vec<SuggestedWord> {
        let mut out = Vec::with_capacity(self.count);
        for i in 0..self.count {
            if self.scores[i] < 1 {
                break;
            }
            let word: String = self.word_at(i)
                .iter()
                .filter_map(|&c| character::char_of(c))
                .collect();
            if word.is_empty() {
                continue;
            }
            out.push(SuggestedWord {
                word,
                score: self.scores[i],
            });
        }
        out
    }

    fn word_at(&self, i: usize) -> &[u16] {
        &self.words[i][..self.lens[i] as usize]
    }

    fn remove(&mut self, index: usize) {
        for i in index..self.count - 1 {
            self.words[i] = self.words[i + 1];
            self.lens[i] = self.lens[i + 1];
            self.scores[i] = self.scores[i + 1];
        }
        self.count -= 1;
    }
}

impl Default for ResultSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(word: &str) -> Vec<u16> {
        word.chars().map(|c| c as u16).collect()
    }

    #[test]
    fn keeps_descending_score_order() {
        let mut sink = ResultSink::new();
        sink.offer(&codes("low"), 10);
        sink.offer(&codes("high"), 100);
        sink.offer(&codes("mid"), 50);
        let out = sink.emit();
        let words: Vec<&str> = out.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["high", "mid", "low"]);
    }

    #[test]
    fn equal_scores_keep_discovery_order() {
        let mut sink = ResultSink::new();
        sink.offer(&codes("first"), 40);
        sink.offer(&codes("second"), 40);
        let out = sink.emit();
        assert_eq!(out[0].word, "first");
        assert_eq!(out[1].word, "second");
    }

    #[test]
    fn capacity_evicts_lowest() {
        let mut sink = ResultSink::new();
        for i in 0..MAX_WORDS {
            assert!(sink.offer(&codes(&format!("w{i}")), (i as u64 + 1) * 10));
        }
        assert_eq!(sink.len(), MAX_WORDS);

        // Below the floor: rejected.
        assert!(!sink.offer(&codes("reject"), 5));
        // Beats the floor: accepted, lowest falls out.
        assert!(sink.offer(&codes("accept"), 15));
        assert_eq!(sink.len(), MAX_WORDS);
        let out = sink.emit();
        assert!(out.iter().any(|s| s.word == "accept"));
        assert!(!out.iter().any(|s| s.word == "w0"));
    }

    #[test]
    fn duplicate_word_keeps_higher_score() {
        let mut sink = ResultSink::new();
        sink.offer(&codes("cat"), 30);
        assert!(!sink.offer(&codes("cat"), 20));
        assert!(sink.offer(&codes("cat"), 90));
        let out = sink.emit();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].score, 90);
    }

    #[test]
    fn emission_stops_at_suppressed_entry() {
        let mut sink = ResultSink::new();
        sink.offer(&codes("kept"), 12);
        sink.offer(&codes("hidden"), 0);
        sink.offer(&codes("also"), 8);
        assert_eq!(sink.len(), 3);
        let out = sink.emit();
        let words: Vec<&str> = out.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["kept", "also"]);
    }

    #[test]
    fn clear_resets_for_next_pass() {
        let mut sink = ResultSink::new();
        sink.offer(&codes("cat"), 30);
        sink.clear();
        assert!(sink.is_empty());
        assert!(sink.emit().is_empty());
    }

    #[test]
    fn rejects_empty_and_overlong_words() {
        let mut sink = ResultSink::new();
        assert!(!sink.offer(&[], 50));
        let long = vec![b'a' as u16; MAX_WORD_LENGTH + 1];
        assert!(!sink.offer(&long, 50));
    }
}
