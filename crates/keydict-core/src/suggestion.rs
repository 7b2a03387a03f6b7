// Query output types: ranked words plus the optional next-letter histogram.

/// One suggested word with its accumulated score.
///
/// The score combines the stored word frequency with the per-position match
/// weights; higher is better. A score below 1 marks a word that is present
/// in the dictionary but suppressed from suggestions, and such entries are
/// never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedWord {
    /// The suggested word.
    pub word: String,
    /// Accumulated score (frequency times match weights).
    pub score: u64,
}

/// The result of one suggestion query.
///
/// A fresh value per query with no references back into the dictionary;
/// ownership transfers to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionResult {
    /// Suggested words in non-increasing score order, at most
    /// [`MAX_WORDS`](crate::limits::MAX_WORDS) of them.
    pub words: Vec<SuggestedWord>,
    /// Observed-continuation counts indexed by character code, present only
    /// when the query requested a histogram. The length is the width the
    /// caller asked for; codes at or beyond it are not counted.
    pub next_letters: Option<Vec<u32>>,
}

impl SuggestionResult {
    /// An empty result with no histogram.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if `word` appears among the suggestions.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|s| s.word == word)
    }
}
