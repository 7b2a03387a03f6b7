// Fixed size limits of the suggestion engine.
//
// These bounds size the reusable scratch buffers and cap every traversal,
// so a query always completes in bounded time and memory.

/// Maximum number of characters in a dictionary word.
pub const MAX_WORD_LENGTH: usize = 48;

/// Maximum number of input positions accepted by a single query.
///
/// One slot of the word buffer is reserved, so queries are capped one below
/// [`MAX_WORD_LENGTH`]. Longer inputs yield an empty result, not an error.
pub const MAX_INPUT_LENGTH: usize = MAX_WORD_LENGTH - 1;

/// Maximum number of alternative character codes per input position.
pub const MAX_ALTERNATIVES: usize = 16;

/// Maximum number of ranked words returned by a query.
pub const MAX_WORDS: usize = 16;

/// Score multiplier applied when a position matches its primary
/// (most plausible) alternative.
pub const DEFAULT_TYPED_LETTER_MULTIPLIER: u64 = 2;

/// Score multiplier applied when a terminal node is reached exactly at the
/// end of the typed input.
pub const DEFAULT_FULL_WORD_MULTIPLIER: u64 = 2;
