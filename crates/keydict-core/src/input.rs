// One typed key as a bounded set of plausible character codes.

use crate::limits::MAX_ALTERNATIVES;

/// The alternatives for a single typed key, ordered by descending
/// plausibility: the intended key first, then nearby keys.
///
/// Holds at most [`MAX_ALTERNATIVES`] codes in a fixed inline array; pushes
/// beyond the capacity are silently dropped, matching the bounded scratch
/// design of the engine. A query is an ordered slice of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    codes: [u16; MAX_ALTERNATIVES],
    len: u8,
}

impl InputPosition {
    /// An empty position matching nothing.
    pub const fn empty() -> Self {
        Self {
            codes: [0; MAX_ALTERNATIVES],
            len: 0,
        }
    }

    /// A position holding only the given code.
    pub fn new(primary: u16) -> Self {
        let mut pos = Self::empty();
        pos.push(primary);
        pos
    }

    /// A position built from an ordered code list; codes beyond the
    /// capacity are ignored.
    pub fn from_codes(codes: &[u16]) -> Self {
        let mut pos = Self::empty();
        for &code in codes {
            pos.push(code);
        }
        pos
    }

    /// Append an alternative code. Has no effect once the position is full.
    pub fn push(&mut self, code: u16) {
        if (self.len as usize) < MAX_ALTERNATIVES {
            self.codes[self.len as usize] = code;
            self.len += 1;
        }
    }

    /// The most plausible code, if any.
    #[inline]
    pub fn primary(&self) -> Option<u16> {
        self.codes().first().copied()
    }

    /// The ordered alternative codes.
    #[inline]
    pub fn codes(&self) -> &[u16] {
        &self.codes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for InputPosition {
    fn default() -> Self {
        Self::empty()
    }
}
