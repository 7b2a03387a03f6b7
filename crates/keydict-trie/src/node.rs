// Node entry struct for zero-copy access to the trie body.

use bytemuck::{Pod, Zeroable};

/// Flag bit: this entry ends a complete word; `freq` is valid.
pub const FLAG_TERMINAL: u8 = 0x01;
/// Flag bit: this entry has a child group; `child` is valid.
pub const FLAG_HAS_CHILDREN: u8 = 0x02;
/// Flag bit: this entry is the last of its sibling group.
pub const FLAG_LAST_SIBLING: u8 = 0x04;

const FLAG_ALL: u8 = FLAG_TERMINAL | FLAG_HAS_CHILDREN | FLAG_LAST_SIBLING;

/// One trie edge (8 bytes, little-endian):
/// - `code` (u16): character code labeling the edge
/// - `flags` (u8): see the `FLAG_*` bits
/// - `freq` (u8): word frequency, valid only when `FLAG_TERMINAL` is set;
///   0 means "present but suppressed from suggestions"
/// - `child` (u32): entry index of the first child, valid only when
///   `FLAG_HAS_CHILDREN` is set
///
/// Sibling groups are contiguous runs of entries terminated by
/// `FLAG_LAST_SIBLING`; the root group starts at entry 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct NodeEntry {
    pub code: u16,
    pub flags: u8,
    pub freq: u8,
    pub child: u32,
}

const _: () = assert!(size_of::<NodeEntry>() == 8);

impl NodeEntry {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.flags & FLAG_TERMINAL != 0
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.flags & FLAG_HAS_CHILDREN != 0
    }

    #[inline]
    pub fn is_last_sibling(&self) -> bool {
        self.flags & FLAG_LAST_SIBLING != 0
    }

    /// The word frequency, or `None` when the entry does not end a word.
    #[inline]
    pub fn frequency(&self) -> Option<u8> {
        self.is_terminal().then_some(self.freq)
    }

    /// Returns `true` if only defined flag bits are set.
    #[inline]
    pub fn flags_valid(&self) -> bool {
        self.flags & !FLAG_ALL == 0
    }
}
