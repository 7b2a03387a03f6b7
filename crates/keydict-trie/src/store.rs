// DictionaryStore: blob ownership and trie traversal primitives.

use bytemuck::Zeroable;

use crate::LoadError;
use crate::format::{self, HEADER_SIZE};
use crate::node::NodeEntry;

/// Opaque identifier of a trie node.
///
/// Wraps the index of the node's entry in the body; [`NodeId::ROOT`] names
/// the synthetic root, which has children (the root sibling group) but no
/// entry of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The synthetic root node.
    pub const ROOT: NodeId = NodeId(u32::MAX);

    #[inline]
    fn index(self) -> Option<usize> {
        (self != Self::ROOT).then_some(self.0 as usize)
    }
}

/// Immutable, memory-resident binary dictionary.
///
/// Owns the decoded node entries for its whole lifetime. A store is either
/// loaded or empty; an empty store answers every traversal query with
/// "no match" rather than faulting, so callers never need to special-case
/// a failed load. Release is idempotent and teardown is deterministic
/// (dropping the store frees the buffer).
pub struct DictionaryStore {
    /// Node entries, copied out of the blob into an aligned buffer.
    entries: Vec<NodeEntry>,
    /// Byte length of the loaded blob; 0 when unloaded.
    blob_len: usize,
}

impl std::fmt::Debug for DictionaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryStore")
            .field("entry_count", &self.entries.len())
            .field("blob_len", &self.blob_len)
            .finish()
    }
}

impl DictionaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            blob_len: 0,
        }
    }

    /// Creates a store from a blob.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        let mut store = Self::new();
        store.load(data)?;
        Ok(store)
    }

    /// Loads a blob, replacing any previously loaded dictionary.
    ///
    /// On failure the store is left empty; queries keep working and return
    /// no matches.
    pub fn load(&mut self, data: &[u8]) -> Result<(), LoadError> {
        self.release();

        format::parse_header(data)?;

        let body = &data[HEADER_SIZE..];
        if body.len() % size_of::<NodeEntry>() != 0 {
            return Err(LoadError::Corrupt(
                "body is not a whole number of node entries",
            ));
        }

        // Copy the body into an aligned Vec<NodeEntry>; the source slice may
        // not be properly aligned for a zero-copy cast.
        let count = body.len() / size_of::<NodeEntry>();
        let mut entries = vec![NodeEntry::zeroed(); count];
        bytemuck::cast_slice_mut::<NodeEntry, u8>(&mut entries).copy_from_slice(body);

        validate_entries(&entries)?;

        self.entries = entries;
        self.blob_len = data.len();
        Ok(())
    }

    /// Returns `true` if a dictionary is currently loaded.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.blob_len > 0
    }

    /// Byte length of the loaded blob, 0 when unloaded.
    #[inline]
    pub fn size(&self) -> usize {
        self.blob_len
    }

    /// Drops the loaded dictionary, returning the store to the empty state.
    /// Safe to call any number of times.
    pub fn release(&mut self) {
        self.entries = Vec::new();
        self.blob_len = 0;
    }

    /// Descends one edge: the child of `node` labeled `code`, if any.
    pub fn child(&self, node: NodeId, code: u16) -> Option<NodeId> {
        self.children(node).find(|&c| self.code(c) == Some(code))
    }

    /// The character code labeling the edge into `node` (`None` for the root).
    #[inline]
    pub fn code(&self, node: NodeId) -> Option<u16> {
        self.entry(node).map(|e| e.code)
    }

    /// The word frequency when `node` ends a complete word.
    ///
    /// A frequency of 0 marks a word that exists but is suppressed from
    /// suggestion emission.
    #[inline]
    pub fn terminal_frequency(&self, node: NodeId) -> Option<u8> {
        self.entry(node).and_then(|e| e.frequency())
    }

    /// Returns `true` if `node` has outgoing edges.
    #[inline]
    pub fn has_children(&self, node: NodeId) -> bool {
        match node.index() {
            None => !self.entries.is_empty(),
            Some(i) => self.entries.get(i).is_some_and(|e| e.has_children()),
        }
    }

    /// Iterates the children of `node` in storage order.
    pub fn children(&self, node: NodeId) -> Children<'_> {
        Children {
            entries: &self.entries,
            next: self.group_start(node),
        }
    }

    fn entry(&self, node: NodeId) -> Option<&NodeEntry> {
        self.entries.get(node.index()?)
    }

    /// First entry index of the sibling group under `node`.
    fn group_start(&self, node: NodeId) -> Option<usize> {
        match node.index() {
            None => (!self.entries.is_empty()).then_some(0),
            Some(i) => {
                let entry = self.entries.get(i)?;
                entry.has_children().then_some(entry.child as usize)
            }
        }
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural validation of the decoded body.
fn validate_entries(entries: &[NodeEntry]) -> Result<(), LoadError> {
    for entry in entries {
        if !entry.flags_valid() {
            return Err(LoadError::Corrupt("undefined flag bits in node entry"));
        }
        if entry.has_children() && entry.child as usize >= entries.len() {
            return Err(LoadError::Corrupt("child index out of range"));
        }
    }
    if entries.last().is_some_and(|e| !e.is_last_sibling()) {
        return Err(LoadError::Corrupt("unterminated sibling group"));
    }
    Ok(())
}

/// Iterator over the sibling group under one node.
pub struct Children<'a> {
    entries: &'a [NodeEntry],
    next: Option<usize>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let index = self.next?;
        let entry = self.entries.get(index)?;
        self.next = if entry.is_last_sibling() {
            None
        } else {
            Some(index + 1)
        };
        Some(NodeId(index as u32))
    }
}
