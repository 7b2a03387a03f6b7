// Minimal in-memory blob builder.
//
// Emits the exact format DictionaryStore loads, with no compaction or
// node sharing. Used by tests, benches, examples and the CLI wordlist
// mode; production blobs come from an offline compiler.

use bytemuck::Zeroable;

use keydict_core::character;
use keydict_core::limits::MAX_WORD_LENGTH;

use crate::format::{HEADER_SIZE, write_header};
use crate::node::{FLAG_HAS_CHILDREN, FLAG_LAST_SIBLING, FLAG_TERMINAL, NodeEntry};

#[derive(Default)]
struct TrieNode {
    /// Children in insertion order, keyed by character code.
    children: Vec<(u16, TrieNode)>,
    /// Word frequency when a word ends here.
    freq: Option<u8>,
}

/// Builds a dictionary blob from (word, frequency) pairs.
///
/// Words longer than [`MAX_WORD_LENGTH`] characters or containing non-BMP
/// characters are dropped; inserting the same word twice keeps the last
/// frequency. Output is deterministic: sibling groups appear in first-insert
/// order.
#[derive(Default)]
pub struct DictionaryBuilder {
    root: TrieNode,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word with the given frequency. A frequency of 0 records the
    /// word as valid but suppressed from suggestions.
    pub fn add(&mut self, word: &str, freq: u8) -> &mut Self {
        let codes: Option<Vec<u16>> = word.chars().map(character::code_of).collect();
        let Some(codes) = codes else {
            return self;
        };
        if codes.is_empty() || codes.len() > MAX_WORD_LENGTH {
            return self;
        }

        let mut node = &mut self.root;
        for code in codes {
            let pos = match node.children.iter().position(|(c, _)| *c == code) {
                Some(pos) => pos,
                None => {
                    node.children.push((code, TrieNode::default()));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[pos].1;
        }
        node.freq = Some(freq);
        self
    }

    /// Serializes the trie into a loadable blob.
    pub fn build(&self) -> Vec<u8> {
        let total = count_nodes(&self.root);
        let mut entries = vec![NodeEntry::zeroed(); total];
        if total > 0 {
            let mut next_free = self.root.children.len();
            emit_group(&self.root, 0, &mut entries, &mut next_free);
        }

        let body = bytemuck::cast_slice::<NodeEntry, u8>(&entries);
        let mut data = write_header(HEADER_SIZE + body.len()).to_vec();
        data.extend_from_slice(body);
        data
    }
}

fn count_nodes(node: &TrieNode) -> usize {
    node.children
        .iter()
        .map(|(_, child)| 1 + count_nodes(child))
        .sum()
}

/// Writes the sibling group of `node` starting at `group_start`, allocating
/// child groups from `next_free` and descending into them.
fn emit_group(node: &TrieNode, group_start: usize, entries: &mut [NodeEntry], next_free: &mut usize) {
    let count = node.children.len();
    let mut child_starts = Vec::with_capacity(count);

    for (i, (code, child)) in node.children.iter().enumerate() {
        let mut flags = 0u8;
        let mut freq = 0u8;
        let mut child_index = 0u32;

        if let Some(f) = child.freq {
            flags |= FLAG_TERMINAL;
            freq = f;
        }
        if !child.children.is_empty() {
            flags |= FLAG_HAS_CHILDREN;
            child_index = *next_free as u32;
            *next_free += child.children.len();
        }
        if i + 1 == count {
            flags |= FLAG_LAST_SIBLING;
        }

        entries[group_start + i] = NodeEntry {
            code: *code,
            flags,
            freq,
            child: child_index,
        };
        child_starts.push(child_index as usize);
    }

    for ((_, child), start) in node.children.iter().zip(child_starts) {
        if !child.children.is_empty() {
            emit_group(child, start, entries, next_free);
        }
    }
}
