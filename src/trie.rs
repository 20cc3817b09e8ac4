//! `trie` — Prefix tree over the uppercase alphabet.
//!
//! The trie is built once from a word list and is read-only for the rest of
//! the run. Every node exclusively owns its children, so the whole structure
//! is a pure tree: dropping the [`Trie`] drops everything.
//!
//! # Character policy
//!
//! Insertion and lookup are case-insensitive, and non-alphabetic characters
//! are *stripped* rather than rejected: word lists in the wild carry hyphens
//! and apostrophes, and we want "re-do" to be findable as "REDO". A word that
//! strips down to nothing (e.g. "--") inserts nothing at all. This is a
//! deliberate choice; see DESIGN.md for the alternatives considered.

/// Number of child slots per node, one per letter A-Z.
pub(crate) const ALPHABET_SIZE: usize = 26;

/// One node of the prefix tree.
///
/// Children are indexed by letter (`'A'` maps to slot 0). A node is
/// *terminal* when some inserted word ends exactly here.
#[derive(Debug)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: std::array::from_fn(|_| None),
            terminal: false,
        }
    }

    /// Child slot for `c`, or `None` if `c` is not an ASCII letter.
    fn slot(c: char) -> Option<usize> {
        c.is_ascii_alphabetic()
            .then(|| (c.to_ascii_uppercase() as u8 - b'A') as usize)
    }

    /// Whether some inserted word ends exactly at this node.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Prefix tree supporting insertion, prefix lookup, and exact membership.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts `word`, stripping non-alphabetic characters per the module
    /// policy. Inserting a word twice is a no-op for [`Trie::len`].
    pub fn add(&mut self, word: &str) {
        let mut node = &mut self.root;
        let mut consumed = false;
        for c in word.chars() {
            let Some(i) = TrieNode::slot(c) else { continue };
            consumed = true;
            node = node.children[i].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        // A word that stripped to nothing would otherwise mark the root
        // terminal and make contains("") true.
        if consumed && !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Walks `key` from the root, consuming characters exactly the way
    /// [`Trie::add`] does, and returns the node reached.
    ///
    /// A `Some` result means the (stripped) key is a prefix of at least one
    /// stored word — this is the prefix test the solver prunes with.
    #[must_use]
    pub fn node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            let Some(i) = TrieNode::slot(c) else { continue };
            node = node.children[i].as_deref()?;
        }
        Some(node)
    }

    /// True iff `word` was inserted as a complete word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_terminal)
    }

    /// Number of distinct words stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
