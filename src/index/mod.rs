//! Prefix index over every directed run in a grid.
//!
//! Each node is reached by a character path from the root and holds the
//! origins of every run whose prefix equals that path. Origins live in a
//! field of their own, so no grid letter can collide with them.

mod indexer;
mod origin;

pub use indexer::RunIndexer;
pub use origin::{Origin, ParseOriginError};

use std::collections::{BTreeSet, HashMap};

pub type OriginSet = BTreeSet<Origin>;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("index has already been populated")]
    AlreadyPopulated,
}

#[derive(Debug, Default)]
pub(crate) struct Node {
    children: HashMap<char, Node>,
    origins: OriginSet,
}

impl Node {
    pub(crate) fn child_or_insert(&mut self, letter: char) -> &mut Node {
        self.children.entry(letter).or_default()
    }

    /// Set semantics: recording the same origin twice is a no-op.
    pub(crate) fn record(&mut self, origin: Origin) {
        self.origins.insert(origin);
    }

    fn count(&self) -> usize {
        1 + self.children.values().map(Node::count).sum::<usize>()
    }

    fn merge(&mut self, other: Node) {
        self.origins.extend(other.origins);
        for (letter, child) in other.children {
            self.child_or_insert(letter).merge(child);
        }
    }
}

#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: Node,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.count() - 1
    }

    /// Origins of every run that begins with exactly `word`.
    ///
    /// Returns `None` when some character has no matching child, for the
    /// empty word, and for a node that carries no origins.
    pub fn lookup(&self, word: &str) -> Option<&OriginSet> {
        if word.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.children.get(&ch)?;
        }
        if node.origins.is_empty() {
            None
        } else {
            Some(&node.origins)
        }
    }

    /// Fold `other` into this index, taking the union of origin sets along
    /// identical paths. Used to combine indices built over disjoint start
    /// cells.
    pub fn merge(&mut self, other: PrefixIndex) {
        self.root.merge(other.root);
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }
}
