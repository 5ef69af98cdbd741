use std::sync::Arc;

use parking_lot::RwLock;

use super::node::{Inserted, Node};
use crate::error::Result;
use crate::route::Route;

/// A method's routing trie behind a single reader/writer lock.
///
/// Inserts hold the write lock for the whole mutation; lookups hold the read
/// lock for the whole walk, so any number of lookups run in parallel. A lookup
/// racing an insert sees the trie either before or after that insert.
#[derive(Debug)]
pub(crate) struct Trie {
    root: RwLock<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub(crate) fn new() -> Self {
        Self {
            root: RwLock::new(Node::root()),
        }
    }

    pub(crate) fn insert(&self, pattern: &str, route: Arc<Route>, reject_duplicates: bool) -> Result<Inserted> {
        self.root.write().insert(pattern, route, reject_duplicates)
    }

    pub(crate) fn find(&self, path: &str) -> Result<Arc<Route>> {
        self.root.read().find(path)
    }
}
