//! Character-keyed trie node and the insert/find walks over it.
//!
//! One trie exists per HTTP method. Every node is keyed by a single
//! character of a registered pattern; a pattern ends in a terminal child keyed
//! by [`TERMINAL`] that holds the [`Route`].
//!
//! ## Precedence during lookup
//!
//! At each step the walk tries, in this fixed order:
//!
//! 1. stay on the current parameter node while inside its segment
//! 2. a parameter child (`:`)
//! 3. a catch-all child (`*`), which accepts the rest of the path outright
//! 4. the literal child for the current character
//!
//! A parameter child therefore shadows literal siblings: with both
//! `/users/:id` and `/users/new` registered, `/users/new` resolves to the
//! `:id` route. Consumers depend on this ordering.

use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::route::Route;

/// Key of the terminal child; never a valid path character
pub(crate) const TERMINAL: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Root,
    Literal,
    Parameter,
    CatchAll,
    Terminal,
}

impl NodeKind {
    fn for_char(c: char) -> Self {
        match c {
            ':' => NodeKind::Parameter,
            '*' => NodeKind::CatchAll,
            _ => NodeKind::Literal,
        }
    }
}

/// What happened to the terminal slot of an inserted pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inserted {
    New,
    /// An earlier route at the same position is now shadowed
    Shadowed,
}

#[derive(Debug)]
pub(crate) struct Node {
    key: char,
    kind: NodeKind,
    children: Vec<Node>,
    route: Option<Arc<Route>>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            key: TERMINAL,
            kind: NodeKind::Root,
            children: Vec::new(),
            route: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> NodeKind {
        self.kind
    }

    pub(crate) fn child(&self, key: char) -> Option<&Node> {
        self.children.iter().find(|c| c.key == key)
    }

    fn child_index(&self, key: char) -> Option<usize> {
        self.children.iter().position(|c| c.key == key)
    }

    /// Append a new child and return it. Callers search first; keys stay unique
    /// among siblings except for terminal children.
    pub(crate) fn branch(&mut self, key: char, kind: NodeKind, route: Option<Arc<Route>>) -> &mut Node {
        self.children.push(Node {
            key,
            kind,
            children: Vec::new(),
            route,
        });
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    fn terminal_route(&self) -> Option<&Arc<Route>> {
        // The most recent terminal wins when an identical pattern was registered twice.
        self.children
            .iter()
            .rev()
            .find(|c| c.kind == NodeKind::Terminal)
            .and_then(|c| c.route.as_ref())
    }

    /// Insert `pattern`, storing `route` at its terminus.
    ///
    /// Characters following `:` or `*` up to the next `/` name the segment and
    /// are absorbed by that single node. With `reject_duplicates` set, a
    /// position that already holds a route is refused before any mutation.
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        route: Arc<Route>,
        reject_duplicates: bool,
    ) -> Result<Inserted> {
        if self.kind != NodeKind::Root {
            return Err(RouterError::InsertOnNonRoot);
        }
        if pattern.is_empty() {
            return Err(RouterError::EmptyPattern);
        }
        if !pattern.starts_with('/') {
            return Err(RouterError::MustStartWithSlash);
        }

        if reject_duplicates && self.locate(pattern).is_some_and(|n| n.terminal_route().is_some()) {
            return Err(RouterError::DuplicateRoute(pattern.to_string()));
        }

        let mut level: &mut Node = self;
        for c in pattern.chars() {
            if matches!(level.kind, NodeKind::Parameter | NodeKind::CatchAll) && c != '/' {
                continue;
            }
            level = match level.child_index(c) {
                Some(idx) => &mut level.children[idx],
                None => level.branch(c, NodeKind::for_char(c), None),
            };
        }

        let outcome = if level.terminal_route().is_some() {
            Inserted::Shadowed
        } else {
            Inserted::New
        };
        level.branch(TERMINAL, NodeKind::Terminal, Some(route));
        Ok(outcome)
    }

    /// Follow the insert walk for `pattern` without creating nodes.
    fn locate(&self, pattern: &str) -> Option<&Node> {
        let mut level = self;
        for c in pattern.chars() {
            if matches!(level.kind, NodeKind::Parameter | NodeKind::CatchAll) && c != '/' {
                continue;
            }
            level = level.child(c)?;
        }
        Some(level)
    }

    /// Walk a normalised request path and return the route it resolves to.
    pub(crate) fn find(&self, path: &str) -> Result<Arc<Route>> {
        if self.kind != NodeKind::Root {
            return Err(RouterError::FindOnNonRoot);
        }
        if path.is_empty() {
            return Err(RouterError::RouteNotFound);
        }

        let mut level = self;
        let mut in_parameter = false;
        for c in path.chars() {
            if in_parameter {
                if c != '/' {
                    continue;
                }
                in_parameter = false;
            }
            if let Some(param) = level.child(':') {
                level = param;
                in_parameter = true;
                continue;
            }
            if let Some(catch_all) = level.child('*') {
                level = catch_all;
                break;
            }
            match level.child(c) {
                Some(next) => level = next,
                None => return Err(RouterError::RouteNotFound),
            }
        }

        if let Some(route) = level.terminal_route() {
            return Ok(Arc::clone(route));
        }
        // Tolerate a pattern registered with a trailing slash.
        level
            .child('/')
            .and_then(Node::terminal_route)
            .map(Arc::clone)
            .ok_or(RouterError::RouteNotFound)
    }

    /// Total number of nodes in this subtree, including `self`
    #[cfg(test)]
    pub(crate) fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }
}
