//! Unique node-identifier set backing a single weight bucket.
//!
//! Holds the integer node identifiers queued at one weight. Membership is
//! unique (set semantics, not multiset), and members carry no ordering:
//! [`any`](NodeSet::any) hands back whichever member the set iterator lands
//! on first.
//!
//! ## Behavior
//! - `insert(n)`: adds `n`, reports whether the set actually grew
//! - `remove(n)`: drops `n`, reports whether it was present
//! - `any()`: one arbitrary member without a full scan
//!
//! ## Performance
//! - `insert` / `remove` / `contains`: O(1) average
//! - `any`: amortized O(1) (iterator positioned at an existing member)
use rustc_hash::FxHashSet;

#[derive(Debug, Default, Clone)]
/// Set of node identifiers sharing one weight, with no internal ordering.
pub struct NodeSet {
    nodes: FxHashSet<i32>,
}

impl NodeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            nodes: FxHashSet::default(),
        }
    }

    /// Creates an empty set pre-sized for roughly `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `node` is a member.
    pub fn contains(&self, node: i32) -> bool {
        self.nodes.contains(&node)
    }

    /// Adds `node`; returns `true` if the set actually gained a member.
    pub fn insert(&mut self, node: i32) -> bool {
        self.nodes.insert(node)
    }

    /// Removes `node`; returns `true` if it was present.
    pub fn remove(&mut self, node: i32) -> bool {
        self.nodes.remove(&node)
    }

    /// Returns one arbitrary member, or `None` if the set is empty.
    ///
    /// No ordering guarantee: two calls on an unchanged set return the same
    /// member, but which member that is is unspecified.
    pub fn any(&self) -> Option<i32> {
        self.nodes.iter().next().copied()
    }

    /// Iterates over all members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.nodes.iter().copied()
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
