//! Monotone bucket-indexed min-priority queue over integer weights.
//!
//! The workhorse queue for Dijkstra-style search and contraction-hierarchy
//! preprocessing: payloads are integer node identifiers, priorities are
//! bounded integer weights, and decrease-key traffic is heavy. Nodes sharing
//! a weight live in one unordered bucket, and an ordered index keeps the
//! buckets sorted by weight.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     WeightBuckets Layout                       │
//! │                                                                │
//! │   index: BTreeMap<i32, NodeSet>   (ascending by weight)        │
//! │                                                                │
//! │     weight  2 ──► { 17 }                 ◄── minimum, served   │
//! │     weight 10 ──► { 0, 4, 9 }                first             │
//! │     weight 11 ──► { 3 }                                        │
//! │                                                                │
//! │   len: 5   (total memberships across all buckets)              │
//! └────────────────────────────────────────────────────────────────┘
//!
//! Poll Flow
//! ─────────
//!   poll_key():
//!     1. first (minimum-weight) index entry        → weight 2
//!     2. take any member of its bucket             → node 17
//!     3. remove member, len -= 1
//!     4. bucket now empty → detach weight 2 from the index
//!
//! Decrease-Key Flow
//! ─────────────────
//!   update(4, 10, 3):
//!     1. remove node 4 from the bucket at weight 10
//!        (detach the bucket if that emptied it)
//!     2. add node 4 to the bucket at weight 3, creating it if absent
//!     3. len unchanged (one membership moved, not added or removed)
//! ```
//!
//! ## Operations
//!
//! | Operation      | Time        | Notes                                  |
//! |----------------|-------------|----------------------------------------|
//! | `insert`       | O(log W)    | Set-add; W = distinct occupied weights |
//! | `peek_key`     | O(log W)    | Arbitrary member of the min bucket     |
//! | `peek_value`   | O(log W)    | Minimum occupied weight                |
//! | `poll_key`     | O(log W)    | Removes one member of the min bucket   |
//! | `update`       | O(log W)    | Decrease-key (strict, see below)       |
//! | `remove`       | O(log W)    | Strict single-membership removal       |
//!
//! All costs are independent of the number of queued nodes; within a bucket
//! every step is O(1) average.
//!
//! ## Key Invariants
//!
//! - A bucket is never stored in the index while empty: the operation that
//!   removes its last member detaches it in the same call.
//! - `len()` always equals the sum of bucket cardinalities, and
//!   `is_empty()` ⇔ `len() == 0` ⇔ the index has no entries.
//! - Members of one bucket are unordered; `peek_key`/`poll_key` make no
//!   tie-break promise among equal-weight nodes.
//!
//! ## Example Usage
//!
//! ```
//! use bucketq::ds::WeightBuckets;
//!
//! let mut queue = WeightBuckets::new();
//!
//! // Discover nodes with tentative weights
//! queue.insert(0, 10);
//! queue.insert(1, 2);
//!
//! // A cheaper path to node 0 is found
//! queue.update(0, 10, 4).unwrap();
//!
//! // Nodes come out in non-decreasing weight order
//! assert_eq!(queue.peek_value(), Some(2));
//! assert_eq!(queue.poll_key(), Some(1));
//! assert_eq!(queue.poll_key(), Some(0));
//! assert!(queue.is_empty());
//! ```
//!
//! ## Caller Contract
//!
//! The queue does not track which weight a node currently occupies; the
//! search algorithm does (its tentative-distance array). `update` and
//! `remove` therefore take the old weight from the caller and reject a pair
//! that is not a live membership with [`StaleKeyError`] instead of silently
//! duplicating the node across two buckets.
//!
//! ## Thread Safety
//!
//! `WeightBuckets` is not thread-safe. It is built to sit inside one
//! algorithm's inner loop; wrap it in a mutex if you must share it.
use std::collections::BTreeMap;

use crate::ds::node_set::NodeSet;
use crate::error::StaleKeyError;

#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;

/// Default pre-sizing for newly created buckets.
///
/// Graph searches tend to keep a handful of nodes per occupied weight, so a
/// small hint avoids rehashing without wasting space across many buckets.
pub const DEFAULT_BUCKET_CAPACITY: usize = 16;

/// Min-priority queue of integer node identifiers keyed by integer weight.
///
/// Smaller weights are served first. Equal-weight nodes share one bucket and
/// come out in unspecified order.
///
/// # Example
///
/// ```
/// use bucketq::ds::WeightBuckets;
///
/// let mut queue = WeightBuckets::new();
/// queue.insert(0, 10);
/// queue.insert(1, 11);
///
/// assert_eq!(queue.peek_value(), Some(10));
/// assert_eq!(queue.peek_key(), Some(0));
/// assert_eq!(queue.len(), 2);
/// ```
///
/// # Use Case: Dijkstra Relaxation
///
/// ```
/// use bucketq::ds::WeightBuckets;
///
/// let mut queue = WeightBuckets::new();
/// let mut dist = [i32::MAX; 4];
///
/// // Settle the source
/// dist[0] = 0;
/// queue.insert(0, 0);
///
/// // Relax an edge (0 -> 2, weight 7)
/// let tentative = dist[0] + 7;
/// if tentative < dist[2] {
///     if dist[2] == i32::MAX {
///         queue.insert(2, tentative);
///     } else {
///         queue.update(2, dist[2], tentative).unwrap();
///     }
///     dist[2] = tentative;
/// }
///
/// assert_eq!(queue.poll_key(), Some(0));
/// assert_eq!(queue.poll_key(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct WeightBuckets {
    index: BTreeMap<i32, NodeSet>,
    len: usize,
    bucket_capacity: usize,
}

impl WeightBuckets {
    /// Creates an empty queue with [`DEFAULT_BUCKET_CAPACITY`] bucket
    /// pre-sizing.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let queue = WeightBuckets::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_bucket_capacity(DEFAULT_BUCKET_CAPACITY)
    }

    /// Creates an empty queue whose new buckets are pre-sized for roughly
    /// `bucket_capacity` members each.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// // Dense weight range, few nodes per weight
    /// let queue = WeightBuckets::with_bucket_capacity(4);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_bucket_capacity(bucket_capacity: usize) -> Self {
        Self {
            index: BTreeMap::new(),
            len: 0,
            bucket_capacity,
        }
    }

    /// Returns the total number of `(weight, node)` memberships.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(0, 10);
    /// queue.insert(1, 10);
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no node is queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct occupied weights.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(0, 10);
    /// queue.insert(1, 10);
    /// queue.insert(2, 20);
    /// assert_eq!(queue.occupied_weights(), 2);
    /// ```
    pub fn occupied_weights(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if `node` is queued at `weight`.
    pub fn contains(&self, node: i32, weight: i32) -> bool {
        self.index
            .get(&weight)
            .is_some_and(|bucket| bucket.contains(node))
    }

    /// Returns `true` if any node is queued at `weight`.
    ///
    /// A weight whose bucket was emptied is absent: bucket detachment happens
    /// inside the operation that removed the last member.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(7, 5);
    /// assert!(queue.contains_weight(5));
    ///
    /// queue.poll_key();
    /// assert!(!queue.contains_weight(5));
    /// ```
    pub fn contains_weight(&self, weight: i32) -> bool {
        self.index.contains_key(&weight)
    }

    /// Adds `node` to the bucket at `weight`, creating the bucket if absent.
    ///
    /// Set-add semantics: returns `true` and increments `len()` only if the
    /// bucket actually gained a member. Re-inserting an existing `(node,
    /// weight)` membership is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// assert!(queue.insert(0, 10));
    /// assert!(!queue.insert(0, 10)); // already queued at 10
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn insert(&mut self, node: i32, weight: i32) -> bool {
        let bucket = self
            .index
            .entry(weight)
            .or_insert_with(|| NodeSet::with_capacity(self.bucket_capacity));
        let added = bucket.insert(node);
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns the minimum occupied weight, or `None` on an empty queue.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// assert_eq!(queue.peek_value(), None);
    ///
    /// queue.insert(0, 10);
    /// queue.insert(1, 2);
    /// assert_eq!(queue.peek_value(), Some(2));
    /// ```
    pub fn peek_value(&self) -> Option<i32> {
        self.index.first_key_value().map(|(&weight, _)| weight)
    }

    /// Returns one arbitrary member of the minimum-weight bucket without
    /// removing it, or `None` on an empty queue.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(0, 10);
    /// queue.insert(1, 2);
    ///
    /// assert_eq!(queue.peek_key(), Some(1));
    /// assert_eq!(queue.len(), 2); // not removed
    /// ```
    pub fn peek_key(&self) -> Option<i32> {
        self.index.first_key_value().and_then(|(_, bucket)| bucket.any())
    }

    /// Removes and returns one arbitrary member of the minimum-weight bucket,
    /// or `None` on an empty queue.
    ///
    /// If that member was the bucket's last, the weight is detached from the
    /// index in the same call.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(7, 5);
    ///
    /// assert_eq!(queue.poll_key(), Some(7));
    /// assert!(queue.is_empty());
    /// assert!(!queue.contains_weight(5));
    /// assert_eq!(queue.poll_key(), None);
    /// ```
    pub fn poll_key(&mut self) -> Option<i32> {
        let mut entry = self.index.first_entry()?;
        // Indexed buckets are never empty, so a member always exists.
        let node = entry.get().any()?;
        entry.get_mut().remove(node);
        if entry.get().is_empty() {
            entry.remove();
        }
        self.len -= 1;
        Some(node)
    }

    /// Moves `node` from the bucket at `old_weight` to the bucket at
    /// `new_weight` (decrease-key).
    ///
    /// `len()` is unchanged: one membership moved, none added or removed. If
    /// the old bucket empties it is detached; the new bucket is created if
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`StaleKeyError`] without mutating anything if `node` is not
    /// currently queued at `old_weight`. The original permissive behavior
    /// would have gone ahead with the insertion and left the node queued at
    /// two weights at once; this implementation rejects the call instead.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(0, 10);
    ///
    /// queue.update(0, 10, 2).unwrap();
    /// assert_eq!(queue.peek_value(), Some(2));
    /// assert_eq!(queue.len(), 1);
    ///
    /// // Stale bookkeeping is rejected, not absorbed
    /// assert!(queue.update(0, 10, 1).is_err());
    /// ```
    pub fn update(
        &mut self,
        node: i32,
        old_weight: i32,
        new_weight: i32,
    ) -> Result<(), StaleKeyError> {
        self.remove(node, old_weight)?;
        self.insert(node, new_weight);
        Ok(())
    }

    /// Removes the membership of `node` at `weight`, detaching the bucket if
    /// that emptied it.
    ///
    /// # Errors
    ///
    /// Returns [`StaleKeyError`] if `node` is not currently queued at
    /// `weight`.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(7, 5);
    ///
    /// queue.remove(7, 5).unwrap();
    /// assert!(queue.is_empty());
    /// assert!(queue.remove(7, 5).is_err());
    /// ```
    pub fn remove(&mut self, node: i32, weight: i32) -> Result<(), StaleKeyError> {
        let bucket = match self.index.get_mut(&weight) {
            Some(bucket) => bucket,
            None => return Err(StaleKeyError::new(node, weight)),
        };
        if !bucket.remove(node) {
            return Err(StaleKeyError::new(node, weight));
        }
        self.len -= 1;
        if bucket.is_empty() {
            self.index.remove(&weight);
        }
        Ok(())
    }

    /// Removes all memberships.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketq::ds::WeightBuckets;
    ///
    /// let mut queue = WeightBuckets::new();
    /// queue.insert(0, 10);
    /// queue.insert(1, 2);
    ///
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.occupied_weights(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.index.clear();
        self.len = 0;
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns a debug snapshot of queue sizes (debug/test builds only).
    pub fn debug_snapshot(&self) -> WeightBucketsSnapshot {
        WeightBucketsSnapshot {
            len: self.len,
            occupied_weights: self.index.len(),
            min_weight: self.peek_value(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut total = 0usize;
        for (&weight, bucket) in &self.index {
            if bucket.is_empty() {
                return Err(InvariantError::new(format!(
                    "empty bucket left in the index at weight {weight}"
                )));
            }
            total += bucket.len();
        }
        if total != self.len {
            return Err(InvariantError::new(format!(
                "membership count {total} does not match len {}",
                self.len
            )));
        }
        if self.is_empty() != self.index.is_empty() {
            return Err(InvariantError::new(
                "emptiness disagrees between len and index",
            ));
        }
        Ok(())
    }
}

impl Default for WeightBuckets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, debug_assertions))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightBucketsSnapshot {
    pub len: usize,
    pub occupied_weights: usize,
    pub min_weight: Option<i32>,
}
