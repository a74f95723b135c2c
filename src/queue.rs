//! Singly-linked string queue over a slab arena.
//!
//! Nodes live in a [`slab::Slab`]; links between them are arena keys with a
//! sentinel "none" value rather than pointers. The queue tracks head, tail,
//! and length.
//!
//! # Ownership
//!
//! Each node owns an exactly-sized heap copy of its string. The queue owns
//! the arena and with it every node reachable from `head`. Removal hands the
//! owned copy back, or writes it into a caller-supplied byte buffer with the
//! classic truncate-and-terminate contract.
//!
//! # Invariants
//!
//! - `len == 0` iff `head` is the sentinel iff `tail` is the sentinel.
//! - If non-empty, walking `next` from `head` reaches `tail` in exactly
//!   `len` steps, and `tail`'s `next` is the sentinel (no cycle).

use slab::Slab;

use crate::key::Key;
use crate::sort;

/// A node in the chain.
///
/// Wraps the owned payload with its forward link. An empty input string is
/// stored as `None` (no copy made); it surfaces as `""` again on removal.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: Option<Box<str>>,
    pub(crate) next: usize,
}

impl Node {
    /// Creates an unlinked node holding an exact-fit copy of `value`.
    #[inline]
    pub(crate) fn new(value: &str) -> Self {
        let value = if value.is_empty() {
            None
        } else {
            Some(Box::from(value))
        };
        Self {
            value,
            next: usize::NONE,
        }
    }
}

/// A FIFO queue of owned strings over a singly-linked node chain.
///
/// Supports insertion at both ends, removal from the head, O(1) size
/// queries, in-place reversal, and a stable ascending sort under
/// case-insensitive lexicographic order.
///
/// # Example
///
/// ```
/// use strq::StrQueue;
///
/// let mut q = StrQueue::new();
/// q.push_back("first");
/// q.push_back("second");
/// q.push_front("zeroth");
///
/// assert_eq!(q.len(), 3);
/// assert_eq!(q.pop_front().as_deref(), Some("zeroth"));
/// assert_eq!(q.pop_front().as_deref(), Some("first"));
/// assert_eq!(q.pop_front().as_deref(), Some("second"));
/// assert!(q.pop_front().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StrQueue {
    nodes: Slab<Node>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for StrQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl StrQueue {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` elements before the
    /// arena grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
        }
    }

    /// Removes every element, releasing each payload and node.
    ///
    /// The arena keeps its capacity for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = usize::NONE;
        self.tail = usize::NONE;
        self.len = 0;
    }

    /// Returns the number of elements in the queue. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts a copy of `value` at the head of the queue.
    ///
    /// The string is copied into a fresh exact-fit allocation; the caller
    /// keeps ownership of `value`. An empty string is stored as an absent
    /// payload (no copy made) and pops back out as `""`.
    #[inline]
    pub fn push_front(&mut self, value: &str) {
        let key = self.nodes.insert(Node::new(value));
        self.nodes[key].next = self.head;
        self.head = key;
        if self.tail.is_none() {
            self.tail = key;
        }
        self.len += 1;
    }

    /// Inserts a copy of `value` at the tail of the queue.
    ///
    /// Same copy semantics as [`push_front`](Self::push_front). The new
    /// tail's `next` stays the sentinel, so the chain cannot form a cycle.
    #[inline]
    pub fn push_back(&mut self, value: &str) {
        let key = self.nodes.insert(Node::new(value));
        if self.head.is_none() {
            self.head = key;
        } else {
            self.nodes[self.tail].next = key;
        }
        self.tail = key;
        self.len += 1;
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the head element and returns its payload.
    ///
    /// Returns `None` if the queue is empty. An absent payload (inserted as
    /// `""`) is returned as an empty string.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Box<str>> {
        if self.head.is_none() {
            return None;
        }
        let node = self.detach_head();
        Some(node.value.unwrap_or_default())
    }

    /// Removes the head element, copying its payload into `out`.
    ///
    /// Returns `false` if the queue is empty (no mutation). Otherwise the
    /// element is removed and `true` is returned, with the payload copied
    /// under the truncate-and-terminate contract:
    ///
    /// - at most `out.len() - 1` payload bytes are copied, followed by a
    ///   single `0` byte; nothing is ever written past `out.len()`;
    /// - truncation is byte-wise and may land inside a multi-byte UTF-8
    ///   sequence (the destination is raw bytes, not `str`);
    /// - if `out` is empty there is no room for the terminator and nothing
    ///   is written;
    /// - if the payload is absent, `out` is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use strq::StrQueue;
    ///
    /// let mut q = StrQueue::new();
    /// q.push_back("hello");
    ///
    /// let mut buf = [0u8; 3];
    /// assert!(q.pop_front_into(&mut buf));
    /// assert_eq!(&buf, b"he\0");
    /// ```
    pub fn pop_front_into(&mut self, out: &mut [u8]) -> bool {
        if self.head.is_none() {
            return false;
        }
        let node = self.detach_head();
        if let Some(value) = node.value {
            if !out.is_empty() {
                let n = value.len().min(out.len() - 1);
                out[..n].copy_from_slice(&value.as_bytes()[..n]);
                out[n] = 0;
            }
        }
        true
    }

    /// Unlinks the head node and releases its arena slot.
    ///
    /// Caller must have checked the queue is non-empty.
    fn detach_head(&mut self) -> Node {
        let node = self.nodes.remove(self.head);
        self.head = node.next;
        if self.head.is_none() {
            // Last node out: tail must be cleared together with head.
            self.tail = usize::NONE;
        }
        self.len -= 1;
        node
    }

    // ========================================================================
    // Rearrangement
    // ========================================================================

    /// Reverses the chain in place.
    ///
    /// No effect on an empty queue. A single O(n) three-key walk re-points
    /// each node's `next` at its predecessor; no node is allocated or freed.
    /// The former tail becomes the head and the former head the tail.
    pub fn reverse(&mut self) {
        if self.head.is_none() {
            return;
        }
        let mut prev = usize::NONE;
        let mut curr = self.head;
        self.tail = self.head;
        while curr.is_some() {
            let next = self.nodes[curr].next;
            self.nodes[curr].next = prev;
            prev = curr;
            curr = next;
        }
        self.head = prev;
    }

    /// Sorts the queue ascending under case-insensitive lexicographic order.
    ///
    /// No effect on a queue with fewer than two elements. Runs a recursive
    /// merge sort directly on the chain: split at the midpoint via a
    /// slow/fast walk, sort each half, merge by relinking. Equal elements
    /// keep their relative order (the merge takes the left operand on
    /// equality). No node is allocated or freed.
    ///
    /// Comparison folds ASCII letters to lowercase and compares byte-wise;
    /// an absent payload sorts as `""`.
    ///
    /// # Example
    ///
    /// ```
    /// use strq::StrQueue;
    ///
    /// let mut q = StrQueue::new();
    /// q.push_back("banana");
    /// q.push_back("Apple");
    /// q.push_back("cherry");
    ///
    /// q.sort();
    ///
    /// assert_eq!(q.pop_front().as_deref(), Some("Apple"));
    /// assert_eq!(q.pop_front().as_deref(), Some("banana"));
    /// assert_eq!(q.pop_front().as_deref(), Some("cherry"));
    /// ```
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        self.head = sort::merge_sort(&mut self.nodes, self.head);

        // The merge rewires the chain; walk to the new last node.
        let mut tail = self.head;
        while self.nodes[tail].next.is_some() {
            tail = self.nodes[tail].next;
        }
        self.tail = tail;
    }
}
