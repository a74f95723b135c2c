//! Singly-linked string queue with in-place reversal and stable merge sort.
//!
//! `strq` stores owned strings in a chain of arena-backed nodes: push at
//! either end, pop at the head. Links between nodes are slab keys, so
//! "rewiring a next pointer" is an index store rather than pointer surgery,
//! and reversal and sorting work in place without fighting single ownership.
//!
//! # Design
//!
//! ```text
//! StrQueue
//!   ├── Slab<Node>   - arena, owns every node (and its Box<str> payload)
//!   ├── head / tail  - sentinel keys into the arena
//!   └── len          - tracked count, O(1) size queries
//! ```
//!
//! - **Exact-fit copies**: each payload is a `Box<str>` sized to its string.
//!   Inputs are copied on insertion, never aliased.
//! - **Sentinel links**: `usize::MAX` means "no node", keeping a link one
//!   word instead of `Option<usize>`.
//! - **Relink, don't reallocate**: `reverse` and `sort` move no payloads and
//!   free no nodes; they only rewrite `next` keys.
//!
//! # Example
//!
//! ```
//! use strq::StrQueue;
//!
//! let mut q = StrQueue::new();
//! q.push_back("banana");
//! q.push_back("Apple");
//! q.push_back("cherry");
//! assert_eq!(q.len(), 3);
//!
//! // Ascending, case-insensitive, stable.
//! q.sort();
//! assert_eq!(q.pop_front().as_deref(), Some("Apple"));
//!
//! // In-place reversal.
//! q.reverse();
//! assert_eq!(q.pop_front().as_deref(), Some("cherry"));
//! assert_eq!(q.pop_front().as_deref(), Some("banana"));
//! assert!(q.is_empty());
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `push_front` / `push_back` | O(1) | copies the input string |
//! | `pop_front` / `pop_front_into` | O(1) | releases the node and payload |
//! | `len` | O(1) | tracked count |
//! | `reverse` | O(n) | three-key walk, in place |
//! | `sort` | O(n log n) | merge sort on the chain, stable |
//!
//! # Single ownership
//!
//! A queue has exactly one logical owner; there is no internal locking.
//! Callers needing concurrent access impose their own synchronization
//! around the queue.

#![warn(missing_docs)]

mod key;
pub mod queue;
mod sort;

pub use queue::StrQueue;
