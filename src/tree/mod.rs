//! In-memory B-tree with a coarse reader/writer lock.
//!
//! This module provides [`BTree`], an ordered key/value container that keeps
//! itself balanced through node splits, rotations and merges:
//!
//! - [`BTree`]: the tree handle, safe to share between threads
//! - [`BTreeConfig`]: construction parameters (the minimum degree)
//! - [`InvalidDegreeError`]: returned when the minimum degree is out of range
//! - [`InvariantViolation`]: reported by [`BTree::check_invariants`]
//!
//! # Structure
//!
//! With minimum degree `t`:
//!
//! - every node except the root holds between `t - 1` and `2t - 1` entries;
//! - an internal node with `n` entries has `n + 1` children, and every key in
//!   child `i` lies between entries `i - 1` and `i`;
//! - all leaves are at the same depth.
//!
//! Insertion splits full nodes on the way down, so a leaf always has room.
//! Deletion tops up thin nodes on the way down (borrowing from a sibling or
//! merging with one), so removing from the bottom never underflows. The tree
//! grows and shrinks only at the root.
//!
//! # Examples
//!
//! ```rust
//! use sync_btree::tree::BTree;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let tree = Arc::new(BTree::new(3));
//!
//! let writers: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let tree = Arc::clone(&tree);
//!         thread::spawn(move || {
//!             for key in (worker * 100)..(worker * 100 + 100) {
//!                 tree.insert(key, key * 2);
//!             }
//!         })
//!     })
//!     .collect();
//! for writer in writers {
//!     writer.join().unwrap();
//! }
//!
//! assert_eq!(tree.len(), 400);
//! assert_eq!(tree.search(&250), Some(500));
//! assert!(tree.check_invariants().is_ok());
//! ```

mod btree;
mod config;
mod entry;
mod error;
mod node;

pub use btree::BTree;
pub use config::BTreeConfig;
pub use config::DEFAULT_MINIMUM_DEGREE;
pub use config::MINIMUM_DEGREE_LOWER_BOUND;
pub use config::MINIMUM_DEGREE_UPPER_BOUND;
pub use error::InvalidDegreeError;
pub use error::InvariantViolation;
