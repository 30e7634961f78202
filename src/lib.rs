//! # sync-btree
//!
//! A generic, in-memory B-tree with point search, upsert and keyed deletion,
//! guarded by a single reader/writer lock for safe concurrent reads.
//!
//! ## Overview
//!
//! - **Search**: shared-lock lookups returning a cloned value or a read guard
//! - **Insert**: upsert with top-down pre-emptive node splits
//! - **Delete**: removal with sibling rotation, merge and root shrink
//! - **Diagnostics**: structured `tracing` events and an invariant checker
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`BTreeConfig`]
//!
//! ## Example
//!
//! ```rust
//! use sync_btree::prelude::*;
//!
//! let tree = BTree::new(2);
//! for (index, key) in ["F", "S", "Q", "K", "C"].into_iter().enumerate() {
//!     tree.insert(key, index);
//! }
//!
//! assert_eq!(tree.search("Q"), Some(2));
//! assert_eq!(tree.delete("Q"), Some(2));
//! assert_eq!(tree.search("Q"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use sync_btree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::{BTree, BTreeConfig, InvalidDegreeError, InvariantViolation};
