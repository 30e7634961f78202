//! Error types for the B-tree.
//!
//! Two kinds of failure exist:
//!
//! - [`InvalidDegreeError`]: a tree was requested with a minimum degree below
//!   two, or one so large that the node capacity overflows. No tree is
//!   produced.
//! - [`InvariantViolation`]: reported by [`BTree::check_invariants`] when the
//!   structure is not a valid B-tree. Valid use of the public API never
//!   produces one.
//!
//! A missing key is not an error; lookups and deletions return `None`.
//!
//! [`BTree::check_invariants`]: super::BTree::check_invariants

use super::config::{MINIMUM_DEGREE_LOWER_BOUND, MINIMUM_DEGREE_UPPER_BOUND};

/// Represents a request for a tree with a minimum degree outside
/// `2..=usize::MAX / 2`.
///
/// # Examples
///
/// ```rust
/// use sync_btree::tree::InvalidDegreeError;
///
/// let error = InvalidDegreeError { minimum_degree: 1 };
/// assert_eq!(
///     format!("{}", error),
///     "minimum degree must be greater than 1, got 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDegreeError {
    /// The rejected minimum degree.
    pub minimum_degree: usize,
}

impl std::fmt::Display for InvalidDegreeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.minimum_degree < MINIMUM_DEGREE_LOWER_BOUND {
            write!(
                formatter,
                "minimum degree must be greater than 1, got {}",
                self.minimum_degree
            )
        } else {
            write!(
                formatter,
                "minimum degree must be at most {MINIMUM_DEGREE_UPPER_BOUND}, got {}",
                self.minimum_degree
            )
        }
    }
}

impl std::error::Error for InvalidDegreeError {}

/// Describes the first broken structural invariant found in a tree.
///
/// `depth` is the distance from the root (the root is at depth 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node holds more than `2t - 1` entries.
    Overflow {
        /// Depth of the offending node.
        depth: usize,
        /// Number of entries found.
        entries: usize,
        /// Largest allowed number of entries.
        maximum: usize,
    },
    /// A non-root node holds fewer than `t - 1` entries.
    Underflow {
        /// Depth of the offending node.
        depth: usize,
        /// Number of entries found.
        entries: usize,
        /// Smallest allowed number of entries.
        minimum: usize,
    },
    /// Keys inside a node are not strictly ascending.
    UnsortedEntries {
        /// Depth of the offending node.
        depth: usize,
    },
    /// An internal node does not have exactly one more child than entries.
    ChildCountMismatch {
        /// Depth of the offending node.
        depth: usize,
        /// Number of entries found.
        entries: usize,
        /// Number of children found.
        children: usize,
    },
    /// A key lies outside the range bounded by its parent's separators.
    KeyOutOfRange {
        /// Depth of the offending node.
        depth: usize,
    },
    /// Two leaves sit at different depths.
    UnevenLeafDepth {
        /// Depth of the first leaf reached.
        expected: usize,
        /// Depth of the offending leaf.
        found: usize,
    },
    /// The stored entry count disagrees with the entries in the nodes.
    LengthMismatch {
        /// The count kept by the tree handle.
        recorded: usize,
        /// The number of entries actually stored.
        counted: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow {
                depth,
                entries,
                maximum,
            } => write!(
                formatter,
                "node at depth {depth} holds {entries} entries, maximum is {maximum}"
            ),
            Self::Underflow {
                depth,
                entries,
                minimum,
            } => write!(
                formatter,
                "node at depth {depth} holds {entries} entries, minimum is {minimum}"
            ),
            Self::UnsortedEntries { depth } => {
                write!(formatter, "node at depth {depth} has unsorted keys")
            }
            Self::ChildCountMismatch {
                depth,
                entries,
                children,
            } => write!(
                formatter,
                "internal node at depth {depth} has {entries} entries but {children} children"
            ),
            Self::KeyOutOfRange { depth } => write!(
                formatter,
                "node at depth {depth} holds a key outside its separator range"
            ),
            Self::UnevenLeafDepth { expected, found } => write!(
                formatter,
                "leaf found at depth {found}, other leaves are at depth {expected}"
            ),
            Self::LengthMismatch { recorded, counted } => write!(
                formatter,
                "tree records {recorded} entries but holds {counted}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
