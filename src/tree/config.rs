//! Construction parameters for [`BTree`](super::BTree).

use super::InvalidDegreeError;

/// Minimum degree used by [`BTreeConfig::default`].
///
/// Nodes then hold between 5 and 11 entries, the same fan-out as the
/// standard library's `BTreeMap`.
pub const DEFAULT_MINIMUM_DEGREE: usize = 6;

/// Smallest minimum degree a tree accepts.
pub const MINIMUM_DEGREE_LOWER_BOUND: usize = 2;

/// Largest minimum degree a tree accepts; `2t - 1` must fit in a `usize`.
pub const MINIMUM_DEGREE_UPPER_BOUND: usize = usize::MAX / 2;

/// Node capacity `2t - 1` for a minimum degree `t`.
#[inline]
pub(crate) const fn max_entries(minimum_degree: usize) -> usize {
    minimum_degree.saturating_mul(2).saturating_sub(1)
}

/// Fill level `t - 1` every non-root node keeps for a minimum degree `t`.
#[inline]
pub(crate) const fn min_entries(minimum_degree: usize) -> usize {
    minimum_degree.saturating_sub(1)
}

/// Configuration for a [`BTree`](super::BTree).
///
/// The minimum degree `t` fixes the node capacity: every node except the root
/// holds between `t - 1` and `2t - 1` entries.
///
/// # Examples
///
/// ```rust
/// use sync_btree::tree::{BTree, BTreeConfig};
///
/// let config = BTreeConfig::default().with_minimum_degree(3);
/// let tree: BTree<i32, &str> = BTree::with_config(config).unwrap();
/// assert_eq!(tree.minimum_degree(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BTreeConfig {
    /// The minimum degree `t`. Must be at least 2.
    pub minimum_degree: usize,
}

impl BTreeConfig {
    /// Creates a configuration with the given minimum degree.
    ///
    /// The value is not checked here; see [`BTreeConfig::validate`].
    #[inline]
    #[must_use]
    pub const fn new(minimum_degree: usize) -> Self {
        Self { minimum_degree }
    }

    /// Returns this configuration with a different minimum degree.
    #[inline]
    #[must_use]
    pub const fn with_minimum_degree(mut self, minimum_degree: usize) -> Self {
        self.minimum_degree = minimum_degree;
        self
    }

    /// Largest number of entries a node may hold (`2t - 1`).
    #[inline]
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        max_entries(self.minimum_degree)
    }

    /// Smallest number of entries a non-root node may hold (`t - 1`).
    #[inline]
    #[must_use]
    pub const fn min_entries(&self) -> usize {
        min_entries(self.minimum_degree)
    }

    /// Checks that the minimum degree lies between
    /// [`MINIMUM_DEGREE_LOWER_BOUND`] and [`MINIMUM_DEGREE_UPPER_BOUND`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDegreeError`] if `minimum_degree < 2` or if the node
    /// capacity `2t - 1` would overflow a `usize`.
    pub const fn validate(&self) -> Result<(), InvalidDegreeError> {
        if self.minimum_degree < MINIMUM_DEGREE_LOWER_BOUND
            || self.minimum_degree > MINIMUM_DEGREE_UPPER_BOUND
        {
            Err(InvalidDegreeError {
                minimum_degree: self.minimum_degree,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_DEGREE)
    }
}
