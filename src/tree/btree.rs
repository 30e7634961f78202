//! The thread-safe B-tree handle.

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use parking_lot::RwLock;

use super::config::{BTreeConfig, DEFAULT_MINIMUM_DEGREE};
use super::node::Node;
use super::{InvalidDegreeError, InvariantViolation};

// =============================================================================
// Tree State
// =============================================================================

/// Everything guarded by the tree's lock.
struct TreeState<K, V> {
    root: Node<K, V>,
    length: usize,
}

impl<K, V> TreeState<K, V> {
    const fn new() -> Self {
        Self {
            root: Node::new(),
            length: 0,
        }
    }

    fn insert(&mut self, key: K, value: V, minimum_degree: usize) -> Option<V>
    where
        K: Ord,
    {
        // An existing key is overwritten without touching the shape.
        if let Some(slot) = self.root.search_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        if self.root.is_full(minimum_degree) {
            let old_root = mem::take(&mut self.root);
            self.root.children.push(old_root);
            self.root.split_child(0, minimum_degree);
            tracing::trace!(height = self.root.height(), "grew new root");
        }

        let previous = self.root.insert_non_full(key, value, minimum_degree);
        if previous.is_none() {
            self.length += 1;
        }
        previous
    }

    fn delete<Q>(&mut self, key: &Q, minimum_degree: usize) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.root.remove(key, minimum_degree);

        if self.root.entries.is_empty()
            && self.root.children.len() == 1
            && let Some(child) = self.root.children.pop()
        {
            self.root = child;
            tracing::trace!(height = self.root.height(), "shrank root");
        }

        if removed.is_some() {
            self.length -= 1;
        }
        removed
    }
}

// =============================================================================
// BTree Definition
// =============================================================================

/// An in-memory B-tree guarded by a single reader/writer lock.
///
/// `BTree` maps keys to values in a balanced tree of nodes. Every node except
/// the root holds between `t - 1` and `2t - 1` entries, where `t` is the
/// minimum degree chosen at construction, and all leaves sit at the same
/// depth.
///
/// All methods take `&self`. Lookups take the lock in shared mode and may run
/// concurrently; [`insert`](Self::insert), [`delete`](Self::delete) and
/// [`clear`](Self::clear) take it exclusively, so mutations are serialized.
/// Share a tree between threads with [`std::sync::Arc`].
///
/// # Time Complexity
///
/// | Operation              | Complexity    |
/// |------------------------|---------------|
/// | `new`                  | O(1)          |
/// | `search`/`search_with` | O(t log_t N)  |
/// | `insert`               | O(t log_t N)  |
/// | `delete`               | O(t log_t N)  |
/// | `len`                  | O(1)          |
/// | `height`               | O(log_t N)    |
///
/// # Examples
///
/// ```rust
/// use sync_btree::BTree;
///
/// let tree = BTree::new(2);
/// tree.insert("b", 2);
/// tree.insert("a", 1);
///
/// assert_eq!(tree.search("a"), Some(1));
/// assert_eq!(tree.delete("b"), Some(2));
/// assert_eq!(tree.search("b"), None);
/// ```
pub struct BTree<K, V> {
    minimum_degree: usize,
    state: RwLock<TreeState<K, V>>,
}

static_assertions::assert_impl_all!(BTree<String, Vec<u8>>: Send, Sync);

impl<K, V> BTree<K, V> {
    /// Creates an empty tree with the given minimum degree.
    ///
    /// # Panics
    ///
    /// Panics if `minimum_degree < 2` or `minimum_degree > usize::MAX / 2`.
    /// Use [`BTree::try_new`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sync_btree::BTree;
    ///
    /// let tree: BTree<i32, String> = BTree::new(3);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.minimum_degree(), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use sync_btree::BTree;
    ///
    /// let _tree: BTree<i32, String> = BTree::new(1);
    /// ```
    #[must_use]
    pub fn new(minimum_degree: usize) -> Self {
        match Self::try_new(minimum_degree) {
            Ok(tree) => tree,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an empty tree, rejecting a minimum degree outside
    /// `2..=usize::MAX / 2`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDegreeError`] if `minimum_degree < 2` or the node
    /// capacity `2t - 1` would overflow a `usize`.
    pub fn try_new(minimum_degree: usize) -> Result<Self, InvalidDegreeError> {
        Self::with_config(BTreeConfig::new(minimum_degree))
    }

    /// Creates an empty tree from a [`BTreeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDegreeError`] if the configured minimum degree is
    /// rejected by [`BTreeConfig::validate`].
    pub fn with_config(config: BTreeConfig) -> Result<Self, InvalidDegreeError> {
        config.validate()?;
        tracing::debug!(minimum_degree = config.minimum_degree, "created b-tree");
        Ok(Self::with_valid_degree(config.minimum_degree))
    }

    fn with_valid_degree(minimum_degree: usize) -> Self {
        Self {
            minimum_degree,
            state: RwLock::new(TreeState::new()),
        }
    }

    /// Returns the minimum degree `t` fixed at construction.
    #[inline]
    #[must_use]
    pub const fn minimum_degree(&self) -> usize {
        self.minimum_degree
    }

    /// Returns the configuration this tree was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> BTreeConfig {
        BTreeConfig::new(self.minimum_degree)
    }

    /// Returns the number of entries in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().length
    }

    /// Returns `true` if the tree holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of node levels, counting the root. An empty tree
    /// has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        self.state.read().root.height()
    }

    /// Removes every entry, leaving an empty leaf root.
    pub fn clear(&self) {
        let mut state = self.state.write();
        *state = TreeState::new();
        tracing::trace!("cleared b-tree");
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Applies `f` to the value stored under `key` and returns its result,
    /// or `None` if the key is absent. Nothing is cloned.
    ///
    /// The shared lock is held only while `f` runs and is released before
    /// this returns. `f` must not call back into the same tree: a writer
    /// queued in the meantime would block the nested call forever.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sync_btree::BTree;
    ///
    /// let tree = BTree::new(2);
    /// tree.insert(1, String::from("one"));
    ///
    /// assert_eq!(tree.search_with(&1, String::len), Some(3));
    /// assert_eq!(tree.search_with(&2, String::len), None);
    /// ```
    pub fn search_with<Q, R, F>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnOnce(&V) -> R,
    {
        self.state.read().root.search(key).map(f)
    }

    /// Returns a clone of the value stored under `key`, or `None` if the key
    /// is absent.
    ///
    /// A stored value that is itself zero, empty or `None` is returned as
    /// `Some(..)` and is never confused with absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sync_btree::BTree;
    ///
    /// let tree = BTree::new(2);
    /// tree.insert("zero", 0);
    ///
    /// assert_eq!(tree.search("zero"), Some(0));
    /// assert_eq!(tree.search("one"), None);
    /// ```
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.state.read().root.search(key).cloned()
    }

    /// Returns `true` if the tree holds an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.state.read().root.search(key).is_some()
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already present its value is overwritten in place, the
    /// tree shape is left untouched, and the previous value is returned.
    /// Otherwise the entry is added, splitting full nodes on the way down, and
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sync_btree::BTree;
    ///
    /// let tree = BTree::new(2);
    /// assert_eq!(tree.insert("k", 1), None);
    /// assert_eq!(tree.insert("k", 2), Some(1));
    /// assert_eq!(tree.search("k"), Some(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.state.write().insert(key, value, self.minimum_degree)
    }

    /// Removes the entry for `key` and returns its value, or `None` if the key
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sync_btree::BTree;
    ///
    /// let tree = BTree::new(2);
    /// tree.insert(7, "seven");
    ///
    /// assert_eq!(tree.delete(&7), Some("seven"));
    /// assert_eq!(tree.delete(&7), None);
    /// ```
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.state.write().delete(key, self.minimum_degree)
    }

    /// Walks the whole tree and checks every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let state = self.state.read();
        let counted = state
            .root
            .validate(self.minimum_degree, 0, None, None, &mut None)?;
        if counted == state.length {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch {
                recorded: state.length,
                counted,
            })
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V> Default for BTree<K, V> {
    /// Creates an empty tree with [`DEFAULT_MINIMUM_DEGREE`].
    fn default() -> Self {
        Self::with_valid_degree(DEFAULT_MINIMUM_DEGREE)
    }
}

impl<K: Ord, V> Extend<(K, V)> for BTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let minimum_degree = self.minimum_degree;
        let state = self.state.get_mut();
        for (key, value) in iter {
            state.insert(key, value, minimum_degree);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V> fmt::Debug for BTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("BTree");
        debug.field("minimum_degree", &self.minimum_degree);
        match self.state.try_read() {
            Some(state) => debug.field("len", &state.length),
            None => debug.field("len", &format_args!("<locked>")),
        };
        debug.finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
impl<K, V> BTree<K, V> {
    /// Builds a tree around a hand-made root.
    fn from_root(minimum_degree: usize, root: Node<K, V>) -> Self
    where
        K: Ord,
    {
        let length = root
            .validate(minimum_degree, 0, None, None, &mut None)
            .expect("fixture must be a valid tree");
        Self {
            minimum_degree,
            state: RwLock::new(TreeState { root, length }),
        }
    }

    fn root(&self) -> Node<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.state.read().root.clone()
    }
}
