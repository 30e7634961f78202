//! Node primitives of the B-tree.
//!
//! A [`Node`] owns its entries and its children directly. Every restructuring
//! step (split, rotation, merge) is performed by the parent on its own
//! `children` vector, so no node ever refers to a sibling or to its parent.
//!
//! All functions taking a `minimum_degree` expect the caller to pass the
//! tree's validated degree `t >= 2`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use super::InvariantViolation;
use super::config::{max_entries, min_entries};
use super::entry::Entry;

/// A bounded, sorted run of entries plus, for internal nodes, one more child
/// than entries. A node without children is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<K, V> {
    pub(crate) entries: Vec<Entry<K, V>>,
    pub(crate) children: Vec<Self>,
}

impl<K, V> Node<K, V> {
    /// Creates an empty leaf.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub(crate) fn is_full(&self, minimum_degree: usize) -> bool {
        self.entries.len() == max_entries(minimum_degree)
    }

    /// `true` if the node can give up an entry and stay at or above `t - 1`.
    #[inline]
    fn has_spare_entry(&self, minimum_degree: usize) -> bool {
        self.entries.len() >= minimum_degree
    }

    #[inline]
    fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of levels from this node down to its leaves, inclusive.
    pub(crate) fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while let Some(child) = node.children.first() {
            height += 1;
            node = child;
        }
        height
    }

    /// Finds `key` among this node's entries: `Ok(index)` when present,
    /// otherwise `Err(index)` of the child whose range covers it.
    #[inline]
    pub(crate) fn locate<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|entry| entry.key.borrow().cmp(key))
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub(crate) fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self;
        loop {
            match node.locate(key) {
                Ok(index) => return Some(&node.entries[index].value),
                Err(_) if node.is_leaf() => return None,
                Err(index) => node = &node.children[index],
            }
        }
    }

    pub(crate) fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.locate(key) {
            Ok(index) => Some(&mut self.entries[index].value),
            Err(_) if self.is_leaf() => None,
            Err(index) => self.children[index].search_mut(key),
        }
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Splits the full child at `index` around its median entry.
    ///
    /// The child keeps its lower `t - 1` entries, a new right sibling takes the
    /// upper `t - 1` entries (and upper `t` children), and the median moves up
    /// into this node at `index`.
    pub(crate) fn split_child(&mut self, index: usize, minimum_degree: usize) {
        let child = &mut self.children[index];
        let mut upper_entries = child.entries.split_off(min_entries(minimum_degree));
        let median = upper_entries.remove(0);
        let upper_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(minimum_degree)
        };

        self.entries.insert(index, median);
        self.children.insert(
            index + 1,
            Self {
                entries: upper_entries,
                children: upper_children,
            },
        );
        tracing::trace!(index, "split full child");
    }

    /// Inserts into a node that is known not to be full, splitting full
    /// children before descending into them. Returns the previous value when
    /// the key was already present.
    pub(crate) fn insert_non_full(&mut self, key: K, value: V, minimum_degree: usize) -> Option<V>
    where
        K: Ord,
    {
        let mut index = match self.locate(&key) {
            Ok(index) => return Some(self.entries[index].replace_value(value)),
            Err(index) => index,
        };

        if self.is_leaf() {
            self.entries.insert(index, Entry::new(key, value));
            return None;
        }

        if self.children[index].is_full(minimum_degree) {
            self.split_child(index, minimum_degree);
            match key.cmp(&self.entries[index].key) {
                Ordering::Less => {}
                Ordering::Equal => return Some(self.entries[index].replace_value(value)),
                Ordering::Greater => index += 1,
            }
        }

        self.children[index].insert_non_full(key, value, minimum_degree)
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Removes `key` from the subtree rooted here.
    ///
    /// Every child is topped up to at least `t` entries before the descent
    /// enters it, so the removal at the bottom never leaves a node short. This
    /// node itself may drop to zero entries only when it is the root; the
    /// caller promotes its single child in that case.
    pub(crate) fn remove<Q>(&mut self, key: &Q, minimum_degree: usize) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.locate(key) {
            Ok(index) if self.is_leaf() => Some(self.entries.remove(index).value),
            Ok(index) => self.remove_from_internal(index, key, minimum_degree),
            Err(_) if self.is_leaf() => None,
            Err(index) => {
                let index = self.fill_child(index, minimum_degree);
                self.children[index].remove(key, minimum_degree)
            }
        }
    }

    fn remove_from_internal<Q>(&mut self, index: usize, key: &Q, minimum_degree: usize) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.children[index].has_spare_entry(minimum_degree) {
            let predecessor = self.children[index].remove_max(minimum_degree)?;
            Some(mem::replace(&mut self.entries[index], predecessor).value)
        } else if self.children[index + 1].has_spare_entry(minimum_degree) {
            let successor = self.children[index + 1].remove_min(minimum_degree)?;
            Some(mem::replace(&mut self.entries[index], successor).value)
        } else {
            self.merge_children(index);
            self.children[index].remove(key, minimum_degree)
        }
    }

    /// Removes the largest entry of the subtree rooted here.
    fn remove_max(&mut self, minimum_degree: usize) -> Option<Entry<K, V>> {
        if self.is_leaf() {
            return self.entries.pop();
        }
        let index = self.fill_child(self.children.len() - 1, minimum_degree);
        self.children[index].remove_max(minimum_degree)
    }

    /// Removes the smallest entry of the subtree rooted here.
    fn remove_min(&mut self, minimum_degree: usize) -> Option<Entry<K, V>> {
        if self.is_leaf() {
            return self.has_entries().then(|| self.entries.remove(0));
        }
        let index = self.fill_child(0, minimum_degree);
        self.children[index].remove_min(minimum_degree)
    }

    /// Makes sure the child at `index` holds at least `t` entries, borrowing
    /// from a sibling or merging with one. Returns the index of the child
    /// that now covers the original child's key range.
    fn fill_child(&mut self, index: usize, minimum_degree: usize) -> usize {
        if self.children[index].has_spare_entry(minimum_degree) {
            return index;
        }

        let has_left = index > 0;
        let has_right = index + 1 < self.children.len();

        if has_left && self.children[index - 1].has_spare_entry(minimum_degree) {
            self.rotate_from_left(index);
            index
        } else if has_right && self.children[index + 1].has_spare_entry(minimum_degree) {
            self.rotate_from_right(index);
            index
        } else if has_left {
            self.merge_children(index - 1);
            index - 1
        } else {
            self.merge_children(index);
            index
        }
    }

    /// Moves the separator before `index` down to the front of that child and
    /// the left sibling's last entry up in its place. An internal sibling also
    /// hands over its last child.
    pub(crate) fn rotate_from_left(&mut self, index: usize) {
        debug_assert!(
            0 < index && index < self.children.len(),
            "child {index} has no left sibling"
        );
        let (left_siblings, rest) = self.children.split_at_mut(index);
        let left = &mut left_siblings[index - 1];
        let child = &mut rest[0];
        debug_assert!(left.has_entries(), "left sibling of child {index} is empty");
        let borrowed = left.entries.remove(left.entries.len() - 1);

        let separator = mem::replace(&mut self.entries[index - 1], borrowed);
        child.entries.insert(0, separator);
        if let Some(grandchild) = left.children.pop() {
            child.children.insert(0, grandchild);
        }
        tracing::trace!(index, direction = "from_left", "rotated entry into child");
    }

    /// Moves the separator after `index` down to the end of that child and the
    /// right sibling's first entry up in its place. An internal sibling also
    /// hands over its first child.
    pub(crate) fn rotate_from_right(&mut self, index: usize) {
        debug_assert!(
            index + 1 < self.children.len(),
            "child {index} has no right sibling"
        );
        let (head, tail) = self.children.split_at_mut(index + 1);
        let child = &mut head[index];
        let right = &mut tail[0];
        debug_assert!(right.has_entries(), "right sibling of child {index} is empty");

        let borrowed = right.entries.remove(0);
        let separator = mem::replace(&mut self.entries[index], borrowed);
        child.entries.push(separator);
        if !right.is_leaf() {
            child.children.push(right.children.remove(0));
        }
        tracing::trace!(index, direction = "from_right", "rotated entry into child");
    }

    /// Folds the child at `index + 1` and the separator between them into the
    /// child at `index`.
    pub(crate) fn merge_children(&mut self, index: usize) {
        let separator = self.entries.remove(index);
        let right = self.children.remove(index + 1);
        let left = &mut self.children[index];

        left.entries.push(separator);
        left.entries.extend(right.entries);
        left.children.extend(right.children);
        tracing::trace!(index, "merged children");
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Checks the subtree rooted here and returns the number of entries in it.
    ///
    /// `lower` and `upper` are the exclusive key bounds inherited from the
    /// ancestors' separators; `leaf_depth` records the depth of the first leaf
    /// reached so later leaves can be compared against it.
    pub(crate) fn validate(
        &self,
        minimum_degree: usize,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        leaf_depth: &mut Option<usize>,
    ) -> Result<usize, InvariantViolation>
    where
        K: Ord,
    {
        let entries = self.entries.len();
        let maximum = max_entries(minimum_degree);
        let minimum = min_entries(minimum_degree);

        if entries > maximum {
            return Err(InvariantViolation::Overflow {
                depth,
                entries,
                maximum,
            });
        }
        if depth > 0 && entries < minimum {
            return Err(InvariantViolation::Underflow {
                depth,
                entries,
                minimum,
            });
        }
        if self
            .entries
            .windows(2)
            .any(|pair| pair[0].key >= pair[1].key)
        {
            return Err(InvariantViolation::UnsortedEntries { depth });
        }
        let out_of_range = self.entries.iter().any(|entry| {
            lower.is_some_and(|bound| entry.key <= *bound)
                || upper.is_some_and(|bound| entry.key >= *bound)
        });
        if out_of_range {
            return Err(InvariantViolation::KeyOutOfRange { depth });
        }

        if self.is_leaf() {
            return match *leaf_depth {
                Some(expected) if expected != depth => Err(InvariantViolation::UnevenLeafDepth {
                    expected,
                    found: depth,
                }),
                Some(_) => Ok(entries),
                None => {
                    *leaf_depth = Some(depth);
                    Ok(entries)
                }
            };
        }

        if self.children.len() != entries + 1 {
            return Err(InvariantViolation::ChildCountMismatch {
                depth,
                entries,
                children: self.children.len(),
            });
        }

        let mut total = entries;
        for (index, child) in self.children.iter().enumerate() {
            let child_lower = if index == 0 {
                lower
            } else {
                Some(&self.entries[index - 1].key)
            };
            let child_upper = self.entries.get(index).map_or(upper, |entry| Some(&entry.key));
            total += child.validate(minimum_degree, depth + 1, child_lower, child_upper, leaf_depth)?;
        }
        Ok(total)
    }
}

impl<K, V> Default for Node<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::fixtures::{internal, keys, leaf};
    use super::*;
    use rstest::rstest;

    fn check(node: &Node<&'static str, i32>, minimum_degree: usize) -> Result<usize, InvariantViolation> {
        node.validate(minimum_degree, 0, None, None, &mut None)
    }

    #[rstest]
    #[case("B", Ok(0))]
    #[case("D", Ok(1))]
    #[case("A", Err(0))]
    #[case("C", Err(1))]
    #[case("E", Err(2))]
    fn test_locate(#[case] key: &str, #[case] expected: Result<usize, usize>) {
        let node = leaf(&[("B", 1), ("D", 2)]);
        assert_eq!(node.locate(key), expected);
    }

    #[rstest]
    fn test_new_node_is_empty_leaf() {
        let node: Node<i32, i32> = Node::new();
        assert!(node.is_leaf());
        assert!(node.entries.is_empty());
        assert_eq!(node.height(), 1);
    }

    #[rstest]
    fn test_search_descends_into_children() {
        let node = internal(&[("D", 4)], vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("F", 6)])]);
        assert_eq!(node.search("D"), Some(&4));
        assert_eq!(node.search("B"), Some(&2));
        assert_eq!(node.search("F"), Some(&6));
        assert_eq!(node.search("C"), None);
        assert_eq!(node.search("Z"), None);
    }

    #[rstest]
    fn test_search_mut_allows_overwrite() {
        let mut node = internal(&[("D", 4)], vec![leaf(&[("A", 1)]), leaf(&[("F", 6)])]);
        if let Some(value) = node.search_mut("F") {
            *value = 60;
        }
        assert_eq!(node.search("F"), Some(&60));
        assert!(node.search_mut("E").is_none());
    }

    #[rstest]
    fn test_split_child_of_leaf() {
        let mut parent = internal(&[], vec![leaf(&[("A", 1), ("B", 2), ("C", 3)])]);
        parent.split_child(0, 2);

        assert_eq!(parent, internal(&[("B", 2)], vec![leaf(&[("A", 1)]), leaf(&[("C", 3)])]));
    }

    #[rstest]
    fn test_split_child_moves_upper_children() {
        let full = internal(
            &[("B", 2), ("D", 4), ("F", 6)],
            vec![
                leaf(&[("A", 1)]),
                leaf(&[("C", 3)]),
                leaf(&[("E", 5)]),
                leaf(&[("G", 7)]),
            ],
        );
        let sibling = internal(&[("J", 10)], vec![leaf(&[("I", 9)]), leaf(&[("K", 11)])]);
        let mut parent = internal(&[("H", 8)], vec![full, sibling]);
        parent.split_child(0, 2);

        assert_eq!(keys(&parent), vec!["D", "H"]);
        assert_eq!(parent.children.len(), 3);
        assert_eq!(
            parent.children[0],
            internal(&[("B", 2)], vec![leaf(&[("A", 1)]), leaf(&[("C", 3)])])
        );
        assert_eq!(
            parent.children[1],
            internal(&[("F", 6)], vec![leaf(&[("E", 5)]), leaf(&[("G", 7)])])
        );
        assert_eq!(keys(&parent.children[2]), vec!["J"]);
        assert_eq!(check(&parent, 2), Ok(11));
    }

    #[rstest]
    fn test_insert_non_full_splits_before_descending() {
        let mut node = internal(
            &[("M", 13)],
            vec![leaf(&[("A", 1), ("B", 2), ("C", 3)]), leaf(&[("N", 14)])],
        );
        assert_eq!(node.insert_non_full("D", 4, 2), None);

        assert_eq!(keys(&node), vec!["B", "M"]);
        assert_eq!(keys(&node.children[1]), vec!["C", "D"]);
    }

    #[rstest]
    fn test_insert_non_full_overwrites_promoted_median() {
        let mut node = internal(
            &[("M", 13)],
            vec![leaf(&[("A", 1), ("B", 2), ("C", 3)]), leaf(&[("N", 14)])],
        );
        assert_eq!(node.insert_non_full("B", 20, 2), Some(2));
        assert_eq!(node.search("B"), Some(&20));
        assert_eq!(check(&node, 2), Ok(5));
    }

    #[rstest]
    fn test_rotate_from_left_between_leaves() {
        let mut node = internal(&[("C", 3)], vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("D", 4)])]);
        node.rotate_from_left(1);

        assert_eq!(node, internal(&[("B", 2)], vec![leaf(&[("A", 1)]), leaf(&[("C", 3), ("D", 4)])]));
    }

    #[rstest]
    fn test_rotate_from_right_between_leaves() {
        let mut node = internal(&[("B", 2)], vec![leaf(&[("A", 1)]), leaf(&[("C", 3), ("D", 4)])]);
        node.rotate_from_right(0);

        assert_eq!(node, internal(&[("C", 3)], vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("D", 4)])]));
    }

    #[rstest]
    fn test_rotate_from_left_moves_grandchild() {
        let left = internal(
            &[("B", 2), ("D", 4)],
            vec![leaf(&[("A", 1)]), leaf(&[("C", 3)]), leaf(&[("E", 5)])],
        );
        let right = internal(&[("H", 8)], vec![leaf(&[("G", 7)]), leaf(&[("I", 9)])]);
        let mut node = internal(&[("F", 6)], vec![left, right]);
        node.rotate_from_left(1);

        assert_eq!(keys(&node), vec!["D"]);
        assert_eq!(
            node.children[1],
            internal(
                &[("F", 6), ("H", 8)],
                vec![leaf(&[("E", 5)]), leaf(&[("G", 7)]), leaf(&[("I", 9)])]
            )
        );
        assert_eq!(check(&node, 2), Ok(9));
    }

    #[rstest]
    fn test_rotate_from_right_moves_grandchild() {
        let left = internal(&[("B", 2)], vec![leaf(&[("A", 1)]), leaf(&[("C", 3)])]);
        let right = internal(
            &[("F", 6), ("H", 8)],
            vec![leaf(&[("E", 5)]), leaf(&[("G", 7)]), leaf(&[("I", 9)])],
        );
        let mut node = internal(&[("D", 4)], vec![left, right]);
        node.rotate_from_right(0);

        assert_eq!(keys(&node), vec!["F"]);
        assert_eq!(
            node.children[0],
            internal(
                &[("B", 2), ("D", 4)],
                vec![leaf(&[("A", 1)]), leaf(&[("C", 3)]), leaf(&[("E", 5)])]
            )
        );
        assert_eq!(check(&node, 2), Ok(9));
    }

    #[rstest]
    fn test_merge_children() {
        let mut node = internal(
            &[("B", 2), ("D", 4)],
            vec![leaf(&[("A", 1)]), leaf(&[("C", 3)]), leaf(&[("E", 5)])],
        );
        node.merge_children(0);

        assert_eq!(
            node,
            internal(&[("D", 4)], vec![leaf(&[("A", 1), ("B", 2), ("C", 3)]), leaf(&[("E", 5)])])
        );
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[should_panic(expected = "has no left sibling")]
    fn test_rotate_from_left_requires_left_sibling() {
        let mut node = internal(&[("C", 3)], vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("D", 4)])]);
        node.rotate_from_left(0);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[should_panic(expected = "has no right sibling")]
    fn test_rotate_from_right_requires_right_sibling() {
        let mut node = internal(&[("B", 2)], vec![leaf(&[("A", 1)]), leaf(&[("C", 3), ("D", 4)])]);
        node.rotate_from_right(1);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[should_panic(expected = "left sibling of child 1 is empty")]
    fn test_rotate_from_left_requires_entry_to_borrow() {
        let mut node = internal(&[("C", 3)], vec![leaf(&[]), leaf(&[("D", 4)])]);
        node.rotate_from_left(1);
    }

    #[rstest]
    fn test_remove_internal_key_takes_predecessor() {
        let mut node = internal(
            &[("D", 4)],
            vec![leaf(&[("A", 1), ("B", 2), ("C", 3)]), leaf(&[("E", 5), ("F", 6)])],
        );
        assert_eq!(node.remove("D", 3), Some(4));

        assert_eq!(
            node,
            internal(&[("C", 3)], vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("E", 5), ("F", 6)])])
        );
    }

    #[rstest]
    fn test_remove_internal_key_takes_successor() {
        let mut node = internal(
            &[("D", 4)],
            vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("E", 5), ("F", 6), ("G", 7)])],
        );
        assert_eq!(node.remove("D", 3), Some(4));

        assert_eq!(
            node,
            internal(&[("E", 5)], vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("F", 6), ("G", 7)])])
        );
        assert_eq!(check(&node, 3), Ok(5));
    }

    #[rstest]
    fn test_remove_internal_key_takes_successor_from_subtree() {
        let left = internal(
            &[("C", 3), ("F", 6)],
            vec![
                leaf(&[("A", 1), ("B", 2)]),
                leaf(&[("D", 4), ("E", 5)]),
                leaf(&[("G", 7), ("H", 8)]),
            ],
        );
        let right = internal(
            &[("M", 13), ("P", 16), ("S", 19)],
            vec![
                leaf(&[("J", 10), ("K", 11), ("L", 12)]),
                leaf(&[("N", 14), ("O", 15)]),
                leaf(&[("Q", 17), ("R", 18)]),
                leaf(&[("T", 20), ("U", 21)]),
            ],
        );
        let mut node = internal(&[("I", 9)], vec![left, right]);
        assert_eq!(node.remove("I", 3), Some(9));

        assert_eq!(keys(&node), vec!["J"]);
        assert_eq!(keys(&node.children[1]), vec!["M", "P", "S"]);
        assert_eq!(keys(&node.children[1].children[0]), vec!["K", "L"]);
        assert_eq!(check(&node, 3), Ok(20));
    }

    #[rstest]
    fn test_remove_missing_key_from_leaf() {
        let mut node = leaf(&[("A", 1)]);
        assert_eq!(node.remove("B", 2), None);
        assert_eq!(node, leaf(&[("A", 1)]));
    }

    #[rstest]
    fn test_remove_max_and_min() {
        let mut node = internal(
            &[("C", 3)],
            vec![leaf(&[("A", 1), ("B", 2)]), leaf(&[("D", 4), ("E", 5)])],
        );
        assert_eq!(node.remove_max(2), Some(Entry::new("E", 5)));
        assert_eq!(node.remove_min(2), Some(Entry::new("A", 1)));
        assert_eq!(check(&node, 2), Ok(3));

        let mut empty: Node<&str, i32> = Node::new();
        assert_eq!(empty.remove_max(2), None);
        assert_eq!(empty.remove_min(2), None);
    }

    #[rstest]
    fn test_validate_accepts_valid_tree() {
        let node = internal(&[("C", 3)], vec![leaf(&[("A", 1)]), leaf(&[("D", 4)])]);
        assert_eq!(check(&node, 2), Ok(3));
    }

    #[rstest]
    fn test_validate_detects_overflow() {
        let node = leaf(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);
        assert_eq!(
            check(&node, 2),
            Err(InvariantViolation::Overflow {
                depth: 0,
                entries: 4,
                maximum: 3
            })
        );
    }

    #[rstest]
    fn test_validate_detects_underflow_below_root() {
        let node = internal(&[("C", 3)], vec![leaf(&[("A", 1)]), leaf(&[])]);
        assert_eq!(
            check(&node, 2),
            Err(InvariantViolation::Underflow {
                depth: 1,
                entries: 0,
                minimum: 1
            })
        );
    }

    #[rstest]
    fn test_validate_detects_unsorted_entries() {
        let node = leaf(&[("B", 2), ("A", 1)]);
        assert_eq!(check(&node, 2), Err(InvariantViolation::UnsortedEntries { depth: 0 }));
    }

    #[rstest]
    fn test_validate_detects_key_out_of_range() {
        let node = internal(&[("C", 3)], vec![leaf(&[("D", 4)]), leaf(&[("E", 5)])]);
        assert_eq!(check(&node, 2), Err(InvariantViolation::KeyOutOfRange { depth: 1 }));
    }

    #[rstest]
    fn test_validate_detects_child_count_mismatch() {
        let node = internal(&[("C", 3), ("F", 6)], vec![leaf(&[("A", 1)]), leaf(&[("D", 4)])]);
        assert_eq!(
            check(&node, 2),
            Err(InvariantViolation::ChildCountMismatch {
                depth: 0,
                entries: 2,
                children: 2
            })
        );
    }

    #[rstest]
    fn test_validate_detects_uneven_leaf_depth() {
        let node = internal(
            &[("C", 3)],
            vec![
                leaf(&[("A", 1)]),
                internal(&[("E", 5)], vec![leaf(&[("D", 4)]), leaf(&[("F", 6)])]),
            ],
        );
        assert_eq!(
            check(&node, 2),
            Err(InvariantViolation::UnevenLeafDepth {
                expected: 1,
                found: 2
            })
        );
    }
}
