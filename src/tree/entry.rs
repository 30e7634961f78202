//! The key/value pair stored in a node.

/// A single ordered key/value pair.
///
/// The key never changes once the entry is stored; the value is overwritten
/// in place when the same key is inserted again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    #[inline]
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Overwrites the value and returns the previous one.
    #[inline]
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
