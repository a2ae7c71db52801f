//! A hash set with the bulk operations graph code needs.
//!
//! [`Set`] is a thin newtype over [`HashSet`] that adds in-place bulk updates (`add`, `sub`,
//! `union`) and a deterministic [`Set::sorted`] listing. It dereferences to the underlying
//! `HashSet`, so every read-only `HashSet` method is available as well.
//!
//! # Example
//!
//! ```rust
//! use xykit::utils::Set;
//!
//! let mut set: Set<u32> = Set::new();
//! set.add([1, 2, 3]);
//!
//! let evens: Set<u32> = [2, 4].into_iter().collect();
//! set.sub(&evens);
//!
//! assert!(set.has(&1));
//! assert!(!set.has(&2));
//! assert_eq!(set.sorted(), vec![&1, &3]);
//! ```

use std::{
    collections::{hash_set, HashSet},
    hash::Hash,
    ops::Deref,
};

/// An unordered collection of unique values.
///
/// Iteration order is unspecified; use [`Set::sorted`] when a stable listing is required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a new, empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Creates a new, empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if `value` is a member of the set.
    #[must_use]
    pub fn has(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Inserts every element of `values`.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// Inserts a single value, returning `true` if it was not present before.
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Removes every element that is also contained in `other`.
    pub fn sub(&mut self, other: &Set<T>) {
        if other.len() < self.len() {
            for value in other.values() {
                self.items.remove(value);
            }
        } else {
            self.items.retain(|value| !other.has(value));
        }
    }

    /// Returns an iterator over all elements in unspecified order.
    pub fn values(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns references to all elements in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&T>
    where
        T: Ord,
    {
        let mut values: Vec<&T> = self.items.iter().collect();
        values.sort_unstable();
        values
    }

    /// Consumes the set, returning the underlying [`HashSet`].
    #[must_use]
    pub fn into_inner(self) -> HashSet<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Inserts every element contained in `other`.
    pub fn union(&mut self, other: &Set<T>) {
        self.items.extend(other.values().cloned());
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Deref for Set<T> {
    type Target = HashSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Eq + Hash> From<HashSet<T>> for Set<T> {
    fn from(items: HashSet<T>) -> Self {
        Self { items }
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
