//! Lazy sequence adapters.
//!
//! Everything here is an ordinary [`Iterator`], so adapters compose with the standard library
//! combinators (`map`, `filter`, `take`, `zip`, `fold`, ...) which are intentionally not
//! duplicated. Sequences are restartable in the usual Rust way: clone the source iterator or
//! call the constructor again.
//!
//! # Adapters
//!
//! - [`SeqExt::uniq`] / [`SeqExt::uniq_by`] - Drop runs of consecutive equal items
//! - [`SeqExt::join`] - Concatenate displayable items with a delimiter
//! - [`markovian`] - Infinite first-order recurrence
//! - [`sorted_by_key`] / [`sorted_by_key_with`] - Walk a hash map in key order

use std::{
    cmp::Ordering,
    collections::HashMap,
    fmt::{Display, Write},
    hash::Hash,
};

/// Extension methods available on every iterator.
pub trait SeqExt: Iterator + Sized {
    /// Omits every item that equals the item directly before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xykit::utils::SeqExt;
    ///
    /// let v: Vec<i32> = [1, 1, 2, 2, 2, 1, 3].into_iter().uniq().collect();
    /// assert_eq!(v, vec![1, 2, 1, 3]);
    /// ```
    fn uniq(self) -> Uniq<Self, fn(&Self::Item, &Self::Item) -> bool>
    where
        Self::Item: PartialEq + Clone,
    {
        Uniq::new(self, <Self::Item as PartialEq>::eq)
    }

    /// Like [`SeqExt::uniq`], but compares items with `eq`.
    fn uniq_by<F>(self, eq: F) -> Uniq<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Uniq::new(self, eq)
    }

    /// Renders every item with [`Display`] and joins them with `delim`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xykit::utils::SeqExt;
    ///
    /// assert_eq!([1, 2, 3].iter().join(", "), "1, 2, 3");
    /// assert_eq!(std::iter::empty::<u8>().join(", "), "");
    /// ```
    fn join(self, delim: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        for (i, item) in self.enumerate() {
            if i != 0 {
                out.push_str(delim);
            }
            let _ = write!(out, "{item}");
        }
        out
    }
}

impl<I: Iterator> SeqExt for I {}

/// Iterator returned by [`SeqExt::uniq`] and [`SeqExt::uniq_by`].
pub struct Uniq<I: Iterator, F> {
    iter: I,
    eq: F,
    last: Option<I::Item>,
}

impl<I: Iterator, F> Uniq<I, F> {
    fn new(iter: I, eq: F) -> Self {
        Uniq {
            iter,
            eq,
            last: None,
        }
    }
}

impl<I, F> Iterator for Uniq<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if let Some(last) = &self.last {
                if (self.eq)(&item, last) {
                    continue;
                }
            }
            self.last = Some(item.clone());
            return Some(item);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Infinite sequence where every element is derived from the one before it.
///
/// Yields `first`, `next(first)`, `next(next(first))`, ... forever; bound it with
/// [`Iterator::take`] or [`Iterator::take_while`].
///
/// # Examples
///
/// ```rust
/// use xykit::utils::markovian;
///
/// let powers: Vec<u32> = markovian(1, |x| x * 2).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn markovian<T, F>(first: T, next: F) -> Markovian<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Markovian {
        current: None,
        first: Some(first),
        next,
    }
}

/// Iterator returned by [`markovian`].
pub struct Markovian<T, F> {
    current: Option<T>,
    first: Option<T>,
    next: F,
}

impl<T, F> Iterator for Markovian<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // The successor is only computed once it is requested
        let value = match (self.first.take(), &self.current) {
            (Some(first), _) => first,
            (None, Some(current)) => (self.next)(current),
            (None, None) => return None,
        };
        self.current = Some(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Iterates over `map` with entries ordered by key.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use xykit::utils::sorted_by_key;
///
/// let map = HashMap::from([("b", 2), ("a", 1), ("c", 3)]);
/// let keys: Vec<&str> = sorted_by_key(&map).map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec!["a", "b", "c"]);
/// ```
pub fn sorted_by_key<K, V>(map: &HashMap<K, V>) -> impl Iterator<Item = (&K, &V)>
where
    K: Ord + Hash,
{
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries.into_iter()
}

/// Like [`sorted_by_key`], but orders keys with `compare`.
///
/// The order is only consistent if `compare` never reports two distinct keys as equal.
pub fn sorted_by_key_with<K, V, C>(
    map: &HashMap<K, V>,
    mut compare: C,
) -> impl Iterator<Item = (&K, &V)>
where
    K: Hash,
    C: FnMut(&K, &K) -> Ordering,
{
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    entries.sort_by(|a, b| compare(a.0, b.0));
    entries.into_iter()
}
