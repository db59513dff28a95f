//! Iterators over an [`OrderedKeyStore`] in recency order.
//!
//! Borrowing iterators follow the chain links from both ends and stop when
//! they meet, so `next` and `next_back` can be mixed freely.

use std::hash::Hash;
use std::iter::FusedIterator;

use rustc_hash::FxHashMap;

use super::{Entry, OrderedKeyStore};

/// Borrowing iterator from least to most recently used.
///
/// Created by [`OrderedKeyStore::iter`].
pub struct Iter<'a, K, V> {
    map: &'a FxHashMap<K, Entry<K, V>>,
    front: Option<&'a K>,
    back: Option<&'a K>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(
        map: &'a FxHashMap<K, Entry<K, V>>,
        head: Option<&'a K>,
        tail: Option<&'a K>,
    ) -> Self {
        Iter {
            map,
            front: head,
            back: tail,
            remaining: map.len(),
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            map: self.map,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let map = self.map;
        let (key, entry) = map.get_key_value(self.front?)?;
        self.front = entry.next.as_ref();
        self.remaining -= 1;
        Some((key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V>
where
    K: Eq + Hash,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let map = self.map;
        let (key, entry) = map.get_key_value(self.back?)?;
        self.back = entry.prev.as_ref();
        self.remaining -= 1;
        Some((key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> where K: Eq + Hash {}

impl<K, V> FusedIterator for Iter<'_, K, V> where K: Eq + Hash {}

/// Keys from least to most recently used.
///
/// Created by [`OrderedKeyStore::keys`].
pub struct Keys<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V>
where
    K: Eq + Hash,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V>
where
    K: Eq + Hash,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> where K: Eq + Hash {}

/// Values from least to most recently used.
///
/// Created by [`OrderedKeyStore::values`].
pub struct Values<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V>
where
    K: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V>
where
    K: Eq + Hash,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> where K: Eq + Hash {}

/// Owning iterator that drains the store from the least recently used end.
///
/// Created by `OrderedKeyStore::into_iter`.
///
/// Each step is a `pop_least_recent` or `pop_most_recent`, so in debug builds
/// every step also runs the full invariant check and draining n entries
/// costs O(n²). Release builds drain in O(n).
pub struct IntoIter<K, V> {
    pub(super) store: OrderedKeyStore<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.store.pop_least_recent()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.store.len(), Some(self.store.len()))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V>
where
    K: Eq + Hash + Clone,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.store.pop_most_recent()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> where K: Eq + Hash + Clone {}

impl<K, V> FusedIterator for IntoIter<K, V> where K: Eq + Hash + Clone {}
