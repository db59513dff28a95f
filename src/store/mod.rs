//! # Ordered Key Store
//!
//! A hash index whose entries also form a doubly linked recency chain. The
//! links are keys, not pointers: the index doubles as the node arena, so
//! unlinking or relinking an entry is a couple of hash lookups and no entry
//! ever owns another.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                    OrderedKeyStore<K, V>                         │
//!   │                                                                  │
//!   │   FxHashMap<K, Entry<K, V>>                                      │
//!   │   ┌───────┬──────────────────────────────────────────────┐       │
//!   │   │  Key  │  Entry { value, prev, next }                 │       │
//!   │   ├───────┼──────────────────────────────────────────────┤       │
//!   │   │   a   │  { value: 1, prev: None,    next: Some(b) }  │       │
//!   │   │   b   │  { value: 2, prev: Some(a), next: Some(c) }  │       │
//!   │   │   c   │  { value: 3, prev: Some(b), next: None    }  │       │
//!   │   └───────┴──────────────────────────────────────────────┘       │
//!   │                                                                  │
//!   │   head ──► [a] ◄──► [b] ◄──► [c] ◄── tail                        │
//!   │            LRU                MRU                                │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   get(a) / insert(a, v) on a present key
//!   ═══════════════════════════════════════════════════════════════════
//!
//!   Before:   head ──► [a] ◄──► [b] ◄──► [c] ◄── tail
//!
//!     1. a is not the tail, so detach it: head = b, b.prev = None
//!     2. attach after the old tail: c.next = a, a.prev = c, tail = a
//!
//!   After:    head ──► [b] ◄──► [c] ◄──► [a] ◄── tail
//!
//!   get(a) again: a is already the tail, nothing moves.
//!
//!   remove(b)
//!   ═══════════════════════════════════════════════════════════════════
//!
//!   Before:   head ──► [a] ◄──► [b] ◄──► [c] ◄── tail
//!   After:    head ──► [a] ◄──► [c] ◄── tail
//! ```
//!
//! ## Invariants
//!
//! After every public operation:
//!
//! - `head` and `tail` are `None` exactly when the index is empty.
//! - Following `next` from `head` visits every key once and stops at `tail`;
//!   following `prev` from `tail` visits them in reverse.
//! - Every `prev`/`next` names a key present in the index.
//! - `head` is the least recently touched key and `tail` the most recently
//!   touched, where touching means `get`, `get_mut`, `touch`, or `insert`.
//!
//! Debug builds verify all of them after each mutation.
//!
//! ## Methods
//!
//! | Method               | Complexity | Description                              |
//! |----------------------|------------|------------------------------------------|
//! | `insert(k, v)`       | O(1)       | Insert or replace, move to MRU           |
//! | `get(&k)`            | O(1)       | Read value, move to MRU                  |
//! | `get_mut(&k)`        | O(1)       | Mutable read, move to MRU                |
//! | `peek(&k)`           | O(1)       | Read value, order unchanged              |
//! | `contains(&k)`       | O(1)       | Membership, order unchanged              |
//! | `touch(&k)`          | O(1)       | Move to MRU without reading              |
//! | `remove(&k)`         | O(1)       | Unlink and drop the entry                |
//! | `least_recent_key()` | O(1)       | Current head                             |
//! | `pop_least_recent()` | O(1)       | Remove the head                          |
//! | `recency_rank(&k)`   | O(n)       | Position from the head                   |
//! | `export()`           | O(n)       | JSON snapshot                            |
//! | `import(s)`          | O(n)       | Validate and replace all state           |
//!
//! The store never removes entries on its own. Bound it from the outside with
//! [`RecencyStore::trim_to`](crate::traits::RecencyStore::trim_to) or
//! `remove(least_recent_key())`.
//!
//! ## Thread Safety
//!
//! `OrderedKeyStore` has no internal locking. It is `Send` when `K` and `V`
//! are; share it across threads behind a mutex.
//!
//! ## Example Usage
//!
//! ```
//! use recencykit::store::OrderedKeyStore;
//!
//! let mut store = OrderedKeyStore::new();
//! store.insert(0, 'a');
//! store.insert(1, 'b');
//!
//! assert_eq!(store.get(&0), Some(&'a'));
//! assert_eq!(store.least_recent_key(), Some(&1));
//!
//! assert_eq!(store.insert(1, 'c'), Some('b'));
//! assert_eq!(store.least_recent_key(), Some(&0));
//!
//! let snapshot = store.export().unwrap();
//! let mut restored: OrderedKeyStore<i32, char> = OrderedKeyStore::new();
//! restored.import(&snapshot).unwrap();
//! assert_eq!(restored, store);
//! ```

mod iter;

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use iter::{IntoIter, Iter, Keys, Values};

use crate::error::{InvariantError, SnapshotError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::StoreMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::StoreMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, RecencyMetricsReadRecorder, RecencyMetricsRecorder,
};
use crate::snapshot::{JsonCodec, Snapshot, SnapshotCodec, SnapshotEntry};
use crate::traits::{CoreStore, MutableStore, RecencyStore};

/// Index slot: the value plus the keys of its chain neighbours.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) value: V,
    pub(crate) prev: Option<K>,
    pub(crate) next: Option<K>,
}

/// Key-indexed store with O(1) least-recently-used ordering.
///
/// See the [module documentation](self) for the layout and invariants.
pub struct OrderedKeyStore<K, V> {
    map: FxHashMap<K, Entry<K, V>>,
    head: Option<K>,
    tail: Option<K>,
    #[cfg(feature = "metrics")]
    metrics: StoreMetrics,
}

impl<K, V> OrderedKeyStore<K, V> {
    /// Creates an empty store.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::store::OrderedKeyStore;
    ///
    /// let store: OrderedKeyStore<u32, String> = OrderedKeyStore::new();
    /// assert!(store.is_empty());
    /// assert_eq!(store.least_recent_key(), None);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `capacity` entries before the
    /// index reallocates. This is a sizing hint, not a bound.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedKeyStore {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
            #[cfg(feature = "metrics")]
            metrics: StoreMetrics::default(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the least recently used key without changing the order.
    #[inline]
    pub fn least_recent_key(&self) -> Option<&K> {
        self.head.as_ref()
    }

    /// Returns the most recently used key without changing the order.
    #[inline]
    pub fn most_recent_key(&self) -> Option<&K> {
        self.tail.as_ref()
    }

    /// Returns the number of entries the index can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Iterates entries from least to most recently used.
    ///
    /// The iterator is double ended; `.rev()` walks from the most recently
    /// used end. Iterating does not change the order.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::store::OrderedKeyStore;
    ///
    /// let mut store = OrderedKeyStore::new();
    /// store.insert("x", 1);
    /// store.insert("y", 2);
    /// store.get(&"x");
    ///
    /// let order: Vec<_> = store.iter().collect();
    /// assert_eq!(order, vec![(&"y", &2), (&"x", &1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.map, self.head.as_ref(), self.tail.as_ref())
    }

    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates values from least to most recently used.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K, V> OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts or replaces the value for `key` and makes it the most
    /// recently used entry.
    ///
    /// Returns the previous value when the key was present, `None` when it is
    /// new.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::store::OrderedKeyStore;
    ///
    /// let mut store = OrderedKeyStore::new();
    /// assert_eq!(store.insert(0, "a"), None);
    /// assert_eq!(store.insert(0, "b"), Some("a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(entry) = self.map.get_mut(&key) {
            let previous = mem::replace(&mut entry.value, value);

            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.promote(&key);
            return Some(previous);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.map.insert(
            key.clone(),
            Entry {
                value,
                prev: None,
                next: None,
            },
        );
        self.attach_back(key);

        #[cfg(debug_assertions)]
        self.debug_validate();

        None
    }

    /// Returns the value for `key` and makes it the most recently used entry.
    ///
    /// Returns `None` if the key is absent; the order is then unchanged.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.promote(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.map.get(key).map(|entry| &entry.value)
    }

    /// Mutable variant of [`get`](Self::get); also promotes the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.promote(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.map.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without changing the order.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::store::OrderedKeyStore;
    ///
    /// let mut store = OrderedKeyStore::new();
    /// store.insert(1, "one");
    /// store.insert(2, "two");
    ///
    /// assert_eq!(store.peek(&1), Some(&"one"));
    /// assert_eq!(store.least_recent_key(), Some(&1));
    /// ```
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let entry = self.map.get(key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_found();

        Some(&entry.value)
    }

    /// Returns `true` if `key` is present. Never changes the order.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Makes `key` the most recently used entry without reading it.
    ///
    /// Returns `false` if the key is absent.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let found = self.promote(key);

        #[cfg(feature = "metrics")]
        if found {
            self.metrics.record_touch_found();
        }

        found
    }

    /// Removes `key`, returning its value.
    ///
    /// Removing an absent key returns `None` and leaves the store untouched,
    /// so repeated removals are harmless.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::store::OrderedKeyStore;
    ///
    /// let mut store = OrderedKeyStore::new();
    /// store.insert(0, 'a');
    /// store.insert(1, 'b');
    ///
    /// assert_eq!(store.remove(&0), Some('a'));
    /// assert_eq!(store.remove(&0), None);
    /// assert_eq!(store.least_recent_key(), Some(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let entry = self.map.remove(key)?;
        self.relink(entry.prev, entry.next);

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some(entry.value)
    }

    /// Returns the least recently used entry without changing the order.
    pub fn peek_least_recent(&self) -> Option<(&K, &V)> {
        let head = self.head.as_ref()?;
        self.map
            .get_key_value(head)
            .map(|(key, entry)| (key, &entry.value))
    }

    /// Removes and returns the least recently used entry.
    ///
    /// Equivalent to `remove(least_recent_key())`. The store never calls
    /// this itself.
    pub fn pop_least_recent(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_least_recent_call();

        let head = self.head.as_ref()?;
        let (key, entry) = self.map.remove_entry(head)?;
        self.relink(entry.prev, entry.next);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_least_recent_found();

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some((key, entry.value))
    }

    /// Removes and returns the most recently used entry.
    pub fn pop_most_recent(&mut self) -> Option<(K, V)> {
        let tail = self.tail.as_ref()?;
        let (key, entry) = self.map.remove_entry(tail)?;
        self.relink(entry.prev, entry.next);

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some((key, entry.value))
    }

    /// Position of `key` counted from the least recently used end
    /// (0 = least recent). Walks the chain, so this is O(n).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        let (target, _) = self.map.get_key_value(key)?;
        let mut rank = 0usize;
        let mut current = self.head.as_ref();

        while let Some(candidate) = current {
            #[cfg(feature = "metrics")]
            self.metrics.record_recency_rank_scan_step();

            if candidate == target {
                #[cfg(feature = "metrics")]
                self.metrics.record_recency_rank_found();
                return Some(rank);
            }
            rank += 1;
            current = self
                .map
                .get::<K>(candidate)
                .and_then(|entry| entry.next.as_ref());
        }
        None
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        let cleared = self.map.len();
        self.map.clear();
        self.head = None;
        self.tail = None;

        debug!(cleared, "cleared ordered key store");
    }

    /// Verifies the chain and index agree.
    ///
    /// Debug builds call this after every mutation and panic on failure; it
    /// is public so hosts can check a store they restored by other means.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match (&self.head, &self.tail) {
            (None, None) if self.map.is_empty() => return Ok(()),
            (None, None) => {
                return Err(InvariantError::new(format!(
                    "store holds {} entries but has no head or tail",
                    self.map.len()
                )));
            },
            (Some(_), Some(_)) if self.map.is_empty() => {
                return Err(InvariantError::new("empty store still names a head or tail"));
            },
            (Some(_), Some(_)) => {},
            _ => {
                return Err(InvariantError::new(
                    "head and tail must both be set or both be absent",
                ));
            },
        }

        let mut visited = 0usize;
        let mut expected_prev: Option<&K> = None;
        let mut current = self.head.as_ref();
        while let Some(key) = current {
            visited += 1;
            if visited > self.map.len() {
                return Err(InvariantError::new("cycle detected in recency chain"));
            }
            let entry = self.map.get(key).ok_or_else(|| {
                InvariantError::new("recency chain links to a key missing from the index")
            })?;
            if entry.prev.as_ref() != expected_prev {
                return Err(InvariantError::new("prev link does not mirror next link"));
            }
            expected_prev = Some(key);
            current = entry.next.as_ref();
        }

        if expected_prev != self.tail.as_ref() {
            return Err(InvariantError::new("recency chain does not end at tail"));
        }
        if visited != self.map.len() {
            return Err(InvariantError::new(format!(
                "recency chain visits {visited} of {} entries",
                self.map.len()
            )));
        }
        Ok(())
    }

    /// Borrowed snapshot of the full state, entries in head-to-tail order.
    pub fn snapshot(&self) -> Snapshot<&K, &V> {
        let mut entries = Vec::with_capacity(self.map.len());
        let mut current = self.head.as_ref();
        while let Some((key, entry)) = current.and_then(|key| self.map.get_key_value(key)) {
            entries.push(SnapshotEntry {
                key,
                value: &entry.value,
                prev: entry.prev.as_ref(),
                next: entry.next.as_ref(),
            });
            current = entry.next.as_ref();
        }

        Snapshot {
            head: self.head.as_ref(),
            tail: self.tail.as_ref(),
            entries,
        }
    }

    /// Builds a store from an owned snapshot after validating it.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::snapshot::{Snapshot, SnapshotEntry};
    /// use recencykit::store::OrderedKeyStore;
    ///
    /// let snapshot = Snapshot {
    ///     head: Some(1),
    ///     tail: Some(1),
    ///     entries: vec![SnapshotEntry { key: 1, value: "a", prev: None, next: None }],
    /// };
    /// let store = OrderedKeyStore::from_snapshot(snapshot).unwrap();
    /// assert_eq!(store.peek(&1), Some(&"a"));
    /// ```
    pub fn from_snapshot(snapshot: Snapshot<K, V>) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let Snapshot {
            head,
            tail,
            entries,
        } = snapshot;
        let mut map = FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for SnapshotEntry {
            key,
            value,
            prev,
            next,
        } in entries
        {
            map.insert(key, Entry { value, prev, next });
        }

        Ok(OrderedKeyStore {
            map,
            head,
            tail,
            #[cfg(feature = "metrics")]
            metrics: StoreMetrics::default(),
        })
    }

    /// Moves `key` to the tail. Returns `false` if the key is absent.
    fn promote<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let owned = match self.map.get_key_value(key) {
            Some((owned, _)) => owned,
            None => return false,
        };

        // Relinking the tail after itself would make it its own neighbour.
        if self.tail.as_ref() == Some(owned) {
            #[cfg(feature = "metrics")]
            self.metrics.record_promotion_noop();
            return true;
        }

        let owned = owned.clone();
        self.detach(&owned);
        self.attach_back(owned);

        #[cfg(feature = "metrics")]
        self.metrics.record_promotion();

        #[cfg(debug_assertions)]
        self.debug_validate();

        true
    }

    /// Unlinks a present key from the chain, leaving its index slot in place
    /// with both links cleared.
    fn detach(&mut self, key: &K) {
        let (prev, next) = match self.map.get_mut(key) {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };
        self.relink(prev, next);
    }

    /// Joins the former neighbours of an unlinked entry.
    fn relink(&mut self, prev: Option<K>, next: Option<K>) {
        match &prev {
            Some(prev_key) => {
                if let Some(entry) = self.map.get_mut(prev_key) {
                    entry.next = next.clone();
                }
            },
            None => self.head = next.clone(),
        }
        match &next {
            Some(next_key) => {
                if let Some(entry) = self.map.get_mut(next_key) {
                    entry.prev = prev;
                }
            },
            None => self.tail = prev,
        }
    }

    /// Links an unlinked entry after the current tail.
    fn attach_back(&mut self, key: K) {
        let old_tail = self.tail.replace(key.clone());
        match &old_tail {
            Some(tail_key) => {
                if let Some(entry) = self.map.get_mut(tail_key) {
                    entry.next = Some(key.clone());
                }
            },
            None => self.head = Some(key.clone()),
        }
        if let Some(entry) = self.map.get_mut(&key) {
            entry.prev = old_tail;
            entry.next = None;
        }
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ordered key store invariant violated: {err}");
        }
    }
}

impl<K, V> OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone + Serialize,
    V: Serialize,
{
    /// Encodes the full store state as JSON.
    ///
    /// [`import`](Self::import) on any store rebuilds an equivalent store
    /// from the result.
    pub fn export(&self) -> Result<String, SnapshotError> {
        self.export_with(&JsonCodec::new())
    }

    /// Encodes the full store state with `codec`.
    pub fn export_with<C>(&self, codec: &C) -> Result<C::Encoded, SnapshotError>
    where
        C: SnapshotCodec,
    {
        let encoded = codec.encode(&self.snapshot())?;

        #[cfg(feature = "metrics")]
        self.metrics.record_snapshot_export();

        debug!(entries = self.map.len(), "exported ordered key store snapshot");
        Ok(encoded)
    }
}

impl<K, V> OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone + DeserializeOwned,
    V: DeserializeOwned,
{
    /// Replaces the entire store state with a JSON snapshot from
    /// [`export`](Self::export).
    ///
    /// The snapshot is decoded and validated first; if either step fails the
    /// store keeps its previous contents and
    /// [`SnapshotError::Corrupt`] is returned.
    pub fn import(&mut self, snapshot: &str) -> Result<(), SnapshotError> {
        self.import_with(&JsonCodec::new(), snapshot.as_bytes())
    }

    /// Replaces the entire store state with a snapshot encoded by `codec`.
    pub fn import_with<C>(&mut self, codec: &C, raw: &[u8]) -> Result<(), SnapshotError>
    where
        C: SnapshotCodec,
    {
        let restored = match codec.decode(raw).and_then(Self::from_snapshot) {
            Ok(restored) => restored,
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_snapshot_rejected();

                warn!(error = %err, "rejected ordered key store snapshot");
                return Err(err);
            },
        };

        self.map = restored.map;
        self.head = restored.head;
        self.tail = restored.tail;

        #[cfg(feature = "metrics")]
        self.metrics.record_snapshot_import();

        debug!(entries = self.map.len(), "imported ordered key store snapshot");
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> OrderedKeyStore<K, V> {
    /// Point-in-time copy of the operation counters.
    pub fn metrics_snapshot(&self) -> StoreMetricsSnapshot {
        StoreMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            clears: self.metrics.clears,
            promotions: self.metrics.promotions,
            promotion_noops: self.metrics.promotion_noops,
            pop_least_recent_calls: self.metrics.pop_least_recent_calls,
            pop_least_recent_found: self.metrics.pop_least_recent_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            snapshot_exports: self.metrics.snapshot_exports.get(),
            snapshot_imports: self.metrics.snapshot_imports,
            snapshot_rejections: self.metrics.snapshot_rejections,
            len: self.map.len(),
        }
    }

    /// Zeroes every counter.
    pub fn reset_metrics(&mut self) {
        self.metrics = StoreMetrics::default();
    }
}

impl<K, V> CoreStore<K, V> for OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        OrderedKeyStore::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        OrderedKeyStore::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        OrderedKeyStore::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        OrderedKeyStore::clear(self)
    }
}

impl<K, V> MutableStore<K, V> for OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        OrderedKeyStore::remove(self, key)
    }
}

impl<K, V> RecencyStore<K, V> for OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn least_recent_key(&self) -> Option<&K> {
        self.head.as_ref()
    }

    #[inline]
    fn most_recent_key(&self) -> Option<&K> {
        self.tail.as_ref()
    }

    #[inline]
    fn pop_least_recent(&mut self) -> Option<(K, V)> {
        OrderedKeyStore::pop_least_recent(self)
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        OrderedKeyStore::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        OrderedKeyStore::recency_rank(self, key)
    }
}

impl<K, V> Default for OrderedKeyStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Metrics are not carried over: a clone starts with fresh counters.
impl<K, V> Clone for OrderedKeyStore<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        OrderedKeyStore {
            map: self.map.clone(),
            head: self.head.clone(),
            tail: self.tail.clone(),
            #[cfg(feature = "metrics")]
            metrics: StoreMetrics::default(),
        }
    }
}

/// Two stores are equal when they hold the same entries in the same
/// recency order.
impl<K, V> PartialEq for OrderedKeyStore<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for OrderedKeyStore<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> fmt::Debug for OrderedKeyStore<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut store = OrderedKeyStore::new();
        store.extend(iter);
        store
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedKeyStore<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedKeyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { store: self }
    }
}
