//! # Store Trait Hierarchy
//!
//! Operations are layered so that generic host code can ask for exactly the
//! capability it needs.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreStore<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableStore<K, V>            │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K])                     │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           RecencyStore<K, V>            │
//!   │                                         │
//!   │  least_recent_key() → Option<&K>        │
//!   │  most_recent_key() → Option<&K>         │
//!   │  pop_least_recent() → Option<(K, V)>    │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   │  trim_to(max_len) → Vec<(K, V)>         │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Bounding
//!
//! Stores in this crate never evict on their own. A host that wants a size
//! bound checks `len()` after inserting and calls
//! [`RecencyStore::trim_to`], which removes least recently used entries
//! until the bound holds and hands them back.
//!
//! ## Example Usage
//!
//! ```
//! use recencykit::store::OrderedKeyStore;
//! use recencykit::traits::{CoreStore, RecencyStore};
//!
//! fn insert_bounded<S: RecencyStore<u64, String>>(
//!     store: &mut S,
//!     key: u64,
//!     value: String,
//!     max_len: usize,
//! ) -> Vec<(u64, String)> {
//!     store.insert(key, value);
//!     store.trim_to(max_len)
//! }
//!
//! let mut store = OrderedKeyStore::new();
//! insert_bounded(&mut store, 1, "one".into(), 2);
//! insert_bounded(&mut store, 2, "two".into(), 2);
//! let evicted = insert_bounded(&mut store, 3, "three".into(), 2);
//!
//! assert_eq!(evicted, vec![(1, "one".to_string())]);
//! assert_eq!(CoreStore::len(&store), 2);
//! ```

/// Operations every keyed store supports.
///
/// # Example
///
/// ```
/// use recencykit::store::OrderedKeyStore;
/// use recencykit::traits::CoreStore;
///
/// fn warm<S: CoreStore<u64, String>>(store: &mut S, data: &[(u64, String)]) {
///     for (key, value) in data {
///         store.insert(*key, value.clone());
///     }
/// }
///
/// let mut store = OrderedKeyStore::new();
/// warm(&mut store, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(CoreStore::len(&store), 2);
/// ```
pub trait CoreStore<K, V> {
    /// Inserts or replaces a value, returning the previous value if the key
    /// existed. The key becomes the most recently used.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up a value, marking the key as most recently used on a hit.
    ///
    /// Use [`contains`](Self::contains) to test membership without
    /// affecting the order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks whether a key is present without reordering.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);
}

/// Stores that support removal of arbitrary keys.
pub trait MutableStore<K, V>: CoreStore<K, V> {
    /// Removes a key, returning its value, or `None` if it was absent.
    ///
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    /// The default implementation loops over [`remove`](Self::remove).
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::store::OrderedKeyStore;
    /// use recencykit::traits::MutableStore;
    ///
    /// let mut store = OrderedKeyStore::new();
    /// store.insert(1, "one");
    /// store.insert(2, "two");
    /// store.insert(3, "three");
    ///
    /// let removed = store.remove_batch(&[1, 99, 3]);
    /// assert_eq!(removed, vec![Some("one"), None, Some("three")]);
    /// assert_eq!(store.len(), 1);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// Stores that keep a least-recently-used to most-recently-used order.
pub trait RecencyStore<K, V>: MutableStore<K, V> {
    /// Key of the least recently used entry, without reordering.
    fn least_recent_key(&self) -> Option<&K>;

    /// Key of the most recently used entry, without reordering.
    fn most_recent_key(&self) -> Option<&K>;

    /// Removes and returns the least recently used entry.
    fn pop_least_recent(&mut self) -> Option<(K, V)>;

    /// Marks a key as most recently used without reading its value.
    ///
    /// Returns `false` if the key is absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of a key counted from the least recently used end
    /// (0 = least recent). O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;

    /// Removes least recently used entries until at most `max_len` remain.
    ///
    /// Returns the removed entries, least recent first.
    fn trim_to(&mut self, max_len: usize) -> Vec<(K, V)> {
        let mut evicted = Vec::with_capacity(self.len().saturating_sub(max_len));
        while self.len() > max_len {
            match self.pop_least_recent() {
                Some(entry) => evicted.push(entry),
                None => break,
            }
        }
        if !evicted.is_empty() {
            tracing::trace!(evicted = evicted.len(), max_len, "trimmed least recent entries");
        }
        evicted
    }
}
