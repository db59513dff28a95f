//! # Store Snapshots
//!
//! A [`Snapshot`] is the complete, self-describing state of an
//! [`OrderedKeyStore`](crate::store::OrderedKeyStore): every entry with its
//! value and both links, plus the `head` and `tail` keys.
//!
//! ```text
//!   Snapshot {
//!     head: Some(a),
//!     tail: Some(c),
//!     entries: [
//!       { key: a, value: .., prev: None,    next: Some(b) },
//!       { key: b, value: .., prev: Some(a), next: Some(c) },
//!       { key: c, value: .., prev: Some(b), next: None    },
//!     ],
//!   }
//! ```
//!
//! ## Links on the wire
//!
//! `head`, `tail`, `prev` and `next` are written as a sequence of zero or one
//! keys (`[]` or `[k]` in JSON) rather than as a nullable key. A key that
//! itself encodes as `null`, such as `None` or `()`, stays distinguishable
//! from a missing link. Every link field is required on decode.
//!
//! Entries are written in head-to-tail order, so two stores with the same
//! contents and order export identical bytes. Links are still written out in
//! full; [`Snapshot::validate`] checks that they describe exactly one chain
//! before any store is rebuilt from them.
//!
//! The text/binary form is pluggable through [`SnapshotCodec`]; see
//! [`codec`].

pub mod codec;

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use codec::{BincodeCodec, JsonCodec, SnapshotCodec};

use crate::error::SnapshotError;

/// One entry of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry<K, V> {
    pub key: K,
    pub value: V,
    #[serde(with = "link")]
    pub prev: Option<K>,
    #[serde(with = "link")]
    pub next: Option<K>,
}

/// Serializable image of a store's index and chain endpoints.
///
/// Export produces `Snapshot<&K, &V>` borrowing from the store; import
/// decodes an owned `Snapshot<K, V>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<K, V> {
    #[serde(with = "link")]
    pub head: Option<K>,
    #[serde(with = "link")]
    pub tail: Option<K>,
    pub entries: Vec<SnapshotEntry<K, V>>,
}

/// Serde adapter for optional link keys: `None` is `[]`, `Some(k)` is `[k]`.
mod link {
    use std::slice;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<K, S>(link: &Option<K>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        S: Serializer,
    {
        match link {
            Some(key) => slice::from_ref(key).serialize(serializer),
            None => <[K]>::serialize(&[], serializer),
        }
    }

    pub(super) fn deserialize<'de, K, D>(deserializer: D) -> Result<Option<K>, D::Error>
    where
        K: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let mut keys = Vec::<K>::deserialize(deserializer)?;
        match keys.len() {
            0 | 1 => Ok(keys.pop()),
            n => Err(D::Error::invalid_length(n, &"a link of at most one key")),
        }
    }
}

impl<K, V> Snapshot<K, V> {
    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Snapshot<K, V>
where
    K: Eq + Hash,
{
    /// Checks that the snapshot describes a single well-formed recency chain.
    ///
    /// Rejects duplicate keys, inconsistent `head`/`tail`, links to unknown
    /// keys, `prev` links that do not mirror `next` links, cycles, and entries
    /// that cannot be reached from `head`.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::snapshot::{Snapshot, SnapshotEntry};
    ///
    /// let dangling = Snapshot {
    ///     head: Some(1),
    ///     tail: Some(1),
    ///     entries: vec![SnapshotEntry { key: 1, value: "a", prev: None, next: Some(2) }],
    /// };
    /// assert!(dangling.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut links: FxHashMap<&K, (Option<&K>, Option<&K>)> =
            FxHashMap::with_capacity_and_hasher(self.entries.len(), Default::default());
        for (index, entry) in self.entries.iter().enumerate() {
            let previous = links.insert(&entry.key, (entry.prev.as_ref(), entry.next.as_ref()));
            if previous.is_some() {
                return Err(SnapshotError::corrupt(format!(
                    "entry {index} repeats a key already in the snapshot"
                )));
            }
        }

        let (head, tail) = match (self.head.as_ref(), self.tail.as_ref()) {
            (None, None) if links.is_empty() => return Ok(()),
            (Some(head), Some(tail)) if !links.is_empty() => (head, tail),
            _ if links.is_empty() => {
                return Err(SnapshotError::corrupt(
                    "empty snapshot names a head or tail",
                ));
            },
            _ => {
                return Err(SnapshotError::corrupt(
                    "non-empty snapshot must name both a head and a tail",
                ));
            },
        };

        for (prev, next) in links.values() {
            for target in [prev, next].into_iter().flatten() {
                if !links.contains_key(target) {
                    return Err(SnapshotError::corrupt(
                        "entry links to a key that is not in the snapshot",
                    ));
                }
            }
        }

        let mut visited = 0usize;
        let mut expected_prev: Option<&K> = None;
        let mut last = head;
        let mut current = Some(head);
        while let Some(key) = current {
            visited += 1;
            if visited > links.len() {
                return Err(SnapshotError::corrupt("recency chain contains a cycle"));
            }
            let &(prev, next) = links
                .get(key)
                .ok_or_else(|| SnapshotError::corrupt("head is not in the snapshot"))?;
            if prev != expected_prev {
                return Err(SnapshotError::corrupt(
                    "prev link does not mirror the chain order",
                ));
            }
            expected_prev = Some(key);
            last = key;
            current = next;
        }

        if last != tail {
            return Err(SnapshotError::corrupt("recency chain does not end at tail"));
        }
        if visited != links.len() {
            return Err(SnapshotError::corrupt(format!(
                "{} of {} entries are unreachable from head",
                links.len() - visited,
                links.len()
            )));
        }
        Ok(())
    }
}
