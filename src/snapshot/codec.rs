//! Snapshot encodings.
//!
//! ## Key Components
//!
//! | Codec          | Encoded    | Notes                                   |
//! |----------------|------------|-----------------------------------------|
//! | [`JsonCodec`]  | `String`   | Default for `export`/`import`; readable |
//! | [`BincodeCodec`] | `Vec<u8>` | Compact binary form                     |
//!
//! Decoding failures of either codec surface as
//! [`SnapshotError::Corrupt`]; structural validation happens afterwards in
//! [`Snapshot::validate`](super::Snapshot::validate).

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Snapshot;
use crate::error::SnapshotError;

/// Encodes and decodes a [`Snapshot`] to a concrete representation.
///
/// # Example
///
/// ```
/// use recencykit::snapshot::{BincodeCodec, SnapshotCodec};
/// use recencykit::store::OrderedKeyStore;
///
/// let mut store = OrderedKeyStore::new();
/// store.insert(1u64, "one".to_string());
/// store.insert(2u64, "two".to_string());
///
/// let bytes = store.export_with(&BincodeCodec).unwrap();
///
/// let mut restored: OrderedKeyStore<u64, String> = OrderedKeyStore::new();
/// restored.import_with(&BincodeCodec, &bytes).unwrap();
/// assert_eq!(restored.least_recent_key(), Some(&1));
/// ```
pub trait SnapshotCodec {
    /// The encoded form produced by [`encode`](Self::encode).
    type Encoded: AsRef<[u8]>;

    fn encode<K, V>(&self, snapshot: &Snapshot<K, V>) -> Result<Self::Encoded, SnapshotError>
    where
        K: Serialize,
        V: Serialize;

    fn decode<K, V>(&self, raw: &[u8]) -> Result<Snapshot<K, V>, SnapshotError>
    where
        K: DeserializeOwned,
        V: DeserializeOwned;
}

/// JSON snapshots via `serde_json`.
///
/// JSON has no representation for non-finite floats: `serde_json` writes
/// `NaN` and the infinities as `null`, which then fails to decode. Stores
/// whose keys or values may hold such floats should use [`BincodeCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Compact single-line JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON, for snapshots meant to be read by people.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl SnapshotCodec for JsonCodec {
    type Encoded = String;

    fn encode<K, V>(&self, snapshot: &Snapshot<K, V>) -> Result<String, SnapshotError>
    where
        K: Serialize,
        V: Serialize,
    {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(snapshot)
        } else {
            serde_json::to_string(snapshot)
        };
        encoded.map_err(|err| SnapshotError::Encode(err.to_string()))
    }

    fn decode<K, V>(&self, raw: &[u8]) -> Result<Snapshot<K, V>, SnapshotError>
    where
        K: DeserializeOwned,
        V: DeserializeOwned,
    {
        serde_json::from_slice(raw).map_err(|err| SnapshotError::corrupt(err.to_string()))
    }
}

/// Binary snapshots via `bincode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl SnapshotCodec for BincodeCodec {
    type Encoded = Vec<u8>;

    fn encode<K, V>(&self, snapshot: &Snapshot<K, V>) -> Result<Vec<u8>, SnapshotError>
    where
        K: Serialize,
        V: Serialize,
    {
        bincode::serialize(snapshot).map_err(|err| SnapshotError::Encode(err.to_string()))
    }

    fn decode<K, V>(&self, raw: &[u8]) -> Result<Snapshot<K, V>, SnapshotError>
    where
        K: DeserializeOwned,
        V: DeserializeOwned,
    {
        bincode::deserialize(raw).map_err(|err| SnapshotError::corrupt(err.to_string()))
    }
}
