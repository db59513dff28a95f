//! recencykit: key-indexed storage with O(1) least-recently-used ordering.
//!
//! [`OrderedKeyStore`](store::OrderedKeyStore) maps keys to values and keeps
//! every key on a recency chain. Reads and writes promote a key to the most
//! recently used end; the least recently used key is always one field away.
//! The store never evicts by itself, so hosts decide when and what to drop.
//! Full state can be exported to and rebuilt from a snapshot.

pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod snapshot;
pub mod store;
pub mod traits;
