//! Operation counters for [`OrderedKeyStore`](crate::store::OrderedKeyStore).
//!
//! Compiled only with the `metrics` feature. Counters are plain integers
//! bumped inline by the store; read them with
//! [`OrderedKeyStore::metrics_snapshot`](crate::store::OrderedKeyStore::metrics_snapshot).

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
