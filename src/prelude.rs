pub use crate::error::{InvariantError, SnapshotError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::StoreMetricsSnapshot;
pub use crate::snapshot::{BincodeCodec, JsonCodec, Snapshot, SnapshotCodec, SnapshotEntry};
pub use crate::store::OrderedKeyStore;
pub use crate::traits::{CoreStore, MutableStore, RecencyStore};
