//! Error types for the recencykit library.
//!
//! ## Key Components
//!
//! - [`SnapshotError`]: Returned when a snapshot cannot be encoded, or when an
//!   imported snapshot fails to decode or describes a broken chain.
//! - [`InvariantError`]: Returned by
//!   [`OrderedKeyStore::check_invariants`](crate::store::OrderedKeyStore::check_invariants)
//!   when the index and the recency chain disagree.
//!
//! A missing key is never an error: lookups and removals report it as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use recencykit::error::SnapshotError;
//! use recencykit::store::OrderedKeyStore;
//!
//! let mut store: OrderedKeyStore<u32, String> = OrderedKeyStore::new();
//! let err = store.import("{ not json").unwrap_err();
//! assert!(matches!(err, SnapshotError::Corrupt(_)));
//! assert!(store.is_empty());
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// SnapshotError
// ---------------------------------------------------------------------------

/// Error produced by snapshot export and import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The codec could not serialize the store contents.
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    /// The input could not be decoded, or it decoded into a structure that
    /// does not form a valid recency chain.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}

impl SnapshotError {
    pub(crate) fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }

    /// Returns the error description without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Encode(msg) | Self::Corrupt(msg) => msg,
        }
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal store invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
