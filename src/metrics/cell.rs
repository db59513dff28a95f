use std::cell::Cell;

/// A counter that can be bumped through a shared reference.
///
/// Used for operations that take `&self` on the store (`peek`,
/// `recency_rank`, `export`). The store is single-owner, so plain `Cell`
/// is enough; this type is `Send` but not `Sync`.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
