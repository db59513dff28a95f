/// Point-in-time copy of [`OrderedKeyStore`](crate::store::OrderedKeyStore)
/// counters, plus gauges captured when the snapshot is taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub remove_calls: u64,
    pub remove_found: u64,
    pub clears: u64,

    pub promotions: u64,
    pub promotion_noops: u64, // promotions short-circuited because the key was already tail

    pub pop_least_recent_calls: u64,
    pub pop_least_recent_found: u64,
    pub peek_calls: u64,
    pub peek_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,

    pub snapshot_exports: u64,
    pub snapshot_imports: u64,
    pub snapshot_rejections: u64,

    // gauges captured at snapshot time
    pub len: usize,
}

impl StoreMetricsSnapshot {
    /// Fraction of `get` calls that found their key, or `0.0` with no calls.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_without_calls_is_zero() {
        let snapshot = StoreMetricsSnapshot::default();
        assert_eq!(snapshot.hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_divides_hits_by_calls() {
        let snapshot = StoreMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            get_misses: 1,
            ..Default::default()
        };
        assert!((snapshot.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
