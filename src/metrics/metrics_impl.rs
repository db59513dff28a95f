use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, RecencyMetricsReadRecorder, RecencyMetricsRecorder,
};

#[derive(Debug, Default)]
pub struct StoreMetrics {
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
    pub promotion_noops: u64,
    pub pop_least_recent_calls: u64,
    pub pop_least_recent_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub snapshot_exports: MetricsCell,
    pub snapshot_imports: u64,
    pub snapshot_rejections: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
}

impl CoreMetricsRecorder for StoreMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl RecencyMetricsRecorder for StoreMetrics {
    fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    fn record_promotion_noop(&mut self) {
        self.promotion_noops += 1;
    }

    fn record_pop_least_recent_call(&mut self) {
        self.pop_least_recent_calls += 1;
    }

    fn record_pop_least_recent_found(&mut self) {
        self.pop_least_recent_found += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }

    fn record_snapshot_import(&mut self) {
        self.snapshot_imports += 1;
    }

    fn record_snapshot_rejected(&mut self) {
        self.snapshot_rejections += 1;
    }
}

impl RecencyMetricsReadRecorder for StoreMetrics {
    fn record_snapshot_export(&self) {
        self.snapshot_exports.incr();
    }

    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }

    fn record_recency_rank_call(&self) {
        self.recency_rank_calls.incr();
    }

    fn record_recency_rank_found(&self) {
        self.recency_rank_found.incr();
    }

    fn record_recency_rank_scan_step(&self) {
        self.recency_rank_scan_steps.incr();
    }
}
