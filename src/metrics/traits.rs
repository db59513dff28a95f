//! # Metrics Recorder Traits
//!
//! Recorders only write counters; the store copies them out through
//! `metrics_snapshot()`. The split mirrors the store trait ladder:
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │
//!   │  get_hit/get_miss/insert    │
//!   │  remove/clear               │
//!   └──────────────┬──────────────┘
//!                  │
//!                  ▼
//!   ┌─────────────────────────────┐      ┌─────────────────────────────┐
//!   │   RecencyMetricsRecorder    │      │  RecencyMetricsReadRecorder │
//!   │  promote/pop/touch/import   │      │  peek/rank/export (&self)   │
//!   └─────────────────────────────┘      └─────────────────────────────┘
//! ```
//!
//! Read recorders take `&self` because the store methods they instrument do.

/// Common counters for any keyed store.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_clear(&mut self);
}

/// Counters for recency-chain maintenance.
pub trait RecencyMetricsRecorder: CoreMetricsRecorder {
    fn record_promotion(&mut self);
    fn record_promotion_noop(&mut self);
    fn record_pop_least_recent_call(&mut self);
    fn record_pop_least_recent_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_snapshot_import(&mut self);
    fn record_snapshot_rejected(&mut self);
}

/// Counters bumped from `&self` methods.
pub trait RecencyMetricsReadRecorder {
    fn record_snapshot_export(&self);
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}
