//! Data models
//!
//! Upstream metrics payloads, their narrowed views, and the tool result envelope.

mod envelope;
mod metrics;

pub use envelope::{Envelope, Failure, FailureKind};
pub use metrics::{
    project, GlucoseData, HeartData, MetricsView, MovementData, Payload, RawMetrics, SleepData,
    ViewKind,
};
