//! Metrics models
//!
//! The raw upstream payload and the four narrowed views derived from it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Something an envelope can carry, published under its own key
pub trait Payload: Serialize {
    fn payload_key(&self) -> &'static str;
}

/// Untyped metrics object returned by the Partnership API for one (email, date).
///
/// No schema is enforced beyond key lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMetrics(Map<String, Value>);

impl RawMetrics {
    /// Look up a field; `None` means the upstream did not send it at all
    pub fn field(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }
}

impl Payload for RawMetrics {
    fn payload_key(&self) -> &'static str {
        "metrics"
    }
}

/// Sleep view: the upstream `sleep_data` value as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SleepData(pub Option<Value>);

impl From<&RawMetrics> for SleepData {
    fn from(raw: &RawMetrics) -> Self {
        Self(raw.field("sleep_data"))
    }
}

/// Movement and activity view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovementData {
    pub steps: Option<Value>,
    pub movement_index: Option<Value>,
    pub movement_data: Option<Value>,
}

impl From<&RawMetrics> for MovementData {
    fn from(raw: &RawMetrics) -> Self {
        Self {
            steps: raw.field("steps"),
            movement_index: raw.field("movement_index"),
            movement_data: raw.field("movement_data"),
        }
    }
}

/// Glucose and metabolic view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlucoseData {
    pub glucose: Option<Value>,
    pub glucose_variability: Option<Value>,
    pub average_glucose: Option<Value>,
    pub hba1c: Option<Value>,
    pub time_in_target: Option<Value>,
    pub metabolic_score: Option<Value>,
}

impl From<&RawMetrics> for GlucoseData {
    fn from(raw: &RawMetrics) -> Self {
        Self {
            glucose: raw.field("glucose"),
            glucose_variability: raw.field("glucose_variability"),
            average_glucose: raw.field("average_glucose"),
            hba1c: raw.field("hba1c"),
            time_in_target: raw.field("time_in_target"),
            metabolic_score: raw.field("metabolic_score"),
        }
    }
}

/// Heart and recovery view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeartData {
    pub heart_rate: Option<Value>,
    pub hrv: Option<Value>,
    pub recovery_index: Option<Value>,
    pub vo2_max: Option<Value>,
}

impl From<&RawMetrics> for HeartData {
    fn from(raw: &RawMetrics) -> Self {
        Self {
            heart_rate: raw.field("heart_rate"),
            hrv: raw.field("hrv"),
            recovery_index: raw.field("recovery_index"),
            vo2_max: raw.field("vo2_max"),
        }
    }
}

/// Which narrowed view to derive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Sleep,
    Movement,
    Glucose,
    Heart,
}

impl ViewKind {
    /// Envelope key the view is returned under
    pub fn payload_key(&self) -> &'static str {
        match self {
            ViewKind::Sleep => "sleep_data",
            ViewKind::Movement => "movement_data",
            ViewKind::Glucose => "glucose_data",
            ViewKind::Heart => "heart_data",
        }
    }
}

/// A projected view of a metrics payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricsView {
    Sleep(SleepData),
    Movement(MovementData),
    Glucose(GlucoseData),
    Heart(HeartData),
}

impl MetricsView {
    pub fn kind(&self) -> ViewKind {
        match self {
            MetricsView::Sleep(_) => ViewKind::Sleep,
            MetricsView::Movement(_) => ViewKind::Movement,
            MetricsView::Glucose(_) => ViewKind::Glucose,
            MetricsView::Heart(_) => ViewKind::Heart,
        }
    }
}

impl Payload for MetricsView {
    fn payload_key(&self) -> &'static str {
        self.kind().payload_key()
    }
}

/// Project a raw payload into one view. Total: absent fields become `None`.
pub fn project(view: ViewKind, raw: &RawMetrics) -> MetricsView {
    match view {
        ViewKind::Sleep => MetricsView::Sleep(SleepData::from(raw)),
        ViewKind::Movement => MetricsView::Movement(MovementData::from(raw)),
        ViewKind::Glucose => MetricsView::Glucose(GlucoseData::from(raw)),
        ViewKind::Heart => MetricsView::Heart(HeartData::from(raw)),
    }
}
