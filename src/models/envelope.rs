//! Tool result envelope
//!
//! Every metrics tool answers with either a success carrying one payload or a
//! failure carrying one error message, never both. On the wire both are a flat
//! JSON object with a `success` flag and the echoed request fields.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::metrics::Payload;

/// Category of a recovered failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Required local configuration is missing
    Configuration,
    /// Upstream answered with a non-2xx status
    Upstream,
    /// Connection failure, timeout or unreadable response
    Transport,
}

/// A failed tool call that was recovered into a result
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: FailureKind,
    pub error: String,
    pub email: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success { email: String, date: String, payload: T },
    Failure(Failure),
}

impl<T> Envelope<T> {
    pub fn success(email: impl Into<String>, date: impl Into<String>, payload: T) -> Self {
        Envelope::Success {
            email: email.into(),
            date: date.into(),
            payload,
        }
    }

    pub fn failure(
        kind: FailureKind,
        error: impl Into<String>,
        email: Option<String>,
        date: impl Into<String>,
    ) -> Self {
        Envelope::Failure(Failure {
            kind,
            error: error.into(),
            email,
            date: date.into(),
        })
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Failure(failure) => Some(failure),
        }
    }

    /// Transform the payload of a success; failures pass through untouched
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Envelope::Success { email, date, payload } => Envelope::Success {
                email,
                date,
                payload: f(payload),
            },
            Envelope::Failure(failure) => Envelope::Failure(failure),
        }
    }
}

impl<T: Payload> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success { email, date, payload } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("email", email)?;
                map.serialize_entry("date", date)?;
                map.serialize_entry(payload.payload_key(), payload)?;
                map.end()
            }
            Envelope::Failure(failure) => {
                let len = if failure.email.is_some() { 4 } else { 3 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", &failure.error)?;
                if let Some(email) = &failure.email {
                    map.serialize_entry("email", email)?;
                }
                map.serialize_entry("date", &failure.date)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovementData, RawMetrics};
    use serde_json::{json, Value};

    #[test]
    fn test_success_serialization() {
        let metrics: RawMetrics = serde_json::from_value(json!({"steps": 5000})).unwrap();
        let envelope = Envelope::success("u@x.com", "2024-01-15", metrics);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": true,
                "email": "u@x.com",
                "date": "2024-01-15",
                "metrics": {"steps": 5000}
            })
        );
    }

    #[test]
    fn test_failure_serialization_has_no_payload_key() {
        let envelope: Envelope<RawMetrics> = Envelope::failure(
            FailureKind::Upstream,
            "HTTP 401: unauthorized",
            Some("u@x.com".to_string()),
            "2024-01-15",
        );
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "HTTP 401: unauthorized",
                "email": "u@x.com",
                "date": "2024-01-15"
            })
        );
        assert!(value.get("metrics").is_none());
    }

    #[test]
    fn test_failure_without_email_omits_key() {
        let envelope: Envelope<RawMetrics> =
            Envelope::failure(FailureKind::Configuration, "missing", None, "2024-01-15");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value.get("email"), None);
        assert_eq!(value["success"], Value::Bool(false));
    }

    #[test]
    fn test_map_passes_failure_through() {
        let failure: Envelope<RawMetrics> = Envelope::failure(
            FailureKind::Transport,
            "connection refused",
            Some("u@x.com".to_string()),
            "2024-01-15",
        );
        let mapped: Envelope<MovementData> = failure.clone().map(|raw| MovementData::from(&raw));
        assert_eq!(mapped.failure_ref(), failure.failure_ref());
    }
}
