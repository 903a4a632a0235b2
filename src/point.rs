//! The parsed line protocol point and its JSON projections.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::value::Value;

/// A single parsed line protocol point.
///
/// Tags and fields are kept as ordered sequences of `(key, value)` clauses
/// rather than one merged map: the order they appeared in (tags: sorted by
/// key) is preserved, and duplicate keys stay visible to downstream
/// consumers that need positional access.
///
/// Serializes to the clause-per-object JSON shape, e.g.
/// `{"measurement":"cpu","fields":[{"value":2.0}],"tags":[{"host":"a"}]}`,
/// with `timestamp` omitted entirely when the line carried none.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinePoint {
    /// The measurement (series) name.
    pub measurement: String,

    /// Nanoseconds since the Unix epoch, if the line carried a timestamp.
    /// Never defaulted to the current time or zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,

    /// Field clauses in input order, values already cast.
    #[serde(serialize_with = "clause_seq")]
    pub fields: Vec<(String, Value)>,

    /// Tag clauses sorted alphabetically by key. Tag values are always
    /// strings.
    #[serde(serialize_with = "clause_seq")]
    pub tags: Vec<(String, String)>,
}

impl LinePoint {
    /// Create an empty point for the given measurement.
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            timestamp: None,
            fields: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Get the first field with the given key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get the first tag with the given key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The timestamp as a UTC datetime.
    ///
    /// `None` when the line carried no timestamp, or when the nanosecond
    /// value exceeds what `chrono` can represent (beyond `i64` nanoseconds).
    pub fn time(&self) -> Option<DateTime<Utc>> {
        let nanos = i64::try_from(self.timestamp?).ok()?;
        Some(DateTime::from_timestamp_nanos(nanos))
    }

    /// Project this point into a flat JSON object.
    ///
    /// The tags and fields clause sequences are each flattened into a single
    /// JSON object. This is lossy for duplicate keys within a group (the
    /// last clause wins); use the `Serialize` impl when the clause-per-object
    /// shape must be preserved. `timestamp` is omitted when absent.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "measurement".to_string(),
            serde_json::Value::String(self.measurement.clone()),
        );
        if let Some(ts) = self.timestamp {
            map.insert("timestamp".to_string(), serde_json::json!(ts));
        }
        map.insert(
            "fields".to_string(),
            serde_json::Value::Object(
                self.fields
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::json!(v)))
                    .collect(),
            ),
        );
        map.insert(
            "tags".to_string(),
            serde_json::Value::Object(
                self.tags
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::json!(v)))
                    .collect(),
            ),
        );
        serde_json::Value::Object(map)
    }
}

/// Project a [`LinePoint`] into a flat JSON object.
///
/// Free-function alias for [`LinePoint::to_json`].
pub fn line_to_json(point: &LinePoint) -> serde_json::Value {
    point.to_json()
}

/// Serialize a clause list as a sequence of one-entry maps.
fn clause_seq<S, V>(clauses: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_seq(clauses.iter().map(Clause))
}

struct Clause<'a, V>(&'a (String, V));

impl<V: Serialize> Serialize for Clause<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (key, value) = self.0;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(key, value)?;
        map.end()
    }
}
