//! Records fetched from the document store and typed access to their fields
//!
//! A record is a plain JSON object. Reshaping functions never look inside it
//! directly; callers hand them an accessor, and the helpers here build the
//! common ones (`by_field`, `date_field`) from a field name.

use crate::errors::{Result, UtilError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// One document from the store
pub type Record = Map<String, Value>;

/// Ordered query result
pub type Collection = Vec<Record>;

/// Hashable identity of a field value, used for grouping and deduplication
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// Field absent from the record
    Missing,

    /// String value, kept verbatim
    Text(String),

    /// Any other JSON value, as compact JSON text
    Json(String),
}

impl FieldKey {
    /// Build the key for an optional field value
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => FieldKey::Missing,
            Some(Value::String(text)) => FieldKey::Text(text.clone()),
            Some(other) => FieldKey::Json(other.to_string()),
        }
    }

    /// Label used when keys are written out as object keys
    pub fn label(&self) -> &str {
        match self {
            FieldKey::Missing => "undefined",
            FieldKey::Text(text) => text,
            FieldKey::Json(json) => json,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Key of `field` in `record`
pub fn field_key(record: &Record, field: &str) -> FieldKey {
    FieldKey::from_value(record.get(field))
}

/// Accessor closure yielding the key of `field`
pub fn by_field(field: &str) -> impl Fn(&Record) -> FieldKey + '_ {
    move |record: &Record| field_key(record, field)
}

/// Read `field` of `record` as an instant, `None` when absent or unreadable
pub fn field_date(record: &Record, field: &str) -> Option<DateTime<Utc>> {
    record.get(field).and_then(|value| parse_date_value(value).ok())
}

/// Accessor closure yielding `field` as an instant
pub fn date_field(field: &str) -> impl Fn(&Record) -> Option<DateTime<Utc>> + '_ {
    move |record: &Record| field_date(record, field)
}

/// Offset-less date-time layouts, tried after RFC 3339
const NAIVE_DATE_TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Interpret a JSON value as an instant
///
/// Accepted shapes:
/// - RFC 3339 strings
/// - ISO date-times without an offset (`2026-10-19T14:00:00`, `T` or space
///   separated, optional fraction), read as UTC
/// - bare `YYYY-MM-DD` dates (midnight UTC)
/// - integer or float epoch milliseconds
/// - store timestamp objects: `{"seconds", "nanoseconds"}` or the
///   underscore-prefixed variant produced by server-side serializers
pub fn parse_date_value(value: &Value) -> Result<DateTime<Utc>> {
    let invalid = || UtilError::InvalidTimestamp(value.to_string());

    match value {
        Value::String(text) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
                return Ok(parsed.with_timezone(&Utc));
            }
            for layout in NAIVE_DATE_TIME_LAYOUTS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
                    return Ok(Utc.from_utc_datetime(&naive));
                }
            }
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive))
                .ok_or_else(invalid)
        }
        Value::Number(number) => {
            let millis = match number.as_i64() {
                Some(ms) => ms,
                None => number
                    .as_f64()
                    .filter(|ms| ms.is_finite())
                    .map(|ms| ms.round() as i64)
                    .ok_or_else(invalid)?,
            };
            Utc.timestamp_millis_opt(millis).single().ok_or_else(invalid)
        }
        Value::Object(fields) => {
            let seconds = fields
                .get("seconds")
                .or_else(|| fields.get("_seconds"))
                .and_then(Value::as_i64)
                .ok_or_else(invalid)?;
            let nanos = fields
                .get("nanoseconds")
                .or_else(|| fields.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            let nanos = u32::try_from(nanos).map_err(|_| invalid())?;
            Utc.timestamp_opt(seconds, nanos).single().ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

/// True when the record has no fields
pub fn is_empty(record: &Record) -> bool {
    record.is_empty()
}

/// Structurally independent copy through a JSON round-trip
///
/// Only plain data survives the trip. Instead of silently dropping what does
/// not (non-finite floats, maps with non-string keys) the copy fails with a
/// serialization error.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let plain = serde_json::to_value(value)?;
    let copy = serde_json::from_value(plain)?;
    Ok(copy)
}

/// Parse a JSON array of objects into a collection
pub fn collection_from_json(text: &str) -> Result<Collection> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(UtilError::InvalidCollection(
            "expected a JSON array".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(UtilError::InvalidCollection(format!(
                "item {} is not an object: {}",
                index, other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_field_key_variants() {
        let r = record(json!({"category": "math", "likes": 1, "pinned": null}));
        assert_eq!(field_key(&r, "category"), FieldKey::Text("math".to_string()));
        assert_eq!(field_key(&r, "likes"), FieldKey::Json("1".to_string()));
        assert_eq!(field_key(&r, "pinned"), FieldKey::Json("null".to_string()));
        assert_eq!(field_key(&r, "absent"), FieldKey::Missing);
        assert_eq!(FieldKey::Missing.label(), "undefined");
    }

    #[test]
    fn test_string_and_number_keys_differ() {
        let a = record(json!({"n": 1}));
        let b = record(json!({"n": "1"}));
        assert_ne!(field_key(&a, "n"), field_key(&b, "n"));
    }

    #[test]
    fn test_parse_date_shapes() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 19, 7, 0, 0).unwrap();

        let rfc = json!("2026-10-19T14:00:00+07:00");
        assert_eq!(parse_date_value(&rfc).unwrap(), expected);

        let millis = json!(expected.timestamp_millis());
        assert_eq!(parse_date_value(&millis).unwrap(), expected);

        let stamp = json!({"seconds": expected.timestamp(), "nanoseconds": 0});
        assert_eq!(parse_date_value(&stamp).unwrap(), expected);

        let server_stamp = json!({"_seconds": expected.timestamp(), "_nanoseconds": 0});
        assert_eq!(parse_date_value(&server_stamp).unwrap(), expected);

        let day = json!("2026-10-19");
        assert_eq!(
            parse_date_value(&day).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_offsetless_date_time_as_utc() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap();
        assert_eq!(parse_date_value(&json!("2026-10-19T14:00:00")).unwrap(), expected);
        assert_eq!(parse_date_value(&json!("2026-10-19 14:00:00")).unwrap(), expected);

        let fractional = parse_date_value(&json!("2026-10-19T14:00:00.250")).unwrap();
        assert_eq!(fractional.timestamp_millis(), expected.timestamp_millis() + 250);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date_value(&json!("yesterday")),
            Err(UtilError::InvalidTimestamp(_))
        ));
        assert!(parse_date_value(&json!(true)).is_err());
        assert!(parse_date_value(&json!({"nanoseconds": 5})).is_err());
    }

    #[test]
    fn test_date_field_accessor() {
        let r = record(json!({"createdAt": "2026-01-02T03:04:05Z", "bad": "nope"}));
        let created = date_field("createdAt");
        assert!(created(&r).is_some());
        assert!(field_date(&r, "bad").is_none());
        assert!(field_date(&r, "missing").is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Record::new()));
        assert!(!is_empty(&record(json!({"a": 1}))));
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let original = Note {
            title: "Linear algebra".to_string(),
            tags: vec!["math".to_string()],
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        };

        let mut copy = deep_clone(&original).unwrap();
        assert_eq!(copy, original);

        copy.tags.push("exam".to_string());
        assert_eq!(original.tags.len(), 1);
    }

    #[test]
    fn test_deep_clone_rejects_lossy_values() {
        assert!(matches!(
            deep_clone(&vec![1.0f64, f64::NAN]),
            Err(UtilError::Serialization(_))
        ));

        let mut tuple_keys: HashMap<(u8, u8), u8> = HashMap::new();
        tuple_keys.insert((1, 2), 3);
        assert!(deep_clone(&tuple_keys).is_err());
    }

    #[test]
    fn test_collection_from_json() {
        let collection = collection_from_json(r#"[{"a": 1}, {"b": 2}]"#).unwrap();
        assert_eq!(collection.len(), 2);

        assert!(matches!(
            collection_from_json(r#"{"a": 1}"#),
            Err(UtilError::InvalidCollection(_))
        ));
        assert!(matches!(
            collection_from_json(r#"[{"a": 1}, 3]"#),
            Err(UtilError::InvalidCollection(_))
        ));
    }
}
