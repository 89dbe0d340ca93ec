//! Lenient deserializers for upstream record fields
//!
//! A blueprint is a snapshot of data edited elsewhere. A field holding the
//! wrong type reads as its default and a row that is not a record is
//! skipped, so one bad value never makes the whole file unreadable.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::ids::SourceId;

/// Id given to records whose id is missing or not a whole number
pub const MISSING_ID: SourceId = 0;

#[derive(Deserialize)]
#[serde(untagged)]
enum Fallback<T> {
    Value(T),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(SourceId),
    Text(String),
    Other(IgnoredAny),
}

/// Read a field, falling back to `T::default()` when it has the wrong type
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Fallback::<T>::deserialize(deserializer)? {
        Fallback::Value(value) => value,
        Fallback::Other(_) => T::default(),
    })
}

/// Read a record id from a whole number or a numeric string
pub fn source_id<'de, D>(deserializer: D) -> Result<SourceId, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(id)) => Some(id),
        Some(RawId::Text(text)) => text.trim().parse::<SourceId>().ok(),
        Some(RawId::Other(_)) | None => None,
    };

    Ok(id.unwrap_or_else(|| {
        tracing::warn!(id = MISSING_ID, "record id is not a whole number");
        MISSING_ID
    }))
}

/// Read a text id, accepting numbers as well as strings
pub fn text_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => text,
        Some(RawId::Number(id)) => id.to_string(),
        Some(RawId::Other(_)) | None => String::new(),
    })
}

/// Read a list of records, skipping entries that are not records
///
/// `null` or a non-list value reads as an empty list.
pub fn rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = match Fallback::<Option<Vec<Fallback<T>>>>::deserialize(deserializer)? {
        Fallback::Value(rows) => rows.unwrap_or_default(),
        Fallback::Other(_) => {
            tracing::warn!("expected a list of records; reading it as empty");
            Vec::new()
        }
    };

    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .filter_map(|row| match row {
            Fallback::Value(record) => Some(record),
            Fallback::Other(_) => None,
        })
        .collect();

    if records.len() < total {
        tracing::warn!(skipped = total - records.len(), "skipped rows that are not records");
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "source_id")]
        id: SourceId,
        #[serde(default, deserialize_with = "or_default")]
        label: Option<String>,
        #[serde(default, deserialize_with = "or_default")]
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Table {
        #[serde(default, deserialize_with = "rows")]
        rows: Vec<Row>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_wrong_types_fall_back() {
        let parsed = row(r#"{"id": 4, "label": 1, "name": null}"#);
        assert_eq!(parsed.id, 4);
        assert_eq!(parsed.label, None);
        assert_eq!(parsed.name, "");

        let parsed = row(r#"{"id": 4, "label": "high", "name": ["x"]}"#);
        assert_eq!(parsed.label.as_deref(), Some("high"));
        assert_eq!(parsed.name, "");
    }

    #[test]
    fn test_source_id_forms() {
        assert_eq!(row(r#"{"id": "12"}"#).id, 12);
        assert_eq!(row(r#"{"id": null}"#).id, MISSING_ID);
        assert_eq!(row(r#"{"id": "abc"}"#).id, MISSING_ID);
        assert_eq!(row(r#"{"id": -3}"#).id, MISSING_ID);
        assert_eq!(row(r#"{}"#).id, MISSING_ID);
    }

    #[test]
    fn test_rows_skip_non_records() {
        let table: Table =
            serde_json::from_str(r#"{"rows": [{"id": 1}, "junk", 7, {"id": 2}]}"#).unwrap();
        let ids: Vec<SourceId> = table.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_rows_null_or_wrong_type() {
        let table: Table = serde_json::from_str(r#"{"rows": null}"#).unwrap();
        assert!(table.rows.is_empty());

        let table: Table = serde_json::from_str(r#"{"rows": {"id": 1}}"#).unwrap();
        assert!(table.rows.is_empty());
    }
}
