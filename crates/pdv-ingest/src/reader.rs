//! Record file reading.

use std::path::Path;

use encoding_rs::Encoding;
use pdv_model::Record;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{IngestError, Result};

/// Encoding of record files.
pub fn input_encoding() -> &'static Encoding {
    encoding_rs::WINDOWS_1251
}

/// One JSON entry before it is turned into a [`Record`].
///
/// Every field is optional so that a record missing a field is still
/// loaded; the missing field then fails its validation rule.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    telephone: Option<Value>,
    height: Option<Value>,
    snils: Option<Value>,
    passport_number: Option<Value>,
    age: Option<Value>,
    occupation: Option<Value>,
    political_views: Option<Value>,
    worldview: Option<Value>,
    address: Option<Value>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            telephone: raw.telephone.and_then(into_text),
            height: raw.height.and_then(into_numeric_text),
            snils: raw.snils.and_then(into_text),
            passport_number: raw.passport_number.and_then(into_text),
            age: raw.age.and_then(into_numeric_text),
            occupation: raw.occupation.and_then(into_text),
            political_views: raw.political_views.and_then(into_text),
            worldview: raw.worldview.and_then(into_text),
            address: raw.address.and_then(into_text),
        }
    }
}

/// Value of a text field. Only strings count; a number such as
/// `"snils": 12345678901` is the wrong shape and is treated as missing.
fn into_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        _ => None,
    }
}

/// Value of a numeric field (height, age) in textual form. Strings are kept
/// verbatim and numbers use `serde_json`'s rendering (`1.8`, `33`).
fn into_numeric_text(value: Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        other => into_text(other),
    }
}

/// Read and decode the record file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read record file");
    decode_records(&bytes, path)
}

/// Decode Windows-1251 bytes and parse them as a JSON array of records.
///
/// `path` is only used for error reporting.
pub fn decode_records(bytes: &[u8], path: &Path) -> Result<Vec<Record>> {
    let encoding = input_encoding();
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| IngestError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;

    let document: Value = serde_json::from_str(&text).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(IngestError::NotARecordList {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let parsed = match entry {
            Value::Object(_) => serde_json::from_value::<RawRecord>(entry)
                .map_err(|error| error.to_string()),
            other => Err(format!("found {}", json_kind(&other))),
        };
        let raw = parsed.unwrap_or_else(|error| {
            tracing::warn!(
                path = %path.display(),
                index,
                %error,
                "record entry is not an object, treating every field as missing"
            );
            RawRecord::default()
        });
        let record = Record::from(raw);
        let missing = record.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(index, ?missing, "record has missing fields");
        }
        records.push(record);
    }

    tracing::info!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdv_model::Field;

    fn decode(text: &str) -> Result<Vec<Record>> {
        let (bytes, _, had_errors) = input_encoding().encode(text);
        assert!(!had_errors, "fixture must be representable in windows-1251");
        decode_records(&bytes, Path::new("fixture.json"))
    }

    #[test]
    fn test_numeric_fields_keep_textual_form() {
        let records = decode(r#"[{"height": 1.8, "age": 25, "snils": "12345678901"}]"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Field::Height), Some("1.8"));
        assert_eq!(records[0].get(Field::Age), Some("25"));
        assert_eq!(records[0].get(Field::Snils), Some("12345678901"));
    }

    #[test]
    fn test_numbers_in_text_fields_are_missing() {
        let records = decode(
            r#"[{"telephone": 79123456789, "snils": 12345678901, "passport_number": 654321}]"#,
        )
        .unwrap();

        assert_eq!(records[0].get(Field::Telephone), None);
        assert_eq!(records[0].get(Field::Snils), None);
        assert_eq!(records[0].get(Field::PassportNumber), None);
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let records = decode(r#"[{"telephone": null, "occupation": true}]"#).unwrap();

        assert_eq!(records[0].get(Field::Telephone), None);
        assert_eq!(records[0].get(Field::Occupation), None);
        assert_eq!(records[0].missing_fields().len(), 9);
    }

    #[test]
    fn test_non_object_entry_becomes_empty_record() {
        let records = decode(r#"[42, ["+7-(912)-345-67-89"], {"age": "30"}]"#).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::default());
        assert_eq!(records[1], Record::default());
        assert_eq!(records[2].get(Field::Age), Some("30"));
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let result = decode(r#"{"telephone": "+7-(912)-345-67-89"}"#);

        assert!(matches!(
            result,
            Err(IngestError::NotARecordList {
                found: "an object",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = decode("[{\"age\": ");

        assert!(matches!(result, Err(IngestError::Json { .. })));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let records = decode(r#"[{"age": "30", "nickname": "x"}]"#).unwrap();

        assert_eq!(records[0].get(Field::Age), Some("30"));
    }
}
