use crate::domain::model::{Record, RekeyedData};
use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-dataset field mapping: which field keys the output object and which
/// fields get coerced from their string encodings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSpec {
    pub name: String,
    pub input_file: String,
    pub output_file: String,
    pub identifier_field: String,
    #[serde(default)]
    pub boolean_fields: Vec<String>,
    #[serde(default)]
    pub integer_fields: Vec<String>,
    #[serde(default)]
    pub strict: bool,
}

impl TransformSpec {
    pub fn mounts() -> Self {
        Self {
            name: "mounts".to_string(),
            input_file: "mounts.json".to_string(),
            output_file: "mounts-new.json".to_string(),
            identifier_field: "id".to_string(),
            boolean_fields: vec!["premium".to_string()],
            integer_fields: vec!["speed".to_string()],
            strict: false,
        }
    }

    pub fn outfits() -> Self {
        Self {
            name: "outfits".to_string(),
            input_file: "outfits.json".to_string(),
            output_file: "outfits-new.json".to_string(),
            identifier_field: "looktype".to_string(),
            boolean_fields: vec![
                "enabled".to_string(),
                "unlocked".to_string(),
                "premium".to_string(),
            ],
            integer_fields: vec![],
            strict: false,
        }
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "mounts" => Some(Self::mounts()),
            "outfits" => Some(Self::outfits()),
            _ => None,
        }
    }
}

/// Exact-match policy: only the literal string "yes" counts as true.
/// Everything else ("Yes", "no", numbers, booleans) is false.
pub fn flag_from_yes_no(value: &Value) -> bool {
    value.as_str() == Some("yes")
}

/// Strict integer parser for string-encoded counts. Values that are already
/// integer numbers pass through; surrounding whitespace is tolerated.
pub fn integer_from_value(field: &str, value: &Value) -> Result<i64> {
    match value {
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| EtlError::InvalidNumber {
            field: field.to_string(),
            value: s.clone(),
        }),
        Value::Number(n) => n.as_i64().ok_or_else(|| EtlError::InvalidNumber {
            field: field.to_string(),
            value: n.to_string(),
        }),
        other => Err(EtlError::InvalidNumber {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn map_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Folds the input array into a map keyed by the identifier field. The
/// identifier is removed from each record body; later records overwrite
/// earlier ones with the same identifier unless `spec.strict` is set.
pub fn rekey_records(records: Vec<Record>, spec: &TransformSpec) -> Result<RekeyedData> {
    let record_count = records.len();
    let mut entries = Map::new();

    for (index, record) in records.into_iter().enumerate() {
        let mut data = record.data;

        let id_value =
            data.remove(&spec.identifier_field)
                .ok_or_else(|| EtlError::MissingField {
                    field: spec.identifier_field.clone(),
                    record: index,
                })?;
        let key = map_key(&id_value);

        for field in &spec.boolean_fields {
            let value = data.get_mut(field).ok_or_else(|| EtlError::MissingField {
                field: field.clone(),
                record: index,
            })?;
            let flag = flag_from_yes_no(value);
            *value = Value::Bool(flag);
        }

        for field in &spec.integer_fields {
            let value = data.get_mut(field).ok_or_else(|| EtlError::MissingField {
                field: field.clone(),
                record: index,
            })?;
            let parsed = integer_from_value(field, value)?;
            *value = Value::Number(parsed.into());
        }

        if spec.strict && entries.contains_key(&key) {
            return Err(EtlError::DuplicateIdentifier {
                field: spec.identifier_field.clone(),
                key,
            });
        }

        entries.insert(key, Value::Object(data));
    }

    Ok(RekeyedData {
        entries,
        record_count,
    })
}
