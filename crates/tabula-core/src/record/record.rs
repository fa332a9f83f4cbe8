use super::FieldValue;
use crate::util::json_text;
use crate::{Json, Result};

use indexmap::IndexMap;

/// Identity shown when a record carries no `$id` entry.
const MISSING_RECORD_ID: &str = "-";

/// One fetched record: a map from field code to raw value wrapper, plus
/// the record's identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub record_id: String,
    pub fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Converts one parsed record object. The `$id` system entry becomes
    /// the record id.
    pub fn from_value(value: Json) -> Result<Self> {
        let fields: IndexMap<String, FieldValue> = serde_json::from_value(value)?;

        let record_id = fields
            .get("$id")
            .map(|id| json_text(&id.value))
            .filter(|id| !id.is_empty() && id.as_str() != "null")
            .unwrap_or_else(|| MISSING_RECORD_ID.to_string());

        Ok(Self { record_id, fields })
    }

    /// Parses a record-list payload (`{ "records": [ ... ] }`).
    pub fn list_from_json(src: &str) -> Result<Vec<Self>> {
        let value: Json = serde_json::from_str(src)?;
        Self::list_from_value(value)
    }

    pub fn list_from_value(value: Json) -> Result<Vec<Self>> {
        let records = match value {
            Json::Object(mut map) => match map.remove("records") {
                Some(Json::Array(records)) => records,
                _ => Vec::new(),
            },
            Json::Array(records) => records,
            _ => Vec::new(),
        };

        records.into_iter().map(Self::from_value).collect()
    }

    /// The raw value wrapper for a field code, if the record carries one.
    pub fn value(&self, code: &str) -> Option<&FieldValue> {
        self.fields.get(code)
    }
}
