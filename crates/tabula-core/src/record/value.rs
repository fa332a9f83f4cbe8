use crate::util::json_text;
use crate::Json;

use indexmap::IndexMap;
use serde::Deserialize;

/// One field's raw value inside a fetched record.
///
/// The wire shape is `{ "type": "...", "value": T }` where `T` varies by
/// field type: scalars for text-like fields, arrays for selections and
/// attachments, named objects for actors, row lists for sub-tables. The
/// payload is kept as JSON; extraction is driven by the schema type, not
/// by the value's shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldValue {
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub value: Json,
}

/// One row of a sub-table value: `{ "id": ..., "value": { code: value } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableRow {
    pub value: IndexMap<String, FieldValue>,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// A plain array value (checkbox, multi select), passed through with
    /// each element in its text form.
    pub fn string_list(&self) -> Vec<String> {
        self.value
            .as_array()
            .map(|items| items.iter().map(json_text).collect())
            .unwrap_or_default()
    }

    /// Named entries (user/organization/group selection): each entry's
    /// name, falling back to its code.
    pub fn entry_names(&self) -> Vec<String> {
        self.value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        entry_token(item, "name")
                            .or_else(|| entry_token(item, "code"))
                            .unwrap_or_else(|| json_text(item))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attachment names.
    pub fn file_names(&self) -> Vec<String> {
        self.value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| entry_token(item, "name").unwrap_or_else(|| json_text(item)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Actor value (creator/modifier): name, falling back to code,
    /// falling back to the JSON rendering.
    pub fn actor_text(&self) -> String {
        entry_token(&self.value, "name")
            .or_else(|| entry_token(&self.value, "code"))
            .unwrap_or_else(|| self.value.to_string())
    }

    /// The wrapped value rendered as display text, unwrapping object and
    /// array shapes one level.
    pub fn scalar_text(&self) -> String {
        match &self.value {
            Json::Null => String::new(),
            Json::Array(items) => {
                let items: Vec<String> = items.iter().map(json_text).collect();
                items.join(", ")
            }
            Json::Object(_) => entry_token(&self.value, "name")
                .or_else(|| entry_token(&self.value, "code"))
                .unwrap_or_else(|| self.value.to_string()),
            other => json_text(other),
        }
    }

    /// Sub-table rows; non-row shapes degrade to zero rows.
    pub fn table_rows(&self) -> Vec<TableRow> {
        serde_json::from_value(self.value.clone()).unwrap_or_default()
    }

    /// Number of sub-table rows without materializing them.
    pub fn row_count(&self) -> usize {
        self.value.as_array().map(Vec::len).unwrap_or(0)
    }
}

fn entry_token(value: &Json, key: &str) -> Option<String> {
    value
        .get(key)?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}
