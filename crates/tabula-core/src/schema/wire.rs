//! Deserialization of schema payloads into the typed model.
//!
//! Ingestion is lenient by design: unknown type tags are preserved,
//! containers with no member map degrade to empty, and code-less entries
//! synthesize their identity. The goal is a best-effort schema rather
//! than a validation failure.

use super::{
    Calc, Condition, Field, FieldCode, FieldMap, FieldMapping, FieldTy, Lookup, ReferenceTable,
    RelatedApp, Schema, Sort,
};
use crate::util::{json_text, truthy};
use crate::{Json, Result};

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WireSchema {
    properties: IndexMap<String, WireField>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct WireField {
    #[serde(rename = "type")]
    ty: Option<String>,
    code: Option<String>,
    label: Option<String>,
    required: Option<Json>,
    description: Option<String>,
    expression: Option<String>,
    default_value: Option<Json>,
    options: Option<IndexMap<String, Json>>,
    lookup: Option<WireLookup>,
    reference_table: Option<WireReferenceTable>,
    fields: Option<IndexMap<String, WireField>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct WireLookup {
    related_app: Option<WireRelatedApp>,
    related_key_field: Option<String>,
    field_mappings: Vec<WireFieldMapping>,
    lookup_picker_fields: Vec<String>,
    filter_cond: Option<Json>,
    sort: Option<Json>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct WireReferenceTable {
    related_app: Option<WireRelatedApp>,
    condition: Option<Json>,
    filter_cond: Option<Json>,
    display_fields: Vec<String>,
    sort: Option<Json>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WireRelatedApp {
    app: Option<Json>,
    code: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct WireFieldMapping {
    field: String,
    related_field: String,
}

pub(crate) fn schema_from_value(value: Json) -> Result<Schema> {
    let wire: WireSchema = serde_json::from_value(value)?;

    let fields = wire
        .properties
        .into_iter()
        .map(|(key, field)| {
            let field = convert_field(&key, field, true);
            (key, field)
        })
        .collect();

    Ok(Schema { fields })
}

fn convert_field(key: &str, wire: WireField, allow_members: bool) -> Field {
    let tag = wire.ty.unwrap_or_default();

    let ty = match tag.as_str() {
        "SINGLE_LINE_TEXT" => FieldTy::SingleLineText,
        "MULTI_LINE_TEXT" => FieldTy::MultiLineText,
        "RICH_TEXT" => FieldTy::RichText,
        "NUMBER" => FieldTy::Number,
        "CALC" => FieldTy::Calc(Calc {
            expression: wire.expression.clone().filter(|e| !e.is_empty()).or_else(|| {
                wire.options
                    .as_ref()
                    .and_then(|options| options.get("expression"))
                    .and_then(Json::as_str)
                    .map(String::from)
            }),
        }),
        "RADIO_BUTTON" => FieldTy::RadioButton,
        "CHECK_BOX" => FieldTy::CheckBox,
        "MULTI_SELECT" => FieldTy::MultiSelect,
        "DROP_DOWN" => FieldTy::DropDown,
        "DATE" => FieldTy::Date,
        "TIME" => FieldTy::Time,
        "DATETIME" => FieldTy::DateTime,
        "LINK" => FieldTy::Link,
        "FILE" => FieldTy::File,
        "USER_SELECT" => FieldTy::UserSelect,
        "ORGANIZATION_SELECT" => FieldTy::OrganizationSelect,
        "GROUP_SELECT" => FieldTy::GroupSelect,
        "REFERENCE_TABLE" => {
            FieldTy::ReferenceTable(convert_reference(wire.reference_table.unwrap_or_default()))
        }
        "SUBTABLE" => FieldTy::Subtable(convert_members(key, wire.fields, allow_members)),
        "GROUP" => FieldTy::Group(convert_members(key, wire.fields, allow_members)),
        "LABEL" => FieldTy::Label,
        "CREATOR" => FieldTy::Creator,
        "CREATED_TIME" => FieldTy::CreatedTime,
        "MODIFIER" => FieldTy::Modifier,
        "UPDATED_TIME" => FieldTy::UpdatedTime,
        "CATEGORY" => FieldTy::Category,
        "STATUS" => FieldTy::Status,
        "STATUS_ASSIGNEE" => FieldTy::StatusAssignee,
        "RECORD_NUMBER" => FieldTy::RecordNumber,
        "SPACER" => FieldTy::Spacer,
        "HR" => FieldTy::Hr,
        other => FieldTy::Other(other.to_string()),
    };

    // Label entries never carry an independent code; everything else
    // falls back to the map key before synthesizing.
    let code = if ty.is_label() {
        FieldCode::Synthetic
    } else {
        FieldCode::new(wire.code.filter(|c| !c.trim().is_empty()).unwrap_or_else(|| key.to_string()))
    };

    let label = match &ty {
        FieldTy::Label => wire.label.unwrap_or_default(),
        _ => wire
            .label
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| key.to_string()),
    };

    Field {
        code,
        label,
        ty,
        required: wire.required.as_ref().is_some_and(truthy),
        description: wire.description.unwrap_or_default(),
        default_value: wire.default_value.filter(|v| !v.is_null()),
        options: wire.options,
        lookup: wire.lookup.map(convert_lookup),
    }
}

fn convert_members(
    parent: &str,
    fields: Option<IndexMap<String, WireField>>,
    allow_members: bool,
) -> FieldMap {
    if !allow_members {
        log::warn!("container nested inside {parent} is not supported; dropping its members");
        return FieldMap::new();
    }

    // An absent member map degrades to zero members.
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|(key, field)| {
            let field = convert_field(&key, field, false);
            (key, field)
        })
        .collect()
}

fn convert_lookup(wire: WireLookup) -> Lookup {
    Lookup {
        related_app: wire.related_app.map(convert_related_app),
        related_key_field: wire.related_key_field.filter(|k| !k.is_empty()),
        field_mappings: wire
            .field_mappings
            .into_iter()
            .map(|mapping| FieldMapping {
                field: mapping.field,
                related_field: mapping.related_field,
            })
            .collect(),
        picker_fields: wire.lookup_picker_fields,
        filter_cond: opt_condition(wire.filter_cond),
        sort: opt_sort(wire.sort),
    }
}

fn convert_reference(wire: WireReferenceTable) -> ReferenceTable {
    ReferenceTable {
        related_app: wire.related_app.map(convert_related_app),
        condition: opt_condition(wire.condition),
        filter_cond: opt_condition(wire.filter_cond),
        display_fields: wire.display_fields,
        sort: opt_sort(wire.sort),
    }
}

fn convert_related_app(wire: WireRelatedApp) -> RelatedApp {
    RelatedApp {
        app: wire.app.as_ref().map(json_text).unwrap_or_default(),
        code: wire.code.filter(|c| !c.is_empty()),
    }
}

fn opt_condition(value: Option<Json>) -> Option<Condition> {
    let value = value?;
    if !truthy(&value) {
        return None;
    }
    Some(Condition::from_value(&value))
}

fn opt_sort(value: Option<Json>) -> Option<Sort> {
    let value = value?;
    if !truthy(&value) {
        return None;
    }
    Some(Sort::from_value(&value))
}
