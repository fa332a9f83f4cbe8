use super::{wire, Field, FieldTy};
use crate::{Json, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

/// The declared field set of one application, keyed by field code.
///
/// Insertion order is the source's order and is treated as display order
/// for top-level fields; no further meaning is attached to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub fields: IndexMap<String, Field>,
}

impl Schema {
    /// Parses a schema payload (`{ "properties": { ... } }`).
    pub fn from_json(src: &str) -> Result<Self> {
        let value: Json = serde_json::from_str(src)?;
        Self::from_value(value)
    }

    /// Converts an already-parsed schema payload.
    pub fn from_value(value: Json) -> Result<Self> {
        wire::schema_from_value(value)
    }

    /// Builds a schema directly from typed fields, preserving order.
    pub fn from_fields(fields: impl IntoIterator<Item = (String, Field)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Field> {
        self.fields.get(code)
    }

    /// Top-level fields in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(code, field)| (code.as_str(), field))
    }

    /// Codes that appear inside any group's member map.
    ///
    /// A top-level entry with one of these codes is displayed only once,
    /// as part of its parent group.
    pub fn group_member_codes(&self) -> HashSet<&str> {
        self.fields
            .values()
            .filter_map(|field| field.ty.as_group())
            .flat_map(|members| members.keys().map(String::as_str))
            .collect()
    }

    /// Sub-table fields in source order.
    pub fn subtables(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields().filter(|(_, field)| field.ty.is_subtable())
    }

    pub fn count_groups(&self) -> usize {
        self.fields.values().filter(|f| f.ty.is_group()).count()
    }

    pub fn count_subtables(&self) -> usize {
        self.fields.values().filter(|f| f.ty.is_subtable()).count()
    }

    /// A copy of this schema with every label field removed.
    ///
    /// Record tables never show label fields. Groups whose members are all
    /// labels disappear along with them.
    pub fn without_labels(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .filter(|(_, field)| !field.ty.is_label())
            .filter_map(|(code, field)| {
                let field = match &field.ty {
                    FieldTy::Group(members) => {
                        let kept: super::FieldMap = members
                            .iter()
                            .filter(|(_, member)| !member.ty.is_label())
                            .map(|(code, member)| (code.clone(), member.clone()))
                            .collect();
                        if kept.is_empty() {
                            return None;
                        }
                        Field {
                            ty: FieldTy::Group(kept),
                            ..field.clone()
                        }
                    }
                    _ => field.clone(),
                };
                Some((code.clone(), field))
            })
            .collect();

        Self { fields }
    }
}
