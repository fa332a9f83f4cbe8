use crate::schema::{Field, FieldCode, Schema};

/// The ordered extraction plan for record values.
///
/// Entries are emitted in the same order as the flattened descriptors
/// they back, one per value-bearing column. Record flattening consumes
/// this plan verbatim so headers and data cells cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnPlan {
    pub entries: Vec<ColumnEntry>,
}

/// One planned column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEntry {
    pub kind: ColumnKind,

    /// Display identity of the field; synthetic for code-less fields.
    pub code: FieldCode,

    /// The schema map key the field was declared under. This is the
    /// resolution key for both the definition and the record value, and
    /// stays usable even when the display code is synthetic.
    pub key: String,

    /// Code of the containing group, when the column is a group member.
    /// Group membership changes where the field is displayed, not where
    /// its value lives in the record.
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A plain top-level field.
    Plain,

    /// A field displayed inside a group.
    GroupMember,

    /// A label field; records carry no value, the schema label is used.
    Label,
}

impl ColumnPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnEntry> {
        self.entries.iter()
    }
}

impl ColumnEntry {
    /// Resolves the field definition backing this column. Members resolve
    /// through their parent container; a plan built from a different
    /// schema resolves to `None`.
    pub fn field<'a>(&self, schema: &'a Schema) -> Option<&'a Field> {
        match &self.parent {
            Some(parent) => schema.get(parent)?.members()?.get(&self.key),
            None => schema.get(&self.key),
        }
    }
}
