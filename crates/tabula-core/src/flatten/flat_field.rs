use crate::schema::{Field, FieldCode};

/// One display-ready field descriptor produced by flattening.
///
/// Every field reachable from the schema yields exactly one descriptor,
/// except containers: a group contributes its members (tagged with the
/// parent), a sub-table contributes a single summary descriptor.
#[derive(Debug, Clone)]
pub struct FlatField<'a> {
    /// Display identity; synthetic for code-less fields.
    pub code: FieldCode,

    /// Display name. Group members render as `parent label/member label`;
    /// synthetic-code fields display the sentinel.
    pub label: String,

    /// Display label of the field's type.
    pub type_label: String,

    pub required: bool,

    pub description: String,

    /// Human-readable summary of the type-specific configuration.
    pub option_summary: String,

    pub is_group_member: bool,

    /// Code of the containing group, for members.
    pub parent_code: Option<String>,

    /// The underlying definition.
    pub field: &'a Field,
}

impl FlatField<'_> {
    /// Raw wire tag of the field's type.
    pub fn type_tag(&self) -> &str {
        self.field.ty.tag()
    }

    /// Column header: `label(code)`.
    pub fn header(&self) -> String {
        format!("{}({})", self.label, self.code.display())
    }
}
