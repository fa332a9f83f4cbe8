use super::{FieldCode, Lookup, ReferenceTable};
use crate::Json;

use indexmap::IndexMap;

/// Nested member map of a group or sub-table container, keyed by member
/// code in source order. Containers nest exactly one level: a member is
/// never itself a group or sub-table.
pub type FieldMap = IndexMap<String, Field>;

/// Opaque, type-dependent configuration map (choice sets for selection
/// types, a default-value holder for rich text, and so on).
pub type OptionMap = IndexMap<String, Json>;

/// One schema entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Identity of the field; synthesized for code-less entries.
    pub code: FieldCode,

    /// Display name. For label fields this is the displayed content
    /// rather than a name.
    pub label: String,

    /// The declared field type, with type-specific payload.
    pub ty: FieldTy,

    pub required: bool,

    pub description: String,

    /// Top-level default value, if the source declares one.
    pub default_value: Option<Json>,

    /// Type-dependent configuration, kept opaque.
    pub options: Option<OptionMap>,

    /// Lookup capability. Orthogonal to the declared type: any field may
    /// act as a lookup, and presence of this attribute is authoritative.
    pub lookup: Option<Lookup>,
}

/// The closed field-type enumeration, with payloads where the type
/// carries structure. Unrecognized wire tags are preserved in `Other`
/// rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    SingleLineText,
    MultiLineText,
    RichText,
    Number,
    Calc(Calc),
    RadioButton,
    CheckBox,
    MultiSelect,
    DropDown,
    Date,
    Time,
    DateTime,
    Link,
    File,
    UserSelect,
    OrganizationSelect,
    GroupSelect,
    ReferenceTable(ReferenceTable),
    Subtable(FieldMap),
    Group(FieldMap),
    Label,
    Creator,
    CreatedTime,
    Modifier,
    UpdatedTime,
    Category,
    Status,
    StatusAssignee,
    RecordNumber,
    Spacer,
    Hr,
    Other(String),
}

/// Computed-field payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calc {
    pub expression: Option<String>,
}

impl Field {
    /// True when the field acts as a lookup, regardless of declared type.
    pub fn is_lookup(&self) -> bool {
        self.lookup.is_some()
    }

    /// Member map if this field is a group or sub-table container.
    pub fn members(&self) -> Option<&FieldMap> {
        self.ty.members()
    }

    /// A default value declared either at the top level or inside the
    /// option map (rich text keeps it there).
    pub fn effective_default(&self) -> Option<&Json> {
        self.default_value
            .as_ref()
            .or_else(|| self.options.as_ref()?.get("defaultValue"))
    }
}

impl FieldTy {
    /// The raw wire tag for this type. `Other` passes its tag through.
    pub fn tag(&self) -> &str {
        match self {
            Self::SingleLineText => "SINGLE_LINE_TEXT",
            Self::MultiLineText => "MULTI_LINE_TEXT",
            Self::RichText => "RICH_TEXT",
            Self::Number => "NUMBER",
            Self::Calc(_) => "CALC",
            Self::RadioButton => "RADIO_BUTTON",
            Self::CheckBox => "CHECK_BOX",
            Self::MultiSelect => "MULTI_SELECT",
            Self::DropDown => "DROP_DOWN",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::DateTime => "DATETIME",
            Self::Link => "LINK",
            Self::File => "FILE",
            Self::UserSelect => "USER_SELECT",
            Self::OrganizationSelect => "ORGANIZATION_SELECT",
            Self::GroupSelect => "GROUP_SELECT",
            Self::ReferenceTable(_) => "REFERENCE_TABLE",
            Self::Subtable(_) => "SUBTABLE",
            Self::Group(_) => "GROUP",
            Self::Label => "LABEL",
            Self::Creator => "CREATOR",
            Self::CreatedTime => "CREATED_TIME",
            Self::Modifier => "MODIFIER",
            Self::UpdatedTime => "UPDATED_TIME",
            Self::Category => "CATEGORY",
            Self::Status => "STATUS",
            Self::StatusAssignee => "STATUS_ASSIGNEE",
            Self::RecordNumber => "RECORD_NUMBER",
            Self::Spacer => "SPACER",
            Self::Hr => "HR",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn is_subtable(&self) -> bool {
        matches!(self, Self::Subtable(_))
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Self::Label)
    }

    /// Selection types share the `(unselected)` null sentinel.
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::RadioButton | Self::CheckBox | Self::MultiSelect | Self::DropDown
        )
    }

    /// Types whose record value is a plain array that passes through
    /// unchanged.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Self::CheckBox | Self::MultiSelect)
    }

    /// Types whose record value is an array of named entities.
    pub fn is_entity_select(&self) -> bool {
        matches!(
            self,
            Self::UserSelect | Self::OrganizationSelect | Self::GroupSelect
        )
    }

    /// Layout-only types that never carry a record value or a column.
    pub fn is_layout(&self) -> bool {
        matches!(self, Self::Spacer | Self::Hr)
    }

    pub fn as_group(&self) -> Option<&FieldMap> {
        match self {
            Self::Group(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_subtable(&self) -> Option<&FieldMap> {
        match self {
            Self::Subtable(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_calc(&self) -> Option<&Calc> {
        match self {
            Self::Calc(calc) => Some(calc),
            _ => None,
        }
    }

    pub fn as_reference_table(&self) -> Option<&ReferenceTable> {
        match self {
            Self::ReferenceTable(reference) => Some(reference),
            _ => None,
        }
    }

    /// Member map if this type is a container.
    pub fn members(&self) -> Option<&FieldMap> {
        match self {
            Self::Group(members) | Self::Subtable(members) => Some(members),
            _ => None,
        }
    }
}
