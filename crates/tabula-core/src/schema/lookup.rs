use super::{Condition, Sort};

/// Lookup capability: a cross-application reference that pulls a value
/// from a related application's record. May be attached to a field of
/// any declared type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup {
    pub related_app: Option<RelatedApp>,

    /// The key field in the related application.
    pub related_key_field: Option<String>,

    /// `source → target` copy pairs applied when the lookup resolves.
    pub field_mappings: Vec<FieldMapping>,

    /// Fields shown in the lookup picker.
    pub picker_fields: Vec<String>,

    pub filter_cond: Option<Condition>,

    pub sort: Option<Sort>,
}

/// Reference to a related application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedApp {
    pub app: String,
    pub code: Option<String>,
}

/// One field-mapping pair of a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    pub field: String,
    pub related_field: String,
}
