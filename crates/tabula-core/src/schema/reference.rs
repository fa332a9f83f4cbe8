use super::{Condition, Sort};

/// Configuration of a reference-table field: an embedded listing of
/// records from a related application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    pub related_app: Option<super::RelatedApp>,

    /// Join condition between this application and the related one.
    pub condition: Option<Condition>,

    /// Additional narrowing filter.
    pub filter_cond: Option<Condition>,

    /// Fields of the related application shown in the listing.
    pub display_fields: Vec<String>,

    pub sort: Option<Sort>,
}
