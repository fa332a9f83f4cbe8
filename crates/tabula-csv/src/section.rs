/// One sub-table export section: a title line plus its own CSV body.
///
/// Sections are produced independently of the main flatten pass, one per
/// sub-table field, and appended after the main table in a full export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}
