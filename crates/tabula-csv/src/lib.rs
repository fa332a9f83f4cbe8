//! CSV serialization of flattened schemas and records.
//!
//! Consumes the flat descriptors, column plan, and rows produced by
//! `tabula-core` and renders delimited text. Holds no state of its own;
//! every serialization is a single pass over its inputs.

mod fmt;

mod section;
pub use section::Section;

mod serializer;
pub use serializer::Serializer;

/// Byte-order mark prefixed to exports for spreadsheet compatibility.
pub const BOM: char = '\u{feff}';

/// Line emitted in place of an empty table.
pub const NO_DATA: &str = "no data";
