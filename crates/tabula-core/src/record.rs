//! Raw records and their projection onto a column plan.

mod cell;
pub use cell::Cell;

mod flatten;
pub use flatten::{flatten_all, flatten_record, subtable_cell, subtable_row_count, Row};

#[allow(clippy::module_inception)]
mod record;
pub use record::Record;

mod value;
pub use value::{FieldValue, TableRow};
