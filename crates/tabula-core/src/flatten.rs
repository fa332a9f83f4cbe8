//! Projection of a nested schema into a single ordered, de-duplicated
//! column set, together with the column plan that keeps record values
//! structurally aligned with it.

mod builder;
pub use builder::{flatten, FlatSchema, FlattenOptions};

mod flat_field;
pub use flat_field::FlatField;

mod plan;
pub use plan::{ColumnEntry, ColumnKind, ColumnPlan};
