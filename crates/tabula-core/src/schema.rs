//! Application schema: the declared set of field definitions for one
//! application's data model, as returned by the platform's form-fields API.

mod catalog;
pub use catalog::type_label;

mod code;
pub use code::{FieldCode, SYNTHETIC_CODE};

mod condition;
pub use condition::{Condition, ConditionNode, Sort, SortSpec};

mod field;
pub use field::{Calc, Field, FieldMap, FieldTy, OptionMap};

mod lookup;
pub use lookup::{FieldMapping, Lookup, RelatedApp};

mod reference;
pub use reference::ReferenceTable;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;

mod wire;
