mod error;
pub use error::Error;

mod util;

pub mod describe;
pub use describe::{AppDirectory, AppNameResolver, NullResolver};

pub mod flatten;
pub use flatten::{ColumnPlan, FlatSchema, FlattenOptions};

pub mod record;
pub use record::{Cell, Record, Row};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Re-exported JSON value type used for opaque, type-dependent payloads
/// (option maps, default values, raw record values).
pub use serde_json::Value as Json;
