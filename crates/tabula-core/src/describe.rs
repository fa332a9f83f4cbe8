//! Human-readable summaries of a field's type-specific configuration.

mod format;
pub use format::{format_condition, format_filter, format_sort};

mod markup;
pub use markup::strip_markup;

mod resolver;
pub use resolver::{display_app_name, AppDirectory, AppNameResolver, AppRef, NullResolver};

mod summary;
pub use summary::{describe, describe_rich};
