/// Accessor lookup by naming convention
pub mod accessor;

/// Column order and separator
pub mod config;

/// Text in / text out collaborators
pub mod item;

/// Cell coercion and typed values
pub mod value;
