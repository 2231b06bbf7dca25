//! Built-in filter implementations

pub mod fields;
pub mod sanitize;
pub mod stamp;
pub mod threshold;

pub use fields::{Enrich, Redact, RenameKey, RequireKeys, REDACTED};
pub use sanitize::Sanitize;
pub use stamp::{LevelTag, Timestamp};
pub use threshold::{threshold, MinLevel, Threshold};

// Re-export the trait so filter authors need a single import
pub use crate::core::Filter;
