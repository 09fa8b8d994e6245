//! Convenience re-exports for common query-builder usage

// Condition building
pub use crate::builder::ConditionBuilder;
pub use crate::condition::{Condition, Joiner, Operator};
pub use crate::filter::QueryFilter;

// Fields and functions
pub use crate::fields::{Field, SqlFunction};

// Dialect services and registry
pub use crate::dialects::{DatabaseKind, DialectServices, LimitStyle};
pub use crate::registry::DialectRegistry;

// Clause helpers
pub use crate::grouping::GroupBy;
pub use crate::join::{JoinClause, JoinType};
pub use crate::ordering::{OrderBy, SortOrder};
pub use crate::pagination::{Pager, Pagination};
pub use crate::table::{table_with_alias, TableInfo};

// Error types
pub use crate::errors::BuilderError;

// Common external dependencies that are frequently used
pub use serde_json::{json, Value};
