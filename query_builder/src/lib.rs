//! Query Builder - Dialect-agnostic SQL construction for Queryhaus
//!
//! This crate provides the condition-building and operator-dispatch core:
//! conditions, filters, fields and functions, per-dialect operator sets,
//! identifier quoting, pagination, ordering, grouping, and joins.

pub mod builder;
pub mod condition;
pub mod dialects;
pub mod errors;
pub mod fields;
pub mod filter;
pub mod grouping;
pub mod ident;
pub mod join;
pub mod ordering;
pub mod pagination;
pub mod prelude;
pub mod registry;
pub mod table;

#[cfg(test)]
mod tests;

pub use builder::ConditionBuilder;
pub use condition::{Condition, Joiner, Operator};
pub use dialects::{DatabaseKind, DialectServices, FunctionProvider, LimitStyle, OperatorSet};
pub use errors::BuilderError;
pub use fields::{select_clause, Field, SqlFunction};
pub use filter::QueryFilter;
pub use grouping::GroupBy;
pub use ident::quote_path;
pub use join::{JoinClause, JoinType};
pub use ordering::{OrderBy, SortOrder};
pub use pagination::{Pager, Pagination};
pub use registry::DialectRegistry;
pub use table::{table_with_alias, TableInfo};
