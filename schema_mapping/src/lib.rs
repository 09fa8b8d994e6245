//! Unified schema mapping between Rust types and the supported SQL dialects
//! This crate provides the column metadata, validation and DDL type mapping
//! used by schema derivation and auto-migration

pub mod errors;
pub mod sql;
pub mod types;
pub mod validate;

pub use errors::SchemaError;
pub use sql::{column_sql, column_type, create_table_sql, drop_table_sql, is_optional_type};
pub use types::{ColumnDef, TableSchema};
pub use validate::{
    declared_type_token, is_portable_column_type, supports_field_type, validate_columns,
    validate_schema,
};
