//! Schema validation
//!
//! Declared column types must start with a portable type token so the
//! same model migrates on every dialect. Fields without a declared type
//! must use a Rust type with a known mapping.

use crate::errors::SchemaError;
use crate::types::{ColumnDef, TableSchema};

/// Type tokens accepted in `#[column(type = "...")]` declarations
pub const PORTABLE_COLUMN_TYPES: &[&str] = &[
    "int",
    "bigint",
    "tinyint",
    "smallint",
    "decimal",
    "numeric",
    "real",
    "double",
    "boolean",
    "char",
    "varchar",
    "date",
    "time",
    "timestamp",
    "interval",
    "bytea",
    "uuid",
    "text",
    "longtext",
    "enum",
    "blob",
];

/// Leading type token of a declared column type
///
/// The token is everything before the first `(` or `:`, so
/// `varchar(64)` and `enum('a','b')` resolve to `varchar` and `enum`.
pub fn declared_type_token(declared: &str) -> &str {
    let trimmed = declared.trim();
    match trimmed.find(['(', ':']) {
        Some(index) => &trimmed[..index],
        None => trimmed,
    }
}

/// Check a declared column type against the portable token list
pub fn is_portable_column_type(declared: &str) -> bool {
    let token = declared_type_token(declared).to_lowercase();
    PORTABLE_COLUMN_TYPES.contains(&token.as_str())
}

/// Check if a Rust field type has a known mapping on every dialect
pub fn supports_field_type(rust_type: &str) -> bool {
    let normalized = rust_type.replace(" ", "");
    let base = option_inner(&normalized).unwrap_or(&normalized);
    matches!(
        base,
        "String"
            | "i8"
            | "i16"
            | "i32"
            | "i64"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "f32"
            | "f64"
            | "bool"
            | "Vec<u8>"
            | "Uuid"
            | "uuid::Uuid"
            | "DateTime<Utc>"
            | "chrono::DateTime<chrono::Utc>"
            | "chrono::DateTime<Utc>"
            | "NaiveDateTime"
            | "chrono::NaiveDateTime"
            | "NaiveDate"
            | "chrono::NaiveDate"
            | "NaiveTime"
            | "chrono::NaiveTime"
    )
}

/// Inner type of `Option<...>`, None for non-optional types
pub(crate) fn option_inner(rust_type: &str) -> Option<&str> {
    rust_type
        .strip_prefix("Option<")
        .and_then(|rest| rest.strip_suffix('>'))
}

/// Validate every active column of a schema
pub fn validate_schema<T: TableSchema>() -> Result<(), SchemaError> {
    validate_columns(T::table_name(), T::columns())
}

pub fn validate_columns(table: &str, columns: &[ColumnDef]) -> Result<(), SchemaError> {
    for column in columns.iter().filter(|column| !column.skip) {
        match column.declared_type {
            Some(declared) => {
                if !is_portable_column_type(declared) {
                    return Err(SchemaError::UnsupportedColumnType {
                        table: table.to_string(),
                        column: column.name.to_string(),
                        declared: declared.to_string(),
                    });
                }
            }
            None => {
                if !supports_field_type(column.rust_type) {
                    return Err(SchemaError::UnsupportedFieldType {
                        table: table.to_string(),
                        column: column.name.to_string(),
                        rust_type: column.rust_type.to_string(),
                    });
                }
            }
        }
    }

    tracing::debug!("[SCHEMA_VALIDATE] Validated schema for table: {}", table);
    Ok(())
}
