//! SQL type conversion utilities
//!
//! This module maps Rust field types to the column types each dialect
//! uses in DDL, and renders CREATE/DROP statements for auto-migration.

use query_builder::dialects::{DatabaseKind, DialectServices};

use crate::types::ColumnDef;
use crate::validate::option_inner;

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    rust_type.trim().starts_with("Option")
}

/// Column type for DDL generation
///
/// Declared types pass through verbatim; otherwise the Rust type maps per
/// dialect. Optional fields wrap in `Nullable(...)` on ClickHouse.
pub fn column_type(kind: DatabaseKind, column: &ColumnDef) -> String {
    let base_type = match column.declared_type {
        Some(declared) => declared.to_string(),
        None => mapped_type(kind, column.rust_type).to_string(),
    };

    if kind == DatabaseKind::ClickHouse && is_optional_type(column.rust_type) {
        format!("Nullable({})", base_type)
    } else {
        base_type
    }
}

fn mapped_type(kind: DatabaseKind, rust_type: &str) -> &'static str {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized = rust_type.replace(" ", "");
    let base = option_inner(&normalized).unwrap_or(&normalized);
    match kind {
        DatabaseKind::MySql => mysql_type(base),
        DatabaseKind::Postgres => postgres_type(base),
        DatabaseKind::ClickHouse => clickhouse_type(base),
    }
}

fn mysql_type(base: &str) -> &'static str {
    match base {
        "String" => "VARCHAR(255)",
        "i8" => "TINYINT",
        "i16" => "SMALLINT",
        "i32" => "INT",
        "i64" => "BIGINT",
        "u8" => "TINYINT UNSIGNED",
        "u16" => "SMALLINT UNSIGNED",
        "u32" => "INT UNSIGNED",
        "u64" => "BIGINT UNSIGNED",
        "f32" => "FLOAT",
        "f64" => "DOUBLE",
        "bool" => "TINYINT(1)",
        "Vec<u8>" => "BLOB",
        "Uuid" | "uuid::Uuid" => "CHAR(36)",
        "DateTime<Utc>" | "chrono::DateTime<chrono::Utc>" | "chrono::DateTime<Utc>" => "DATETIME",
        "NaiveDateTime" | "chrono::NaiveDateTime" => "DATETIME",
        "NaiveDate" | "chrono::NaiveDate" => "DATE",
        "NaiveTime" | "chrono::NaiveTime" => "TIME",
        _ => "VARCHAR(255)", // default fallback
    }
}

fn postgres_type(base: &str) -> &'static str {
    match base {
        "String" => "VARCHAR",
        "i8" | "i16" => "SMALLINT",
        "i32" => "INTEGER",
        "i64" => "BIGINT",
        "u8" => "SMALLINT",
        "u16" => "INTEGER",
        "u32" => "BIGINT",
        "u64" => "NUMERIC(20,0)", // PostgreSQL doesn't have native u64
        "f32" => "REAL",
        "f64" => "DOUBLE PRECISION",
        "bool" => "BOOLEAN",
        "Vec<u8>" => "BYTEA",
        "Uuid" | "uuid::Uuid" => "UUID",
        "DateTime<Utc>" | "chrono::DateTime<chrono::Utc>" | "chrono::DateTime<Utc>" => {
            "TIMESTAMP WITH TIME ZONE"
        }
        "NaiveDateTime" | "chrono::NaiveDateTime" => "TIMESTAMP",
        "NaiveDate" | "chrono::NaiveDate" => "DATE",
        "NaiveTime" | "chrono::NaiveTime" => "TIME",
        _ => "VARCHAR", // default fallback
    }
}

fn clickhouse_type(base: &str) -> &'static str {
    match base {
        "String" => "String",
        "i8" => "Int8",
        "i16" => "Int16",
        "i32" => "Int32",
        "i64" => "Int64",
        "u8" => "UInt8",
        "u16" => "UInt16",
        "u32" => "UInt32",
        "u64" => "UInt64",
        "f32" => "Float32",
        "f64" => "Float64",
        "bool" => "UInt8",
        "Vec<u8>" => "String",
        "Uuid" | "uuid::Uuid" => "UUID",
        "DateTime<Utc>" | "chrono::DateTime<chrono::Utc>" | "chrono::DateTime<Utc>" => "DateTime",
        "NaiveDateTime" | "chrono::NaiveDateTime" => "DateTime",
        "NaiveDate" | "chrono::NaiveDate" => "Date",
        "NaiveTime" | "chrono::NaiveTime" => "String", // ClickHouse has no time-of-day type
        _ => "String", // default fallback
    }
}

/// Render one column definition for DDL
pub fn column_sql(services: &DialectServices, column: &ColumnDef) -> String {
    let name = services.quote(column.name);
    let column_type = column_type(services.kind(), column);

    // ClickHouse expresses nullability in the type itself
    if services.kind() == DatabaseKind::ClickHouse {
        format!("{} {}", name, column_type)
    } else if is_optional_type(column.rust_type) {
        format!("{} {} NULL", name, column_type)
    } else {
        format!("{} {} NOT NULL", name, column_type)
    }
}

/// Render `CREATE TABLE IF NOT EXISTS` for the active columns
pub fn create_table_sql(services: &DialectServices, table: &str, columns: &[ColumnDef]) -> String {
    let column_list: Vec<String> = columns
        .iter()
        .filter(|column| !column.skip)
        .map(|column| column_sql(services, column))
        .collect();

    let mut sql = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        services.quote(table),
        column_list.join(", ")
    );

    if services.kind() == DatabaseKind::ClickHouse {
        sql.push_str(" ENGINE = MergeTree ORDER BY tuple()");
    }

    sql
}

/// Render `DROP TABLE IF EXISTS`
pub fn drop_table_sql(services: &DialectServices, table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", services.quote(table))
}
