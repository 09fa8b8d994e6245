//! Schema metadata types
//!
//! `TableSchema` is implemented by `#[derive(TableSchema)]` and consumed
//! by validation and auto-migration.

/// One column as declared on a model struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    /// Rust type as written on the field, whitespace removed
    pub rust_type: &'static str,
    /// Explicit column type from `#[column(type = "...")]`
    pub declared_type: Option<&'static str>,
    /// Excluded from validation and DDL
    pub skip: bool,
}

impl ColumnDef {
    pub const fn new(name: &'static str, rust_type: &'static str) -> Self {
        Self {
            name,
            rust_type,
            declared_type: None,
            skip: false,
        }
    }

    pub const fn with_declared_type(mut self, declared_type: &'static str) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    pub const fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

/// Table name and column metadata for a model struct
pub trait TableSchema {
    fn table_name() -> &'static str;

    fn columns() -> &'static [ColumnDef];

    /// Columns that take part in validation and DDL
    fn active_columns() -> Vec<&'static ColumnDef> {
        Self::columns().iter().filter(|column| !column.skip).collect()
    }
}
