use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("column {table}.{column} declares non-portable type '{declared}'")]
    UnsupportedColumnType {
        table: String,
        column: String,
        declared: String,
    },

    #[error("column {table}.{column} has Rust type '{rust_type}' with no dialect mapping")]
    UnsupportedFieldType {
        table: String,
        column: String,
        rust_type: String,
    },
}
