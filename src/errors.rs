//! Error types for the Queryhaus crate
//!
//! This module contains all error types that can be returned by Queryhaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryhausError {
    #[error("Query build error: {0}")]
    Builder(#[from] query_builder::BuilderError),

    #[error("Schema validation error: {0}")]
    Schema(#[from] schema_mapping::SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No connection pool attached: connect first or use the build_* terminals")]
    PoolNotAttached,

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}
