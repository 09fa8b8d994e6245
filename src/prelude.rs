//! Convenience re-exports for common Queryhaus usage
//!
//! This prelude module re-exports the most commonly used items from the Queryhaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! // Now you have access to all the common Queryhaus types and traits
//! ```

// Core Queryhaus components
pub use crate::core::{ChangeOp, ChangeSet, Database, QueryScope, Statement};
pub use crate::errors::QueryhausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export commonly used query-builder types for convenience
pub use query_builder::prelude::*;

// Re-export schema metadata types and the derive for model creation
pub use schema_derive::TableSchema;
pub use schema_mapping::{ColumnDef, SchemaError, TableSchema};

// Re-export member crates for macro-generated code
pub use query_builder;
pub use schema_mapping;

// Common external dependencies
pub use serde_json;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{AnyPool, FromRow, Row};
