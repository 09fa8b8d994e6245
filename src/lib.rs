//! # Queryhaus
//!
//! A multi-dialect SQL query builder for MySQL, PostgreSQL and ClickHouse with
//! typed conditions, dialect-aware operators, automatic schema validation and
//! execution through sqlx.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queryhaus::prelude::*;
//!
//! #[derive(FromRow, TableSchema)]
//! #[table(name = "users")]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     pub email: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QueryhausError> {
//!     let config = DatabaseConfig::new(
//!         DatabaseKind::MySql,
//!         "localhost".to_string(), 3306, "myapp".to_string(),
//!         "root".to_string(), "password".to_string(),
//!         1, 5, 30,
//!     );
//!
//!     let db = Database::connect(&config).await?;
//!     db.auto_migrate::<User>(false).await?;
//!
//!     let users: Vec<User> = db
//!         .scope("users")
//!         .filter(ConditionBuilder::new().like("name", "%john%"))
//!         .order_by(OrderBy::new().desc("id"))
//!         .paginate(Pager::new(0, 20))
//!         .fetch_all()
//!         .await?;
//!
//!     println!("Found {} users", users.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Dialects sqlx does not drive still get full statement assembly; build the
//! statement on a detached handle and hand it to your own client:
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! let db = Database::detached(DatabaseKind::ClickHouse);
//! let statement = db
//!     .scope("events")
//!     .select([Field::count_all().with_alias("total")])
//!     .filter(ConditionBuilder::new().gte("ts", 1700000000_i64))
//!     .build_select()
//!     .expect("statement builds");
//!
//! assert_eq!(
//!     statement.sql,
//!     "SELECT count(*) AS total FROM `events` WHERE (`ts` >= ?)"
//! );
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::{ChangeOp, ChangeSet, Database, QueryScope, Statement};
pub use errors::QueryhausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use query_builder;
pub use schema_derive;
pub use schema_mapping;

// Re-export external dependencies used in public API
pub use serde_json;
pub use sqlx;
