//! Database migration functionality
//!
//! This module provides automatic table creation utilities for types
//! deriving `TableSchema`.

use schema_mapping::{create_table_sql, drop_table_sql, validate_schema, TableSchema};

use crate::core::{Database, Statement};
use crate::errors::QueryhausError;

impl Database {
    /// Validate the schema and produce the DDL statements `auto_migrate` runs
    ///
    /// Useful on a detached handle where the DDL is handed to an external
    /// client instead of executed here.
    pub fn migration_statements<T>(&self, recreate: bool) -> Result<Vec<Statement>, QueryhausError>
    where
        T: TableSchema,
    {
        validate_schema::<T>()?;

        let services = self.services()?;
        let table = T::table_name();

        let mut statements = Vec::with_capacity(2);
        if recreate {
            statements.push(Statement::new(drop_table_sql(services, table), Vec::new()));
        }
        statements.push(Statement::new(
            create_table_sql(services, table, T::columns()),
            Vec::new(),
        ));

        Ok(statements)
    }

    /// Automatically create the table for a model
    /// If recreate is true, drops the existing table first
    pub async fn auto_migrate<T>(&self, recreate: bool) -> Result<(), QueryhausError>
    where
        T: TableSchema,
    {
        let statements = self.migration_statements::<T>(recreate)?;
        let pool = self.require_pool()?;

        for statement in statements {
            tracing::debug!("[MIGRATE] {}", statement.sql);
            sqlx::query(&statement.sql).execute(pool).await?;
        }

        Ok(())
    }
}
