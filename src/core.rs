//! Core Queryhaus functionality
//!
//! This module contains the main Database handle and the fluent QueryScope,
//! providing statement assembly for every registered dialect and execution
//! through sqlx for the dialects sqlx drives.

use std::sync::Once;
use std::time::Duration;

use serde_json::Value;
use sqlx::any::{AnyArguments, AnyPoolOptions, AnyRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Any, AnyPool, FromRow, Row};

use crate::errors::QueryhausError;
use config::DatabaseConfig;
use query_builder::{
    select_clause, ConditionBuilder, DatabaseKind, DialectRegistry, DialectServices, Field,
    GroupBy, JoinClause, OrderBy, Pager, Pagination,
};

static INSTALL_DRIVERS: Once = Once::new();

/// A parameterized SQL statement paired with its ordered arguments
///
/// Statements come out of the `build_*` terminals with `?` placeholders for
/// every dialect; `for_dialect` rewrites them for the target before execution
/// or hand-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// Rewrite placeholders for the target dialect
    ///
    /// PostgreSQL expects `$1..$n`; MySQL and ClickHouse keep `?`.
    pub fn for_dialect(mut self, kind: DatabaseKind) -> Self {
        if kind == DatabaseKind::Postgres {
            self.sql = rebind_placeholders(&self.sql);
        }
        self
    }
}

/// Number `?` placeholders as `$1..$n`, skipping quoted string literals
fn rebind_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut index = 0usize;
    let mut in_literal = false;
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            // '' inside a literal is an escaped quote, not a terminator
            '\'' if in_literal => {
                if chars.peek() == Some(&'\'') {
                    out.push_str("''");
                    chars.next();
                } else {
                    in_literal = false;
                    out.push('\'');
                }
            }
            '\'' => {
                in_literal = true;
                out.push('\'');
            }
            '?' if !in_literal => {
                index += 1;
                out.push('$');
                out.push_str(&index.to_string());
            }
            _ => out.push(ch),
        }
    }

    out
}

/// A single column mutation in an UPDATE statement
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeOp {
    Set(Value),
    Increment(Value),
    Decrement(Value),
}

/// Ordered column mutations for an UPDATE statement
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    changes: Vec<(String, ChangeOp)>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.changes.push((column.into(), ChangeOp::Set(value.into())));
        self
    }

    pub fn increment(mut self, column: impl Into<String>, by: impl Into<Value>) -> Self {
        self.changes
            .push((column.into(), ChangeOp::Increment(by.into())));
        self
    }

    pub fn decrement(mut self, column: impl Into<String>, by: impl Into<Value>) -> Self {
        self.changes
            .push((column.into(), ChangeOp::Decrement(by.into())));
        self
    }

    pub fn push(mut self, column: impl Into<String>, op: ChangeOp) -> Self {
        self.changes.push((column.into(), op));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Render the SET clause with its argument list
    fn render(&self, services: &DialectServices) -> (String, Vec<Value>) {
        let mut assignments = Vec::with_capacity(self.changes.len());
        let mut args = Vec::with_capacity(self.changes.len());

        for (column, op) in &self.changes {
            let quoted = services.quote(column);
            match op {
                ChangeOp::Set(value) => {
                    assignments.push(format!("{} = ?", quoted));
                    args.push(value.clone());
                }
                ChangeOp::Increment(value) => {
                    assignments.push(format!("{} = {} + ?", quoted, quoted));
                    args.push(value.clone());
                }
                ChangeOp::Decrement(value) => {
                    assignments.push(format!("{} = {} - ?", quoted, quoted));
                    args.push(value.clone());
                }
            }
        }

        (assignments.join(", "), args)
    }
}

/// Main Queryhaus handle that couples a dialect registry with an optional pool
///
/// ClickHouse handles are built with `detached`: statements are assembled and
/// handed off, never executed here, since sqlx has no ClickHouse driver.
pub struct Database {
    pool: Option<AnyPool>,
    kind: DatabaseKind,
    registry: DialectRegistry,
}

impl Database {
    /// Connect to the configured database and return a ready handle
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, QueryhausError> {
        if config.kind == DatabaseKind::ClickHouse {
            return Err(QueryhausError::Unsupported(
                "sqlx has no ClickHouse driver; use Database::detached and hand the built \
                 statements to a ClickHouse client"
                    .to_string(),
            ));
        }

        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.connection_url())
            .await?;

        tracing::debug!("[DATABASE] Connected to {} at {}", config.kind, config.host);

        Ok(Self {
            pool: Some(pool),
            kind: config.kind,
            registry: DialectRegistry::with_builtins(),
        })
    }

    /// Create a pool-less handle that can build statements but not execute them
    pub fn detached(kind: DatabaseKind) -> Self {
        Self {
            pool: None,
            kind,
            registry: DialectRegistry::with_builtins(),
        }
    }

    /// Get database pool reference, if one is attached
    pub fn pool(&self) -> Option<&AnyPool> {
        self.pool.as_ref()
    }

    pub fn kind(&self) -> DatabaseKind {
        self.kind
    }

    /// The dialect registry this handle resolves services from
    pub fn registry(&self) -> &DialectRegistry {
        &self.registry
    }

    /// Mutable registry access for registering custom dialect services
    pub fn registry_mut(&mut self) -> &mut DialectRegistry {
        &mut self.registry
    }

    pub(crate) fn services(&self) -> Result<&DialectServices, QueryhausError> {
        Ok(self.registry.services(self.kind)?)
    }

    pub(crate) fn require_pool(&self) -> Result<&AnyPool, QueryhausError> {
        self.pool.as_ref().ok_or(QueryhausError::PoolNotAttached)
    }

    /// Open a fluent query scope over a table
    pub fn scope(&self, table: impl Into<String>) -> QueryScope<'_> {
        QueryScope::new(self, table.into())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), QueryhausError> {
        sqlx::query("SELECT 1")
            .fetch_one(self.require_pool()?)
            .await?;
        Ok(())
    }
}

/// Fluent, dialect-aware query over a single table
///
/// Accumulates SELECT fields, WHERE/HAVING builders, joins, grouping, ordering
/// and pagination, then terminates either in a `build_*` call producing a
/// [`Statement`] or in an executor that runs through the attached pool.
pub struct QueryScope<'a> {
    db: &'a Database,
    table: String,
    fields: Vec<Field>,
    filter: ConditionBuilder,
    group_by: GroupBy,
    order_by: OrderBy,
    joins: Vec<JoinClause>,
    pagination: Pagination,
    distinct: bool,
}

impl<'a> QueryScope<'a> {
    fn new(db: &'a Database, table: String) -> Self {
        Self {
            db,
            table,
            fields: Vec::new(),
            filter: ConditionBuilder::new(),
            group_by: GroupBy::default(),
            order_by: OrderBy::new(),
            joins: Vec::new(),
            pagination: Pagination::default(),
            distinct: false,
        }
    }

    /// Set the SELECT field list; an empty list selects `*`
    pub fn select<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add WHERE conditions; repeated calls merge into one builder
    pub fn filter(mut self, builder: ConditionBuilder) -> Self {
        self.filter = self.filter.merge(builder);
        self
    }

    pub fn group_by(mut self, group: GroupBy) -> Self {
        self.group_by = group;
        self
    }

    /// Attach a HAVING builder to the current grouping
    pub fn having(mut self, builder: ConditionBuilder) -> Self {
        self.group_by = self.group_by.having(builder);
        self
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by = order;
        self
    }

    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Page-based pagination; overrides any previous limit/offset
    pub fn paginate(mut self, pager: Pager) -> Self {
        self.pagination = pager.paginate();
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.pagination = self.pagination.with_limit(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.pagination = self.pagination.with_offset(offset);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Assemble a SELECT over the given field list
    fn select_statement(&self, fields: &[Field]) -> Result<Statement, QueryhausError> {
        let services = self.db.services()?;

        let columns = select_clause(fields, services)?;
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&columns);
        sql.push_str(" FROM ");
        sql.push_str(&services.quote(&self.table));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql(services));
        }

        let mut args = Vec::new();

        let (where_sql, where_args) = self.filter.build(services)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
            args.extend(where_args);
        }

        let group_sql = self.group_by.group_sql(services);
        if !group_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&group_sql);
        }

        let (having_sql, having_args) = self.group_by.having_sql(services)?;
        if !having_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&having_sql);
            args.extend(having_args);
        }

        let order_sql = self.order_by.to_sql(services);
        if !order_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&order_sql);
        }

        let limit_sql = self.pagination.to_sql(services.limit_style());
        if !limit_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&limit_sql);
        }

        tracing::debug!("[STATEMENT] {} SELECT on {}: {}", services.kind(), self.table, sql);
        tracing::debug!("[STATEMENT] args count: {}", args.len());

        Ok(Statement::new(sql, args))
    }

    /// Build the SELECT statement without executing it
    ///
    /// This is the hand-off point for dialects sqlx does not drive,
    /// ClickHouse included.
    pub fn build_select(&self) -> Result<Statement, QueryhausError> {
        self.select_statement(&self.fields)
    }

    /// Build `SELECT count(*)`; grouping, ordering and pagination do not apply
    pub fn build_count(&self) -> Result<Statement, QueryhausError> {
        let services = self.db.services()?;

        let columns = select_clause(&[Field::count_all()], services)?;
        let mut sql = format!("SELECT {} FROM {}", columns, services.quote(&self.table));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql(services));
        }

        let mut args = Vec::new();

        let (where_sql, where_args) = self.filter.build(services)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
            args.extend(where_args);
        }

        tracing::debug!("[STATEMENT] {} COUNT on {}: {}", services.kind(), self.table, sql);

        Ok(Statement::new(sql, args))
    }

    /// Build an UPDATE applying the change set to every row the filter matches
    pub fn build_update(&self, changes: &ChangeSet) -> Result<Statement, QueryhausError> {
        if changes.is_empty() {
            return Err(QueryhausError::Unsupported(
                "UPDATE with an empty change set".to_string(),
            ));
        }

        let services = self.db.services()?;

        let (set_sql, mut args) = changes.render(services);
        let mut sql = format!("UPDATE {} SET {}", services.quote(&self.table), set_sql);

        let (where_sql, where_args) = self.filter.build(services)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
            args.extend(where_args);
        }

        tracing::debug!("[STATEMENT] {} UPDATE on {}: {}", services.kind(), self.table, sql);

        Ok(Statement::new(sql, args))
    }

    /// Build a DELETE for every row the filter matches
    pub fn build_delete(&self) -> Result<Statement, QueryhausError> {
        let services = self.db.services()?;

        let mut sql = format!("DELETE FROM {}", services.quote(&self.table));
        let mut args = Vec::new();

        let (where_sql, where_args) = self.filter.build(services)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
            args.extend(where_args);
        }

        tracing::debug!("[STATEMENT] {} DELETE on {}: {}", services.kind(), self.table, sql);

        Ok(Statement::new(sql, args))
    }

    /// Fetch every matching row, decoded into `T`
    pub async fn fetch_all<T>(&self) -> Result<Vec<T>, QueryhausError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, AnyRow>,
    {
        let pool = self.db.require_pool()?;
        let Statement { sql, args } = self.build_select()?.for_dialect(self.db.kind());

        let mut query = sqlx::query_as::<_, T>(&sql);
        for arg in args {
            query = bind_query_as(query, arg);
        }

        Ok(query.fetch_all(pool).await?)
    }

    /// Fetch exactly one row; sqlx's RowNotFound passes through
    pub async fn fetch_one<T>(&self) -> Result<T, QueryhausError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, AnyRow>,
    {
        let pool = self.db.require_pool()?;
        let Statement { sql, args } = self.build_select()?.for_dialect(self.db.kind());

        let mut query = sqlx::query_as::<_, T>(&sql);
        for arg in args {
            query = bind_query_as(query, arg);
        }

        Ok(query.fetch_one(pool).await?)
    }

    /// Fetch the first matching row, if any
    pub async fn fetch_optional<T>(&self) -> Result<Option<T>, QueryhausError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, AnyRow>,
    {
        let pool = self.db.require_pool()?;
        let Statement { sql, args } = self.build_select()?.for_dialect(self.db.kind());

        let mut query = sqlx::query_as::<_, T>(&sql);
        for arg in args {
            query = bind_query_as(query, arg);
        }

        Ok(query.fetch_optional(pool).await?)
    }

    /// Count matching rows
    pub async fn count(&self) -> Result<i64, QueryhausError> {
        let pool = self.db.require_pool()?;
        let Statement { sql, args } = self.build_count()?.for_dialect(self.db.kind());

        let mut query = sqlx::query(&sql);
        for arg in args {
            query = bind_query(query, arg);
        }

        let row = query.fetch_one(pool).await?;
        Ok(row.try_get::<i64, _>(0)?)
    }

    /// Fetch a single field's value from every matching row
    pub async fn pluck<T>(&self, field: impl Into<Field>) -> Result<Vec<T>, QueryhausError>
    where
        T: for<'r> sqlx::Decode<'r, Any> + sqlx::Type<Any>,
    {
        let pool = self.db.require_pool()?;
        let fields = [field.into()];
        let Statement { sql, args } = self.select_statement(&fields)?.for_dialect(self.db.kind());

        let mut query = sqlx::query(&sql);
        for arg in args {
            query = bind_query(query, arg);
        }

        let rows = query.fetch_all(pool).await?;
        let mut values = Vec::with_capacity(rows.len());
        for row in &rows {
            values.push(row.try_get::<T, _>(0)?);
        }
        Ok(values)
    }

    /// Execute an UPDATE, returning the number of affected rows
    pub async fn update(&self, changes: &ChangeSet) -> Result<u64, QueryhausError> {
        let pool = self.db.require_pool()?;
        let Statement { sql, args } = self.build_update(changes)?.for_dialect(self.db.kind());

        let mut query = sqlx::query(&sql);
        for arg in args {
            query = bind_query(query, arg);
        }

        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Execute a DELETE, returning the number of affected rows
    pub async fn delete(&self) -> Result<u64, QueryhausError> {
        let pool = self.db.require_pool()?;
        let Statement { sql, args } = self.build_delete()?.for_dialect(self.db.kind());

        let mut query = sqlx::query(&sql);
        for arg in args {
            query = bind_query(query, arg);
        }

        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}

macro_rules! bind_json_arg {
    ($query:expr, $arg:expr) => {
        match $arg {
            Value::String(s) => $query.bind(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            Value::Bool(b) => $query.bind(b),
            Value::Null => $query.bind(Option::<String>::None),
            // Arrays are flattened into scalars at build time; anything
            // else travels in its JSON text form
            other => $query.bind(other.to_string()),
        }
    };
}

fn bind_query<'q>(
    query: Query<'q, Any, AnyArguments<'q>>,
    arg: Value,
) -> Query<'q, Any, AnyArguments<'q>> {
    bind_json_arg!(query, arg)
}

fn bind_query_as<'q, T>(
    query: QueryAs<'q, Any, T, AnyArguments<'q>>,
    arg: Value,
) -> QueryAs<'q, Any, T, AnyArguments<'q>> {
    bind_json_arg!(query, arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================
    // Placeholder Rebinding
    // ========================================

    #[test]
    fn test_rebind_numbers_placeholders() {
        assert_eq!(
            rebind_placeholders("SELECT * FROM t WHERE a = ? AND b = ?"),
            "SELECT * FROM t WHERE a = $1 AND b = $2"
        );
    }

    #[test]
    fn test_rebind_skips_string_literals() {
        assert_eq!(
            rebind_placeholders("SELECT * FROM t WHERE a = '?' AND b = ?"),
            "SELECT * FROM t WHERE a = '?' AND b = $1"
        );
    }

    #[test]
    fn test_rebind_handles_escaped_quotes() {
        // The '' escape keeps the literal open, so the inner ? is untouched
        assert_eq!(
            rebind_placeholders("WHERE a = 'it''s ?' AND b = ?"),
            "WHERE a = 'it''s ?' AND b = $1"
        );
    }

    #[test]
    fn test_statement_for_dialect_rebinding() {
        let statement = Statement::new("SELECT * FROM t WHERE a = ?", vec![json!(1)]);
        let mysql = statement.clone().for_dialect(DatabaseKind::MySql);
        assert_eq!(mysql.sql, "SELECT * FROM t WHERE a = ?");

        let postgres = statement.for_dialect(DatabaseKind::Postgres);
        assert_eq!(postgres.sql, "SELECT * FROM t WHERE a = $1");
    }

    // ========================================
    // Statement Assembly
    // ========================================

    #[test]
    fn test_select_defaults_to_star() {
        let db = Database::detached(DatabaseKind::MySql);
        let statement = db.scope("users").build_select().unwrap();
        assert_eq!(statement.sql, "SELECT * FROM `users`");
        assert!(statement.args.is_empty());
    }

    #[test]
    fn test_full_select_clause_order() {
        let db = Database::detached(DatabaseKind::MySql);
        let statement = db
            .scope("users")
            .select(["id", "name"])
            .filter(ConditionBuilder::new().eq("status", "active"))
            .group_by(GroupBy::single("name"))
            .order_by(OrderBy::new().desc("id"))
            .paginate(Pager::new(1, 10))
            .build_select()
            .unwrap();

        assert_eq!(
            statement.sql,
            "SELECT `id`, `name` FROM `users` WHERE (`status` = ?) \
             GROUP BY `name` ORDER BY `id` DESC LIMIT 10,10"
        );
        assert_eq!(statement.args, vec![json!("active")]);
    }

    #[test]
    fn test_select_with_join_and_distinct() {
        let db = Database::detached(DatabaseKind::Postgres);
        let statement = db
            .scope("orders")
            .select(["orders.id"])
            .distinct()
            .join(JoinClause::left("users", "orders.user_id", "users.id"))
            .build_select()
            .unwrap();

        assert_eq!(
            statement.sql,
            "SELECT DISTINCT \"orders\".\"id\" FROM \"orders\" \
             LEFT JOIN \"users\" ON \"orders\".\"user_id\" = \"users\".\"id\""
        );
    }

    #[test]
    fn test_having_args_follow_where_args() {
        let db = Database::detached(DatabaseKind::MySql);
        let statement = db
            .scope("orders")
            .select([Field::new("status"), Field::sum("amount").with_alias("total")])
            .filter(ConditionBuilder::new().gt("amount", 0))
            .group_by(GroupBy::single("status"))
            .having(ConditionBuilder::new().gt(Field::sum("amount"), 100))
            .build_select()
            .unwrap();

        assert_eq!(
            statement.sql,
            "SELECT `status`, sum(`amount`) AS total FROM `orders` WHERE (`amount` > ?) \
             GROUP BY `status` HAVING (sum(`amount`) > ?)"
        );
        assert_eq!(statement.args, vec![json!(0), json!(100)]);
    }

    #[test]
    fn test_count_ignores_ordering_and_pagination() {
        let db = Database::detached(DatabaseKind::Postgres);
        let statement = db
            .scope("users")
            .filter(ConditionBuilder::new().eq("active", true))
            .order_by(OrderBy::new().asc("id"))
            .limit(5)
            .build_count()
            .unwrap();

        assert_eq!(
            statement.sql,
            "SELECT count(*) FROM \"users\" WHERE (\"active\" = ?)"
        );
        assert_eq!(statement.args, vec![json!(true)]);
    }

    #[test]
    fn test_update_renders_change_ops_before_where() {
        let db = Database::detached(DatabaseKind::MySql);
        let changes = ChangeSet::new()
            .set("name", "Alice")
            .increment("visits", 1)
            .decrement("credits", 5);
        let statement = db
            .scope("users")
            .filter(ConditionBuilder::new().eq("id", 7))
            .build_update(&changes)
            .unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE `users` SET `name` = ?, `visits` = `visits` + ?, \
             `credits` = `credits` - ? WHERE (`id` = ?)"
        );
        assert_eq!(
            statement.args,
            vec![json!("Alice"), json!(1), json!(5), json!(7)]
        );
    }

    #[test]
    fn test_update_rejects_empty_change_set() {
        let db = Database::detached(DatabaseKind::MySql);
        let result = db.scope("users").build_update(&ChangeSet::new());
        assert!(matches!(result, Err(QueryhausError::Unsupported(_))));
    }

    #[test]
    fn test_delete_with_filter() {
        let db = Database::detached(DatabaseKind::ClickHouse);
        let statement = db
            .scope("events")
            .filter(ConditionBuilder::new().lt("ts", 1700000000))
            .build_delete()
            .unwrap();

        assert_eq!(statement.sql, "DELETE FROM `events` WHERE (`ts` < ?)");
        assert_eq!(statement.args, vec![json!(1700000000)]);
    }

    #[test]
    fn test_clickhouse_statements_build_without_pool() {
        let db = Database::detached(DatabaseKind::ClickHouse);
        let statement = db
            .scope("metrics")
            .select([Field::to_datetime("created_at").with_alias("ts")])
            .limit(100)
            .build_select()
            .unwrap();

        assert_eq!(
            statement.sql,
            "SELECT toDateTime(`created_at`) AS ts FROM `metrics` LIMIT 100"
        );
    }
}
