//! Joins
//!
//! Join clauses render uniformly across dialects; only identifier quoting
//! differs. The ON predicate is an equality between two (possibly dotted)
//! field references.

use crate::dialects::DialectServices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
        }
    }
}

#[derive(Debug, Clone)]
pub struct JoinClause {
    join_type: JoinType,
    table: String,
    alias: Option<String>,
    left_field: String,
    right_field: String,
}

impl JoinClause {
    pub fn new(
        join_type: JoinType,
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            table: table.into(),
            alias: None,
            left_field: left_field.into(),
            right_field: right_field.into(),
        }
    }

    pub fn inner(
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Inner, table, left_field, right_field)
    }

    pub fn left(
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Left, table, left_field, right_field)
    }

    pub fn right(
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Right, table, left_field, right_field)
    }

    pub fn full(
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Full, table, left_field, right_field)
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Quoted table reference, `AS alias` when one is set
    pub fn table_ref(&self, services: &DialectServices) -> String {
        let table = services.quote(&self.table);
        match &self.alias {
            Some(alias) => format!("{} AS {}", table, alias),
            None => table,
        }
    }

    pub fn to_sql(&self, services: &DialectServices) -> String {
        format!(
            "{} {} ON {} = {}",
            self.join_type.to_sql(),
            self.table_ref(services),
            services.quote(&self.left_field),
            services.quote(&self.right_field)
        )
    }
}
