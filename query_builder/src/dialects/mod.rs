//! Dialect services
//!
//! Each supported database kind bundles an operator set, a function
//! provider, a quote character and a LIMIT style into `DialectServices`.
//! The bundles live in a `DialectRegistry` built at startup and are passed
//! by reference into the builders; nothing here is global or locked.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::Operator;
use crate::errors::BuilderError;
use crate::fields::SqlFunction;
use crate::filter::QueryFilter;
use crate::ident::quote_path;

pub mod clickhouse;
pub mod mysql;
pub mod postgres;

pub use clickhouse::{ClickHouseFunctions, ClickHouseOperators};
pub use mysql::{MySqlFunctions, MySqlOperators};
pub use postgres::{PostgresFunctions, PostgresOperators};

/// Database kinds with a built-in dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    MySql,
    Postgres,
    ClickHouse,
}

impl DatabaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::MySql => "mysql",
            DatabaseKind::Postgres => "postgres",
            DatabaseKind::ClickHouse => "clickhouse",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a dialect renders LIMIT with a non-zero offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT offset,limit` (MySQL comma form)
    OffsetCommaLimit,
    /// `LIMIT limit OFFSET offset`
    LimitOffset,
}

/// Per-dialect operator dispatch
///
/// Handlers append a parameterized fragment and its arguments to the
/// filter. Operators the dialect cannot express return
/// `BuilderError::UnsupportedOperator`.
pub trait OperatorSet: Send + Sync {
    fn kind(&self) -> DatabaseKind;

    fn apply(
        &self,
        key: &str,
        operator: Operator,
        value: Option<&Value>,
        filter: &mut QueryFilter,
    ) -> Result<(), BuilderError>;
}

/// Per-dialect function rendering
pub trait FunctionProvider: Send + Sync {
    fn kind(&self) -> DatabaseKind;

    /// Render a function call over already-quoted field names
    fn render(&self, function: SqlFunction, names: &[String]) -> Result<String, BuilderError>;
}

/// Everything the builders need to emit SQL for one dialect
#[derive(Clone)]
pub struct DialectServices {
    kind: DatabaseKind,
    quote: char,
    limit_style: LimitStyle,
    operators: Arc<dyn OperatorSet>,
    functions: Arc<dyn FunctionProvider>,
}

impl DialectServices {
    pub fn new(
        kind: DatabaseKind,
        quote: char,
        limit_style: LimitStyle,
        operators: Arc<dyn OperatorSet>,
        functions: Arc<dyn FunctionProvider>,
    ) -> Self {
        Self {
            kind,
            quote,
            limit_style,
            operators,
            functions,
        }
    }

    pub fn mysql() -> Self {
        Self::new(
            DatabaseKind::MySql,
            '`',
            LimitStyle::OffsetCommaLimit,
            Arc::new(MySqlOperators),
            Arc::new(MySqlFunctions),
        )
    }

    pub fn postgres() -> Self {
        Self::new(
            DatabaseKind::Postgres,
            '"',
            LimitStyle::LimitOffset,
            Arc::new(PostgresOperators),
            Arc::new(PostgresFunctions),
        )
    }

    pub fn clickhouse() -> Self {
        Self::new(
            DatabaseKind::ClickHouse,
            '`',
            LimitStyle::LimitOffset,
            Arc::new(ClickHouseOperators),
            Arc::new(ClickHouseFunctions),
        )
    }

    pub fn kind(&self) -> DatabaseKind {
        self.kind
    }

    pub fn quote_char(&self) -> char {
        self.quote
    }

    pub fn limit_style(&self) -> LimitStyle {
        self.limit_style
    }

    pub fn operators(&self) -> &dyn OperatorSet {
        self.operators.as_ref()
    }

    pub fn functions(&self) -> &dyn FunctionProvider {
        self.functions.as_ref()
    }

    /// Quote a possibly dotted identifier with this dialect's quote character
    pub fn quote(&self, path: &str) -> String {
        quote_path(path, self.quote)
    }

    /// Project a predicate to a boolean expression
    pub fn if_else(&self, predicate: &str) -> String {
        match self.kind {
            DatabaseKind::MySql => format!("IF({}, true, false)", predicate),
            DatabaseKind::Postgres => {
                format!("CASE WHEN {} THEN true ELSE false END", predicate)
            }
            DatabaseKind::ClickHouse => format!("if({}, true, false)", predicate),
        }
    }
}

impl fmt::Debug for DialectServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectServices")
            .field("kind", &self.kind)
            .field("quote", &self.quote)
            .field("limit_style", &self.limit_style)
            .finish()
    }
}

// ============================================================================
// Shared operator handlers
// ============================================================================

pub(crate) fn comparison(
    key: &str,
    sql_op: &str,
    operator: Operator,
    value: Option<&Value>,
    filter: &mut QueryFilter,
) -> Result<(), BuilderError> {
    let value = required_value(operator, value)?;
    filter.and(&format!("{} {} ?", key, sql_op), vec![value.clone()]);
    Ok(())
}

pub(crate) fn unary(key: &str, suffix: &str, filter: &mut QueryFilter) {
    filter.and(&format!("{} {}", key, suffix), Vec::new());
}

pub(crate) fn in_list(
    key: &str,
    negated: bool,
    operator: Operator,
    value: Option<&Value>,
    filter: &mut QueryFilter,
) -> Result<(), BuilderError> {
    let values = array_value(operator, value)?;
    if values.is_empty() {
        // constant-false / constant-true sentinels keep the fragment valid
        filter.and(if negated { "1=1" } else { "1=0" }, Vec::new());
        return Ok(());
    }

    let placeholders = vec!["?"; values.len()].join(", ");
    let sql_op = if negated { "NOT IN" } else { "IN" };
    filter.and(
        &format!("{} {} ({})", key, sql_op, placeholders),
        values.to_vec(),
    );
    Ok(())
}

pub(crate) fn between(
    key: &str,
    negated: bool,
    operator: Operator,
    value: Option<&Value>,
    filter: &mut QueryFilter,
) -> Result<(), BuilderError> {
    let values = array_value(operator, value)?;
    if values.len() != 2 {
        return Err(BuilderError::InvalidOperand {
            operator,
            reason: format!("expected two bounds, got {}", values.len()),
        });
    }

    let sql_op = if negated { "NOT BETWEEN" } else { "BETWEEN" };
    filter.and(
        &format!("{} {} ? AND ?", key, sql_op),
        values.to_vec(),
    );
    Ok(())
}

pub(crate) fn required_value<'a>(
    operator: Operator,
    value: Option<&'a Value>,
) -> Result<&'a Value, BuilderError> {
    value.ok_or_else(|| BuilderError::InvalidOperand {
        operator,
        reason: "missing value".to_string(),
    })
}

pub(crate) fn array_value<'a>(
    operator: Operator,
    value: Option<&'a Value>,
) -> Result<&'a Vec<Value>, BuilderError> {
    match required_value(operator, value)? {
        Value::Array(items) => Ok(items),
        other => Err(BuilderError::InvalidOperand {
            operator,
            reason: format!("expected an array value, got {}", other),
        }),
    }
}

/// Function renderings shared by every dialect; returns None for the
/// functions that diverge per dialect
pub(crate) fn render_shared(function: SqlFunction, names: &[String]) -> Option<String> {
    let first = names.first().map(String::as_str).unwrap_or("*");
    match function {
        SqlFunction::Max => Some(format!("max({})", first)),
        SqlFunction::Min => Some(format!("min({})", first)),
        SqlFunction::Count => Some(format!("count({})", first)),
        SqlFunction::CountAll => Some("count(*)".to_string()),
        SqlFunction::CountDistinct => Some(format!("count(distinct {})", first)),
        SqlFunction::Avg => Some(format!("avg({})", first)),
        SqlFunction::Sum => Some(format!("sum({})", first)),
        SqlFunction::Distinct => Some(format!("distinct {}", first)),
        SqlFunction::Upper => Some(format!("upper({})", first)),
        SqlFunction::Lower => Some(format!("lower({})", first)),
        SqlFunction::Length => Some(format!("length({})", first)),
        SqlFunction::Concat => Some(format!("concat({})", names.join(", "))),
        SqlFunction::DateFormat | SqlFunction::GroupConcat | SqlFunction::ToDateTime => None,
    }
}
