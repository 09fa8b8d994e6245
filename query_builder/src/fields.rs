//! Field expressions
//!
//! A `Field` is a column reference with an optional function tag and an
//! optional alias. It renders through the dialect's function provider so
//! the same expression emits the correct SQL for each database kind.

use crate::dialects::DialectServices;
use crate::errors::BuilderError;

/// Function tags resolved per dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlFunction {
    Max,
    Min,
    Count,
    CountAll,
    CountDistinct,
    Avg,
    Sum,
    Distinct,
    Upper,
    Lower,
    Concat,
    Length,
    DateFormat,
    GroupConcat,
    ToDateTime,
}

/// Column reference with optional function and alias
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    names: Vec<String>,
    function: Option<SqlFunction>,
    alias: Option<String>,
}

impl Field {
    /// Plain column reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            function: None,
            alias: None,
        }
    }

    fn with_function(name: impl Into<String>, function: SqlFunction) -> Self {
        Self {
            names: vec![name.into()],
            function: Some(function),
            alias: None,
        }
    }

    pub fn max(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Max)
    }

    pub fn min(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Min)
    }

    pub fn count(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Count)
    }

    /// COUNT(*) without a column reference
    pub fn count_all() -> Self {
        Self {
            names: Vec::new(),
            function: Some(SqlFunction::CountAll),
            alias: None,
        }
    }

    pub fn count_distinct(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::CountDistinct)
    }

    pub fn avg(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Avg)
    }

    pub fn sum(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Sum)
    }

    pub fn distinct(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Distinct)
    }

    pub fn upper(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Upper)
    }

    pub fn lower(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Lower)
    }

    pub fn length(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::Length)
    }

    pub fn date_format(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::DateFormat)
    }

    pub fn group_concat(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::GroupConcat)
    }

    pub fn to_datetime(name: impl Into<String>) -> Self {
        Self::with_function(name, SqlFunction::ToDateTime)
    }

    /// concat over several columns
    pub fn concat<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            function: Some(SqlFunction::Concat),
            alias: None,
        }
    }

    /// Add an alias rendered as `AS alias`
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn function(&self) -> Option<SqlFunction> {
        self.function
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Render for the given dialect, quoting names and resolving the
    /// function tag through the dialect's provider
    pub fn render(&self, services: &DialectServices) -> Result<String, BuilderError> {
        let quoted: Vec<String> = self.names.iter().map(|name| services.quote(name)).collect();

        let body = match self.function {
            None => quoted.first().cloned().unwrap_or_else(|| "*".to_string()),
            Some(function) => services.functions().render(function, &quoted)?,
        };

        Ok(match &self.alias {
            Some(alias) => format!("{} AS {}", body, alias),
            None => body,
        })
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name)
    }
}

/// Render a select list, defaulting to `*` when empty
pub fn select_clause(fields: &[Field], services: &DialectServices) -> Result<String, BuilderError> {
    if fields.is_empty() {
        return Ok("*".to_string());
    }

    let parts = fields
        .iter()
        .map(|field| field.render(services))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parts.join(", "))
}
