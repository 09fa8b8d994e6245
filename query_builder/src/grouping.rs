//! Grouping
//!
//! `GROUP BY` fields plus an optional `HAVING` builder. The HAVING builder
//! folds exactly like a WHERE builder, so aggregate fields and argument
//! ordering behave the same way.

use serde_json::Value;

use crate::builder::ConditionBuilder;
use crate::dialects::DialectServices;
use crate::errors::BuilderError;

#[derive(Debug, Clone, Default)]
pub struct GroupBy {
    fields: Vec<String>,
    having: Option<ConditionBuilder>,
}

impl GroupBy {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            having: None,
        }
    }

    pub fn single(field: impl Into<String>) -> Self {
        Self::new([field.into()])
    }

    pub fn having(mut self, builder: ConditionBuilder) -> Self {
        self.having = Some(builder);
        self
    }

    pub fn has_having(&self) -> bool {
        self.having.as_ref().is_some_and(|having| !having.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render `GROUP BY ...` with dialect-quoted fields, empty when unset
    pub fn group_sql(&self, services: &DialectServices) -> String {
        if self.fields.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|field| services.quote(field))
            .collect();

        format!("GROUP BY {}", parts.join(", "))
    }

    /// Render `HAVING ...` with its argument list, empty when unset
    pub fn having_sql(
        &self,
        services: &DialectServices,
    ) -> Result<(String, Vec<Value>), BuilderError> {
        match &self.having {
            Some(having) if !having.is_empty() => {
                let (fragment, args) = having.build(services)?;
                Ok((format!("HAVING {}", fragment), args))
            }
            _ => Ok((String::new(), Vec::new())),
        }
    }
}
