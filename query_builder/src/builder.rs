//! Condition builder
//!
//! `ConditionBuilder` accumulates conditions and folds them into a single
//! parenthesized fragment for a dialect. Each condition carries the
//! connective used between it and its successor, so `a.or().b` renders
//! `(a) OR (b)` while `a.and().b` renders `a AND b`.

use serde_json::Value;

use crate::condition::{Condition, Joiner, Operator};
use crate::dialects::DialectServices;
use crate::errors::BuilderError;
use crate::fields::Field;
use crate::filter::QueryFilter;

#[derive(Debug, Clone, Default)]
pub struct ConditionBuilder {
    conditions: Vec<Condition>,
}

impl ConditionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_conditions(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Append a raw condition
    pub fn append(mut self, field: impl Into<Field>, operator: Operator, value: Option<Value>) -> Self {
        self.conditions.push(Condition::new(field, operator, value));
        self
    }

    pub fn eq(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Eq, Some(value.into()))
    }

    pub fn ne(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Ne, Some(value.into()))
    }

    pub fn gt(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Gt, Some(value.into()))
    }

    pub fn gte(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Gte, Some(value.into()))
    }

    pub fn lt(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Lt, Some(value.into()))
    }

    pub fn lte(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Lte, Some(value.into()))
    }

    pub fn like(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::Like, Some(value.into()))
    }

    pub fn not_like(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::NotLike, Some(value.into()))
    }

    /// Case-insensitive LIKE, PostgreSQL only
    pub fn ilike(self, field: impl Into<Field>, value: impl Into<Value>) -> Self {
        self.append(field, Operator::ILike, Some(value.into()))
    }

    pub fn in_values<I, V>(self, field: impl Into<Field>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.append(field, Operator::In, Some(Value::Array(values)))
    }

    pub fn not_in_values<I, V>(self, field: impl Into<Field>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.append(field, Operator::NotIn, Some(Value::Array(values)))
    }

    pub fn is_null(self, field: impl Into<Field>) -> Self {
        self.append(field, Operator::IsNull, None)
    }

    pub fn is_not_null(self, field: impl Into<Field>) -> Self {
        self.append(field, Operator::IsNotNull, None)
    }

    pub fn between(
        self,
        field: impl Into<Field>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let bounds = Value::Array(vec![low.into(), high.into()]);
        self.append(field, Operator::Between, Some(bounds))
    }

    pub fn not_between(
        self,
        field: impl Into<Field>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let bounds = Value::Array(vec![low.into(), high.into()]);
        self.append(field, Operator::NotBetween, Some(bounds))
    }

    /// Empty-string test, ClickHouse only
    pub fn blank(self, field: impl Into<Field>) -> Self {
        self.append(field, Operator::Blank, None)
    }

    /// Non-empty-string test, ClickHouse only
    pub fn not_blank(self, field: impl Into<Field>) -> Self {
        self.append(field, Operator::NotBlank, None)
    }

    /// Join the next condition with AND (the default)
    pub fn and(mut self) -> Self {
        if let Some(last) = self.conditions.last_mut() {
            last.joiner = Joiner::And;
        }
        self
    }

    /// Join the next condition with OR
    pub fn or(mut self) -> Self {
        if let Some(last) = self.conditions.last_mut() {
            last.joiner = Joiner::Or;
        }
        self
    }

    /// Attach a nested group to the most recent condition
    ///
    /// The group renders in its own parentheses and joins with the owning
    /// condition's connective. No-op on an empty builder.
    pub fn group(mut self, group: ConditionBuilder) -> Self {
        if let Some(last) = self.conditions.last_mut() {
            last.sub_group = group.conditions;
        }
        self
    }

    /// Concatenate another builder's conditions onto this one
    pub fn merge(mut self, other: ConditionBuilder) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Fold all conditions into a parenthesized fragment and argument list
    ///
    /// An empty builder yields `("", [])`.
    pub fn build(&self, services: &DialectServices) -> Result<(String, Vec<Value>), BuilderError> {
        if self.conditions.is_empty() {
            return Ok((String::new(), Vec::new()));
        }

        let (query, args) = Self::fold(&self.conditions, services)?.into_parts();

        tracing::debug!(
            "[CONDITION_BUILD] Built {} fragment: {}",
            services.kind(),
            query
        );

        Ok((format!("({})", query), args))
    }

    fn fold(
        conditions: &[Condition],
        services: &DialectServices,
    ) -> Result<QueryFilter, BuilderError> {
        let mut acc = QueryFilter::new();
        let mut connective = Joiner::And;

        for condition in conditions {
            let key = condition.field.render(services)?;
            let mut piece = QueryFilter::new();
            services.operators().apply(
                &key,
                condition.operator,
                condition.value.as_ref(),
                &mut piece,
            )?;
            acc.merge(piece, connective);

            if !condition.sub_group.is_empty() {
                let (nested, args) = Self::fold(&condition.sub_group, services)?.into_parts();
                let wrapped = QueryFilter::from_parts(format!("({})", nested), args);
                acc.merge(wrapped, condition.joiner);
            }

            connective = condition.joiner;
        }

        Ok(acc)
    }
}
