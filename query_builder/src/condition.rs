//! Condition model
//!
//! This module provides the dialect-agnostic condition types that the
//! builder folds into SQL fragments.

use serde_json::Value;

use crate::fields::Field;

/// Comparison operators understood by the dialect operator sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,         // =
    Ne,         // != (<> on ClickHouse)
    Gt,         // >
    Gte,        // >=
    Lt,         // <
    Lte,        // <=
    Like,       // LIKE
    NotLike,    // NOT LIKE
    ILike,      // ILIKE (PostgreSQL only)
    In,         // IN
    NotIn,      // NOT IN
    IsNull,     // IS NULL
    IsNotNull,  // IS NOT NULL
    Between,    // BETWEEN ? AND ?
    NotBetween, // NOT BETWEEN ? AND ?
    Blank,      // = '' (ClickHouse only)
    NotBlank,   // <> '' (ClickHouse only)
}

/// Boolean connective between a condition and its next sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joiner {
    #[default]
    And,
    Or,
}

impl Joiner {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }
}

/// Single comparison clause
///
/// The joiner applies between this condition and the next sibling, not to
/// the condition itself. `sub_group` holds a nested group that is rendered
/// in its own parentheses and attached with this condition's joiner.
#[derive(Debug, Clone)]
pub struct Condition {
    pub field: Field,
    pub operator: Operator,
    pub value: Option<Value>, // None for unary operators
    pub joiner: Joiner,
    pub sub_group: Vec<Condition>,
}

impl Condition {
    pub fn new(field: impl Into<Field>, operator: Operator, value: Option<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
            joiner: Joiner::And,
            sub_group: Vec::new(),
        }
    }

    /// Set the connective used between this condition and the next one
    pub fn with_joiner(mut self, joiner: Joiner) -> Self {
        self.joiner = joiner;
        self
    }

    /// Attach a nested group rendered inside its own parentheses
    pub fn with_sub_group(mut self, conditions: Vec<Condition>) -> Self {
        self.sub_group = conditions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_defaults_to_and() {
        let condition = Condition::new("age", Operator::Gt, Some(json!(21)));
        assert_eq!(condition.joiner, Joiner::And);
        assert!(condition.sub_group.is_empty());
    }

    #[test]
    fn test_condition_with_joiner() {
        let condition =
            Condition::new("age", Operator::Gt, Some(json!(21))).with_joiner(Joiner::Or);
        assert_eq!(condition.joiner, Joiner::Or);
    }

    #[test]
    fn test_joiner_to_sql() {
        assert_eq!(Joiner::And.to_sql(), "AND");
        assert_eq!(Joiner::Or.to_sql(), "OR");
    }
}
