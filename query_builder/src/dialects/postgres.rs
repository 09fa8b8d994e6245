//! PostgreSQL dialect
//!
//! The only dialect with ILIKE. Aggregation over strings goes through
//! string_agg, date formatting through to_char.

use serde_json::Value;

use super::{
    between, comparison, in_list, render_shared, unary, DatabaseKind, FunctionProvider,
    OperatorSet,
};
use crate::condition::Operator;
use crate::errors::BuilderError;
use crate::fields::SqlFunction;
use crate::filter::QueryFilter;

pub struct PostgresOperators;

impl OperatorSet for PostgresOperators {
    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Postgres
    }

    fn apply(
        &self,
        key: &str,
        operator: Operator,
        value: Option<&Value>,
        filter: &mut QueryFilter,
    ) -> Result<(), BuilderError> {
        match operator {
            Operator::Eq => comparison(key, "=", operator, value, filter),
            Operator::Ne => comparison(key, "!=", operator, value, filter),
            Operator::Gt => comparison(key, ">", operator, value, filter),
            Operator::Gte => comparison(key, ">=", operator, value, filter),
            Operator::Lt => comparison(key, "<", operator, value, filter),
            Operator::Lte => comparison(key, "<=", operator, value, filter),
            Operator::Like => comparison(key, "LIKE", operator, value, filter),
            Operator::NotLike => comparison(key, "NOT LIKE", operator, value, filter),
            Operator::ILike => comparison(key, "ILIKE", operator, value, filter),
            Operator::In => in_list(key, false, operator, value, filter),
            Operator::NotIn => in_list(key, true, operator, value, filter),
            Operator::IsNull => {
                unary(key, "IS NULL", filter);
                Ok(())
            }
            Operator::IsNotNull => {
                unary(key, "IS NOT NULL", filter);
                Ok(())
            }
            Operator::Between => between(key, false, operator, value, filter),
            Operator::NotBetween => between(key, true, operator, value, filter),
            Operator::Blank | Operator::NotBlank => Err(BuilderError::UnsupportedOperator {
                kind: self.kind(),
                operator,
            }),
        }
    }
}

pub struct PostgresFunctions;

impl FunctionProvider for PostgresFunctions {
    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Postgres
    }

    fn render(&self, function: SqlFunction, names: &[String]) -> Result<String, BuilderError> {
        if let Some(sql) = render_shared(function, names) {
            return Ok(sql);
        }

        let first = names.first().map(String::as_str).unwrap_or("*");
        match function {
            SqlFunction::DateFormat => {
                Ok(format!("to_char({}, 'YYYY-MM-DD HH24:MI:SS')", first))
            }
            SqlFunction::GroupConcat => Ok(format!("string_agg({}::text, ',')", first)),
            _ => Err(BuilderError::UnsupportedFunction {
                kind: self.kind(),
                function,
            }),
        }
    }
}
