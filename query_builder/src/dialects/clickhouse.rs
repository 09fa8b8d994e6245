//! ClickHouse dialect
//!
//! Inequality renders as `<>` and the blank-string tests are available
//! here only. Pattern matching, range and null operators are not part of
//! this dialect's table and error out instead of producing a fragment.

use serde_json::Value;

use super::{comparison, in_list, render_shared, unary, DatabaseKind, FunctionProvider, OperatorSet};
use crate::condition::Operator;
use crate::errors::BuilderError;
use crate::fields::SqlFunction;
use crate::filter::QueryFilter;

pub struct ClickHouseOperators;

impl OperatorSet for ClickHouseOperators {
    fn kind(&self) -> DatabaseKind {
        DatabaseKind::ClickHouse
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
            Operator::Ne => comparison(key, "<>", operator, value, filter),
            Operator::Gt => comparison(key, ">", operator, value, filter),
            Operator::Gte => comparison(key, ">=", operator, value, filter),
            Operator::Lt => comparison(key, "<", operator, value, filter),
            Operator::Lte => comparison(key, "<=", operator, value, filter),
            Operator::In => in_list(key, false, operator, value, filter),
            Operator::NotIn => in_list(key, true, operator, value, filter),
            Operator::Blank => {
                unary(key, "= ''", filter);
                Ok(())
            }
            Operator::NotBlank => {
                unary(key, "<> ''", filter);
                Ok(())
            }
            Operator::Like
            | Operator::NotLike
            | Operator::ILike
            | Operator::IsNull
            | Operator::IsNotNull
            | Operator::Between
            | Operator::NotBetween => Err(BuilderError::UnsupportedOperator {
                kind: self.kind(),
                operator,
            }),
        }
    }
}

pub struct ClickHouseFunctions;

impl FunctionProvider for ClickHouseFunctions {
    fn kind(&self) -> DatabaseKind {
        DatabaseKind::ClickHouse
    }

    fn render(&self, function: SqlFunction, names: &[String]) -> Result<String, BuilderError> {
        if let Some(sql) = render_shared(function, names) {
            return Ok(sql);
        }

        let first = names.first().map(String::as_str).unwrap_or("*");
        match function {
            SqlFunction::DateFormat => {
                Ok(format!("formatDateTime({}, '%Y-%m-%d %H:%M:%S')", first))
            }
            SqlFunction::GroupConcat => Ok(format!(
                "arrayStringConcat(groupArray(toString({})), ',')",
                first
            )),
            SqlFunction::ToDateTime => Ok(format!("toDateTime({})", first)),
            _ => Err(BuilderError::UnsupportedFunction {
                kind: self.kind(),
                function,
            }),
        }
    }
}
