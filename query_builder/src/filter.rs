//! Fragment accumulator
//!
//! A `QueryFilter` collects a SQL fragment and its positional arguments as
//! conditions are appended. `and` appends bare; `or` parenthesizes both
//! sides so the OR binds at the right precedence when the fragment is
//! embedded in a larger expression.

use serde_json::Value;

use crate::condition::Joiner;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    query: String,
    args: Vec<Value>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(query: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            query: query.into(),
            args,
        }
    }

    /// Append a fragment with AND
    pub fn and(&mut self, query: &str, args: Vec<Value>) -> &mut Self {
        if self.query.is_empty() {
            self.query = query.to_string();
        } else if !query.is_empty() {
            self.query = format!("{} AND {}", self.query, query);
        }
        self.args.extend(args);
        self
    }

    /// Append a fragment with OR, parenthesizing both sides
    pub fn or(&mut self, query: &str, args: Vec<Value>) -> &mut Self {
        if self.query.is_empty() {
            self.query = query.to_string();
        } else if !query.is_empty() {
            self.query = format!("({}) OR ({})", self.query, query);
        }
        self.args.extend(args);
        self
    }

    /// Merge another filter using the given connective
    pub fn merge(&mut self, other: QueryFilter, joiner: Joiner) -> &mut Self {
        let (query, args) = other.into_parts();
        match joiner {
            Joiner::And => self.and(&query, args),
            Joiner::Or => self.or(&query, args),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.query, self.args)
    }
}
