//! Ordering

use crate::dialects::DialectServices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Ordered list of (field, direction) pairs
#[derive(Debug, Clone, Default)]
pub struct OrderBy {
    entries: Vec<(String, SortOrder)>,
}

impl OrderBy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asc(self, field: impl Into<String>) -> Self {
        self.push(field, SortOrder::Asc)
    }

    pub fn desc(self, field: impl Into<String>) -> Self {
        self.push(field, SortOrder::Desc)
    }

    pub fn push(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.entries.push((field.into(), order));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render `ORDER BY ...` with dialect-quoted fields, empty when unset
    pub fn to_sql(&self, services: &DialectServices) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(field, order)| format!("{} {}", services.quote(field), order.to_sql()))
            .collect();

        format!("ORDER BY {}", parts.join(", "))
    }
}
