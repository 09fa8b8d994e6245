//! Pagination
//!
//! Page-based pagination resolves to a limit/offset pair, rendered in the
//! dialect's limit style. MySQL uses the offset-first comma form; PostgreSQL
//! and ClickHouse use `LIMIT n OFFSET o`. An offset of zero is elided.

use crate::dialects::LimitStyle;

/// Zero-based page over a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u64,
    pub page_size: u64,
}

impl Pager {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        self.page * self.page_size
    }

    pub fn paginate(&self) -> Pagination {
        Pagination::new(Some(self.page_size), Some(self.offset()))
    }
}

/// Raw limit/offset pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Pagination {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self { limit, offset }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }

    /// Render the clause for the dialect's limit style, empty when unset
    pub fn to_sql(&self, style: LimitStyle) -> String {
        match (self.limit, self.offset) {
            (None, None) => String::new(),
            (Some(limit), None) | (Some(limit), Some(0)) => format!("LIMIT {}", limit),
            (Some(limit), Some(offset)) => match style {
                LimitStyle::OffsetCommaLimit => format!("LIMIT {},{}", offset, limit),
                LimitStyle::LimitOffset => format!("LIMIT {} OFFSET {}", limit, offset),
            },
            // The comma form cannot express an offset without a limit
            (None, Some(offset)) => match style {
                LimitStyle::OffsetCommaLimit => String::new(),
                LimitStyle::LimitOffset => {
                    if offset == 0 {
                        String::new()
                    } else {
                        format!("OFFSET {}", offset)
                    }
                }
            },
        }
    }
}
