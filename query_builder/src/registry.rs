//! Dialect registry
//!
//! A registry is a plain value built at startup and passed by reference
//! into the builders. Cloning is cheap because the dialect services share
//! their operator sets and function providers through `Arc`.

use std::collections::HashMap;

use crate::dialects::{DatabaseKind, DialectServices};
use crate::errors::BuilderError;

#[derive(Debug, Clone)]
pub struct DialectRegistry {
    entries: HashMap<DatabaseKind, DialectServices>,
}

impl DialectRegistry {
    /// Registry with no dialects registered
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry carrying the three built-in dialects
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(DialectServices::mysql());
        registry.register(DialectServices::postgres());
        registry.register(DialectServices::clickhouse());
        registry
    }

    /// Register services under their own kind, replacing any previous entry
    pub fn register(&mut self, services: DialectServices) {
        tracing::debug!("[DIALECT_REGISTRY] Registering dialect: {}", services.kind());
        self.entries.insert(services.kind(), services);
    }

    /// Look up the services for a kind
    pub fn services(&self, kind: DatabaseKind) -> Result<&DialectServices, BuilderError> {
        self.entries
            .get(&kind)
            .ok_or(BuilderError::UnknownDialect(kind))
    }

    pub fn contains(&self, kind: DatabaseKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn kinds(&self) -> Vec<DatabaseKind> {
        self.entries.keys().copied().collect()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
