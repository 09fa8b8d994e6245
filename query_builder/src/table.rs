//! Table references

use crate::dialects::DialectServices;

/// Implemented by model types that know their table name
pub trait TableInfo {
    fn table_name(&self) -> &str;

    /// Default alias, empty for none
    fn table_alias(&self) -> &str {
        ""
    }
}

/// Render a quoted table reference with `AS alias` when an alias applies
///
/// An explicit override wins over the type's own alias; an empty alias
/// renders the bare table name.
pub fn table_with_alias(
    info: &impl TableInfo,
    services: &DialectServices,
    alias_override: Option<&str>,
) -> String {
    let table = services.quote(info.table_name());
    let alias = alias_override.unwrap_or_else(|| info.table_alias());
    if alias.is_empty() {
        table
    } else {
        format!("{} AS {}", table, alias)
    }
}
