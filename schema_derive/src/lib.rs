//! Procedural macro for generating table schema metadata
//!
//! This crate provides the `TableSchema` derive, which produces the
//! column metadata consumed by schema validation and auto-migration.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod generate;
mod parsing;

use generate::generate_table_schema_impl;
use parsing::{collect_columns, parse_table_attributes};

/// Derive macro for the TableSchema trait
///
/// `#[table(name = "...")]` is required. `#[column(type = "...")]` declares
/// an explicit column type, `#[column(skip)]` excludes a field, and non-byte
/// `Vec<T>` fields are excluded automatically.
///
/// ```
/// use schema_derive::TableSchema;
///
/// #[derive(TableSchema)]
/// #[table(name = "users")]
/// struct User {
///     id: i64,
///     name: String,
///     #[column(type = "text")]
///     bio: String,
///     #[column(skip)]
///     session_token: String,
/// }
///
/// use schema_mapping::TableSchema as _;
/// assert_eq!(User::table_name(), "users");
/// assert_eq!(User::columns().len(), 4);
/// assert_eq!(User::active_columns().len(), 3);
/// ```
#[proc_macro_derive(TableSchema, attributes(table, column))]
pub fn derive_table_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    // Parse table attributes - handle errors properly
    let table = match parse_table_attributes(&input.attrs) {
        Ok(attrs) => attrs,
        Err(e) => return e.to_compile_error().into(),
    };

    // Parse column attributes - handle errors properly
    let columns = match collect_columns(&input.data) {
        Ok(columns) => columns,
        Err(e) => return e.to_compile_error().into(),
    };

    let expanded = generate_table_schema_impl(name, &table, &columns);

    TokenStream::from(expanded)
}
