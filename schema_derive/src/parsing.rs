//! Parsing utilities for table and column attributes
//!
//! This module handles the parsing of `#[table]` and `#[column]` attributes
//! and validation of table and column names.

use quote::quote;
use syn::{Attribute, Data, Error, Fields, Meta, Result};

/// Validate table name and return syn::Error for better proc macro error handling
pub fn validate_table_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid table name '{}': {}", name, e)))
}

/// Validate column name and return syn::Error for better proc macro error handling
pub fn validate_column_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid column name '{}': {}", name, e)))
}

/// Identifier rules shared by every supported dialect
///
/// Reserved words are not rejected here; generated SQL always quotes
/// identifiers, so keywords are representable.
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    // Shortest identifier limit across the dialects (PostgreSQL's)
    if name.len() > 63 {
        return Err(format!(
            "Name '{}' is too long: {} characters (max 63)",
            name,
            name.len()
        ));
    }

    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(format!(
            "Name '{}' must start with a letter or underscore",
            name
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "Name '{}' contains invalid characters: only alphanumeric characters and underscores are allowed",
            name
        ));
    }

    Ok(())
}

#[derive(Debug)]
pub struct TableAttrs {
    pub name: String,
}

#[derive(Debug, Default)]
pub struct ColumnAttrs {
    pub declared_type: Option<String>,
    pub skip: bool,
}

/// One column collected from a struct field
#[derive(Debug)]
pub struct ColumnMeta {
    pub name: String,
    pub rust_type: String,
    pub declared_type: Option<String>,
    pub skip: bool,
}

pub fn parse_table_attributes(attrs: &[Attribute]) -> Result<TableAttrs> {
    let mut table_name = None;

    for attr in attrs {
        if attr.path().is_ident("table") {
            if let Meta::List(meta_list) = &attr.meta {
                // Parse nested tokens manually since syn 2.0 changed the API
                let mut tokens = meta_list.tokens.clone().into_iter().peekable();

                while let Some(token) = tokens.next() {
                    if let proc_macro2::TokenTree::Ident(key) = token {
                        // Expect '=' after key
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == '=' {
                                tokens.next(); // consume '='

                                if let Some(proc_macro2::TokenTree::Literal(lit)) = tokens.next() {
                                    let value = lit.to_string().trim_matches('"').to_string();

                                    if key == "name" {
                                        table_name = Some(value);
                                    }
                                }
                            }
                        }

                        // Skip comma if present
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == ',' {
                                tokens.next(); // consume ','
                            }
                        }
                    }
                }
            }
        }
    }

    let table_name = table_name.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "table attribute is required: add #[table(name = \"table_name\")] to your struct",
        )
    })?;

    validate_table_name_syn(&table_name, proc_macro2::Span::call_site())?;

    Ok(TableAttrs { name: table_name })
}

/// Parse `#[column(...)]` keys: `type = "..."` and `skip`
pub fn parse_column_attributes(attrs: &[Attribute]) -> Result<ColumnAttrs> {
    let mut column = ColumnAttrs::default();

    for attr in attrs {
        if attr.path().is_ident("column") {
            if let Meta::List(meta_list) = &attr.meta {
                let mut tokens = meta_list.tokens.clone().into_iter().peekable();

                while let Some(token) = tokens.next() {
                    if let proc_macro2::TokenTree::Ident(key) = token {
                        let key_str = key.to_string();

                        if key_str == "skip" {
                            column.skip = true;
                        }

                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == '=' {
                                tokens.next(); // consume '='

                                if let Some(proc_macro2::TokenTree::Literal(lit)) = tokens.next() {
                                    let value = lit.to_string().trim_matches('"').to_string();

                                    if key_str == "type" {
                                        column.declared_type = Some(value);
                                    }
                                }
                            }
                        }

                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == ',' {
                                tokens.next(); // consume ','
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(column)
}

pub fn collect_columns(data: &Data) -> Result<Vec<ColumnMeta>> {
    if let Data::Struct(data_struct) = data {
        if let Fields::Named(fields_named) = &data_struct.fields {
            let mut columns = Vec::new();

            for field in &fields_named.named {
                let field_name = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
                let field_name_str = field_name.to_string();

                let ty = &field.ty;
                let type_string = quote!(#ty).to_string();
                // Normalize type string by removing all whitespace for consistent matching
                let normalized_type_string = type_string.replace(" ", "");

                let attrs = parse_column_attributes(&field.attrs)?;
                let skip = attrs.skip || is_auto_skipped(&normalized_type_string);

                // Skipped columns never reach SQL, so their names are not checked
                if !skip {
                    validate_column_name_syn(&field_name_str, field_name.span())?;
                }

                columns.push(ColumnMeta {
                    name: field_name_str,
                    rust_type: normalized_type_string,
                    declared_type: attrs.declared_type,
                    skip,
                });
            }

            return Ok(columns);
        }
    }

    Err(Error::new(
        proc_macro2::Span::call_site(),
        "TableSchema can only be derived for structs with named fields",
    ))
}

/// Non-byte `Vec<T>` fields have no scalar column representation
fn is_auto_skipped(rust_type: &str) -> bool {
    let base = rust_type
        .strip_prefix("Option<")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(rust_type);
    base.starts_with("Vec<") && base != "Vec<u8>"
}
