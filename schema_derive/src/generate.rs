//! Code generation for the TableSchema impl

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::{ColumnMeta, TableAttrs};

pub fn generate_table_schema_impl(
    name: &Ident,
    table: &TableAttrs,
    columns: &[ColumnMeta],
) -> TokenStream {
    let table_name = &table.name;

    let column_defs = columns.iter().map(|column| {
        let column_name = &column.name;
        let rust_type = &column.rust_type;
        let declared_type = match &column.declared_type {
            Some(declared) => quote! { Some(#declared) },
            None => quote! { None },
        };
        let skip = column.skip;

        quote! {
            schema_mapping::ColumnDef {
                name: #column_name,
                rust_type: #rust_type,
                declared_type: #declared_type,
                skip: #skip,
            }
        }
    });

    quote! {
        impl schema_mapping::TableSchema for #name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [schema_mapping::ColumnDef] {
                const COLUMNS: &[schema_mapping::ColumnDef] = &[
                    #(#column_defs),*
                ];
                COLUMNS
            }
        }
    }
}
