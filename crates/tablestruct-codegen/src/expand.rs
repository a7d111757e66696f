mod insert;
mod keyed;
mod load;
mod registry;
mod scan;

use crate::{Accessor, Config};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The accessor being expanded
    accessor: &'a Accessor,

    /// Path prefix for tokio-postgres types
    pg: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let mapper = &self.accessor.mapper;
        let struct_def = self.expand_struct();
        let constructor = self.expand_constructor();
        let registry_methods = self.expand_registry_methods();
        let load_obj = self.expand_load_obj();
        let keyed_methods = self.expand_keyed_methods();
        let insert_methods = self.expand_insert_methods();
        let scan_methods = self.expand_scan_methods();

        quote! {
            #struct_def

            impl #mapper {
                #constructor
                #registry_methods
                #load_obj
                #keyed_methods
                #insert_methods
                #scan_methods
            }
        }
    }
}

/// Expands the declaration and method set of one accessor.
pub(crate) fn accessor(accessor: &Accessor) -> TokenStream {
    Expand {
        accessor,
        pg: quote!(tokio_postgres),
    }
    .expand()
}

/// `use` items shared by every accessor of one output unit.
pub(crate) fn preamble(records: &[&syn::Ident], config: &Config) -> TokenStream {
    if records.is_empty() {
        return quote!();
    }

    let support = &config.support_path;
    let records_path = &config.records_path;

    quote! {
        use std::collections::HashMap;

        use #support::Scanner;
        use #records_path::{ #( #records ),* };
    }
}
