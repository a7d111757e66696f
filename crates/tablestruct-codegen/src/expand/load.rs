use super::Expand;
use crate::util;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_load_obj(&self) -> TokenStream {
        let pg = &self.pg;
        let record = &self.accessor.record;

        // Columns are matched to fields by position only
        let assignments = self
            .accessor
            .load_fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let index = util::int(index);
                quote!(obj.#field = scanner.column(#index)?;)
            });

        quote! {
            #[allow(unused_mut, clippy::field_reassign_with_default)]
            fn load_obj(scanner: &impl Scanner) -> Result<#record, #pg::Error> {
                let mut obj = #record::default();
                #( #assignments )*
                Ok(obj)
            }
        }
    }
}
