use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `get`, `update` and `delete`. Nothing is generated without a key.
    pub(super) fn expand_keyed_methods(&self) -> TokenStream {
        let Some(key) = &self.accessor.key else {
            return quote!();
        };

        let pg = &self.pg;
        let record = &self.accessor.record;
        let key_field = &key.field;
        let update_fields = &self.accessor.update_fields;

        quote! {
            /// Loads the record whose primary key equals `key`.
            ///
            /// Fails with the driver's row count error when no row matches.
            pub async fn get(&self, key: &(dyn #pg::types::ToSql + Sync)) -> Result<#record, #pg::Error> {
                let row = self.client.query_one(&self.stmt["Get"], &[key]).await?;
                Self::load_obj(&row)
            }

            /// Writes every mapped field of `obj` to the row with the same
            /// primary key and returns the number of rows affected.
            pub async fn update(&self, obj: &#record) -> Result<u64, #pg::Error> {
                self.client
                    .execute(&self.stmt["Update"], &[ #( &obj.#update_fields ),* ])
                    .await
            }

            /// Deletes the row with the primary key of `obj` and returns the
            /// number of rows affected.
            pub async fn delete(&self, obj: &#record) -> Result<u64, #pg::Error> {
                self.client
                    .execute(&self.stmt["Delete"], &[&obj.#key_field])
                    .await
            }
        }
    }
}
