use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_insert_methods(&self) -> TokenStream {
        match &self.accessor.key {
            Some(key) if key.generated => self.expand_insert_generated_key(&key.field),
            _ => self.expand_insert_plain(),
        }
    }

    /// The database assigns the key, which is read back into the record.
    fn expand_insert_generated_key(&self, key_field: &syn::Ident) -> TokenStream {
        let pg = &self.pg;
        let record = &self.accessor.record;
        let fields = &self.accessor.insert_fields;
        let args = quote!(&[ #( &obj.#fields ),* ]);
        let insert_doc = format!(
            " Inserts `obj` and stores the key assigned by the database in `obj.{key_field}`."
        );

        quote! {
            #[doc = #insert_doc]
            pub async fn insert(&self, obj: &mut #record) -> Result<(), #pg::Error> {
                let row = self.client.query_one(&self.stmt["Insert"], #args).await?;
                obj.#key_field = row.column(0)?;
                Ok(())
            }

            /// Inserts every record in one transaction, storing each assigned
            /// key. Nothing is committed unless every insert succeeds.
            pub async fn insert_many(&mut self, objs: &mut [#record]) -> Result<(), #pg::Error> {
                let tx = self.client.transaction().await?;
                let stmt = &self.stmt["Insert"];

                for obj in objs.iter_mut() {
                    let row = tx.query_one(stmt, #args).await?;
                    obj.#key_field = row.column(0)?;
                }

                tx.commit().await
            }
        }
    }

    fn expand_insert_plain(&self) -> TokenStream {
        let pg = &self.pg;
        let record = &self.accessor.record;
        let fields = &self.accessor.insert_fields;
        let args = quote!(&[ #( &obj.#fields ),* ]);

        quote! {
            /// Inserts `obj`.
            pub async fn insert(&self, obj: &#record) -> Result<(), #pg::Error> {
                self.client.execute(&self.stmt["Insert"], #args).await?;
                Ok(())
            }

            /// Inserts every record in one transaction. Nothing is committed
            /// unless every insert succeeds.
            pub async fn insert_many(&mut self, objs: &[#record]) -> Result<(), #pg::Error> {
                let tx = self.client.transaction().await?;
                let stmt = &self.stmt["Insert"];

                for obj in objs {
                    tx.execute(stmt, #args).await?;
                }

                tx.commit().await
            }
        }
    }
}
