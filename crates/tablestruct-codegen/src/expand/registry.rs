use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_struct(&self) -> TokenStream {
        let pg = &self.pg;
        let mapper = &self.accessor.mapper;
        let summary = format!(
            " Data access for `{}` records stored in the `{}` table.",
            self.accessor.record, self.accessor.table
        );
        let columns = &self.accessor.column_docs;

        quote! {
            #[doc = #summary]
            #[doc = ""]
            #[doc = " Columns, in statement order:"]
            #[doc = ""]
            #( #[doc = #columns] )*
            pub struct #mapper {
                client: #pg::Client,
                sql: HashMap<&'static str, &'static str>,
                stmt: HashMap<&'static str, #pg::Statement>,
            }
        }
    }

    pub(super) fn expand_constructor(&self) -> TokenStream {
        let pg = &self.pg;
        let names = self.accessor.prepared.iter().map(|prepared| prepared.name);
        let sqls = self.accessor.prepared.iter().map(|prepared| &prepared.sql);

        quote! {
            /// Prepares every registered statement on `client`.
            ///
            /// Fails with the first statement that does not prepare; no
            /// accessor is built from a partial registry.
            pub async fn new(client: #pg::Client) -> Result<Self, #pg::Error> {
                const SQL: &[(&str, &str)] = &[ #( (#names, #sqls) ),* ];

                let mut sql = HashMap::with_capacity(SQL.len());
                let mut stmt = HashMap::with_capacity(SQL.len());

                for &(op, text) in SQL {
                    let prepared = client.prepare(text).await?;
                    sql.insert(op, text);
                    stmt.insert(op, prepared);
                }

                Ok(Self { client, sql, stmt })
            }
        }
    }

    pub(super) fn expand_registry_methods(&self) -> TokenStream {
        let pg = &self.pg;

        quote! {
            /// Returns the client the statements were prepared on.
            pub fn client(&self) -> &#pg::Client {
                &self.client
            }

            /// Returns the SQL registered under `op`, e.g. `Get`.
            pub fn sql(&self, op: &str) -> Option<&'static str> {
                self.sql.get(op).copied()
            }
        }
    }
}
