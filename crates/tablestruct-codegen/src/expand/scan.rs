use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `all`, `find_where` and `find_where_with`; generated for every table.
    pub(super) fn expand_scan_methods(&self) -> TokenStream {
        let pg = &self.pg;
        let record = &self.accessor.record;
        let select_sql = &self.accessor.select_sql;

        quote! {
            /// Loads every row of the table.
            pub async fn all(&self) -> Result<Vec<#record>, #pg::Error> {
                let rows = self.client.query(&self.stmt["All"], &[]).await?;
                rows.iter().map(Self::load_obj).collect()
            }

            /// Loads the rows matching `filter`, a raw SQL boolean expression.
            ///
            /// `filter` is appended after `WHERE` as is: it is neither
            /// escaped nor bound, and must never contain untrusted input.
            pub async fn find_where(&self, filter: &str) -> Result<Vec<#record>, #pg::Error> {
                self.find_where_with(filter, &[]).await
            }

            /// Like [`find_where`](Self::find_where), binding `params` to
            /// `$1`, `$2`, ... placeholders inside `filter`.
            pub async fn find_where_with(
                &self,
                filter: &str,
                params: &[&(dyn #pg::types::ToSql + Sync)],
            ) -> Result<Vec<#record>, #pg::Error> {
                let sql = format!("{} WHERE {}", #select_sql, filter);
                let rows = self.client.query(&sql, params).await?;
                rows.iter().map(Self::load_obj).collect()
            }
        }
    }
}
