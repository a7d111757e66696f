use proc_macro2::TokenStream;
use quote::quote;

/// The `Scanner` trait generated accessors load rows through.
pub(crate) fn module() -> TokenStream {
    quote! {
        use tokio_postgres::types::FromSql;
        use tokio_postgres::{Error, Row};

        /// Reads the columns of one result row by position.
        ///
        /// Generated accessors load records through this trait, in the
        /// order the columns appear in their `SELECT` statements.
        pub trait Scanner {
            fn column<'a, T: FromSql<'a>>(&'a self, idx: usize) -> Result<T, Error>;
        }

        impl Scanner for Row {
            fn column<'a, T: FromSql<'a>>(&'a self, idx: usize) -> Result<T, Error> {
                self.try_get(idx)
            }
        }
    }
}
