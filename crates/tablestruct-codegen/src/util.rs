use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

/// Unsuffixed integer literal, e.g. a column index.
pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// Parses `name` as an identifier, returning `None` for keywords and
/// anything else that cannot name a type or field.
pub(crate) fn ident(name: &str) -> Option<syn::Ident> {
    syn::parse_str::<syn::Ident>(name).ok()
}
