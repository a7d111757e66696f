/// Errors raised while generating source code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The mapping description is malformed or breaks an invariant
    #[error(transparent)]
    Mapping(#[from] tablestruct_core::Error),

    /// A record or field name cannot be used as a Rust identifier
    #[error("`{name}` in mapping for table `{table}` is not a valid Rust identifier")]
    InvalidIdentifier { table: String, name: String },

    /// A configured module path does not parse
    #[error("invalid module path `{path}`: {source}")]
    InvalidPath { path: String, source: syn::Error },

    /// The renderer produced tokens that are not a valid Rust file. This is
    /// a defect in the generator, not in the input.
    #[error("generated code does not parse: {0}")]
    Render(syn::Error),

    /// `rustfmt` could not be run or rejected the generated code
    #[error("rustfmt failed: {0}")]
    Format(String),

    /// The record declaration handed to [`describe`](crate::describe) does
    /// not parse
    #[error("failed to parse record declaration: {0}")]
    Source(syn::Error),

    /// Two table mappings name the same record type, which would emit the
    /// same accessor twice
    #[error("record type `{0}` is mapped more than once")]
    DuplicateRecord(String),

    #[error("record type `{0}` not found")]
    RecordNotFound(String),

    #[error("`{0}` is not a struct with named fields")]
    NotAStruct(String),
}
