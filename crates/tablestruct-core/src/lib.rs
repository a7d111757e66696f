mod column;
pub use column::ColumnMap;

mod error;
pub use error::Error;

mod mapping;
pub use mapping::MappingSet;

mod table;
pub use table::{InsertValue, TableMap};

/// A Result type alias that uses the mapping model's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
