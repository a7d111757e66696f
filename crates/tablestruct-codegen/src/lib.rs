mod config;
pub use config::Config;

mod describe;
pub use describe::{describe, DescribeOptions};

mod error;
pub use error::Error;

mod expand;

mod out;
pub use out::{Output, Section};

mod schema;
use schema::Accessor;

mod support;

mod util;

use std::collections::HashSet;
use tablestruct_core::MappingSet;

/// A Result type alias that uses the generator's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Generate accessor code for every table mapping in `mappings`, in order.
///
/// Each mapping is validated before it is rendered; the first invalid
/// mapping, or the second mapping of an already mapped record type, aborts
/// generation.
pub fn generate(mappings: &MappingSet, config: &Config) -> Result<Output> {
    let mut sections = Vec::with_capacity(mappings.len());
    let mut records = HashSet::with_capacity(mappings.len());

    for (index, table) in mappings.iter().enumerate() {
        log::info!(
            "{}: generating map {} -> {}",
            index,
            table.table,
            table.record
        );

        if !records.insert(table.record.as_str()) {
            return Err(Error::DuplicateRecord(table.record.clone()));
        }

        let accessor = Accessor::from_table(table)?;
        let body = expand::accessor(&accessor);

        sections.push(Section {
            record: accessor.record.clone(),
            mapper: accessor.mapper.clone(),
            body,
        });
    }

    Ok(Output::new(sections, config))
}

/// Generate the support module that generated accessors import `Scanner`
/// from.
pub fn support(config: &Config) -> Result<String> {
    out::render(&support::module(), config)
}

/// Parses a module path such as `crate::db::support`.
pub fn parse_path(src: &str) -> Result<syn::Path> {
    syn::parse_str(src).map_err(|source| Error::InvalidPath {
        path: src.to_string(),
        source,
    })
}
