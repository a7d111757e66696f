use crate::{Result, TableMap};

use serde::{Deserialize, Serialize};
use std::io::Read;

/// An ordered set of table mappings, as parsed from one description document.
///
/// The order of the entries decides the order in which accessor types are
/// emitted and has no other meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingSet {
    tables: Vec<TableMap>,
}

impl MappingSet {
    pub fn new(tables: Vec<TableMap>) -> MappingSet {
        MappingSet { tables }
    }

    /// Parses a JSON description document.
    ///
    /// Only the shape of the document is checked here. Cross-field
    /// invariants are checked by [`TableMap::validate`] when a mapping is
    /// used.
    pub fn from_json(src: &str) -> Result<MappingSet> {
        let set: MappingSet = serde_json::from_str(src)?;
        log::debug!("parsed {} table mapping(s)", set.len());
        Ok(set)
    }

    pub fn from_reader(reader: impl Read) -> Result<MappingSet> {
        let set: MappingSet = serde_json::from_reader(reader)?;
        log::debug!("parsed {} table mapping(s)", set.len());
        Ok(set)
    }

    /// Serializes the set back into the description format.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tables(&self) -> &[TableMap] {
        &self.tables
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableMap> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a TableMap;
    type IntoIter = std::slice::Iter<'a, TableMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
