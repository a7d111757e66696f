#[macro_use]
mod fmt;
use fmt::{Placeholder, ToSql};

mod delim;
use delim::Comma;

mod statement;

use crate::stmt::Statement;

use tablestruct_core::TableMap;

/// Serialize a statement for one table to PostgreSQL text
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Mapping the statement is serialized against
    table: &'a TableMap,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    /// Serializer for PostgreSQL: `$N` placeholders, `default` value markers
    /// and `RETURNING` clauses.
    pub fn postgresql(table: &'a TableMap) -> Serializer<'a> {
        Serializer { table }
    }

    /// Serializes `stmt`.
    ///
    /// Returns `None` when the statement needs a primary key and the table
    /// mapping does not declare one.
    pub fn serialize(&self, stmt: &Statement<'_>) -> Option<String> {
        if stmt.requires_key() && self.table.primary_key().is_none() {
            return None;
        }

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        log::debug!("{} {}: {}", self.table.table, stmt.name(), ret);
        Some(ret)
    }

    fn table(&self) -> &'a TableMap {
        self.table
    }
}
