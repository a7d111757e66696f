use crate::{util, Error, Result};

use tablestruct_core::{ColumnMap, TableMap};
use tablestruct_sql::{Serializer, Statement};

/// Everything needed to render the accessor of one table mapping.
///
/// Built entirely from the mapping model's derivations, so the renderer only
/// places values and never computes SQL or orderings itself.
#[derive(Debug)]
pub(crate) struct Accessor {
    /// Record type identifier
    pub(crate) record: syn::Ident,

    /// Accessor type identifier, `<Record>Mapper`
    pub(crate) mapper: syn::Ident,

    /// Table name, used in doc comments
    pub(crate) table: String,

    /// Record fields in selection order. Result columns are loaded into these
    /// fields by position.
    pub(crate) load_fields: Vec<syn::Ident>,

    /// Record fields bound to the `Insert` statement
    pub(crate) insert_fields: Vec<syn::Ident>,

    /// Record fields bound to the `Update` statement, key field last
    pub(crate) update_fields: Vec<syn::Ident>,

    /// Primary key, if the mapping declares one
    pub(crate) key: Option<Key>,

    /// Statements prepared by the constructor, in registry order
    pub(crate) prepared: Vec<PreparedSql>,

    /// Unprepared selection the filter methods append their fragment to
    pub(crate) select_sql: String,

    /// Column summary lines for the accessor's doc comment
    pub(crate) column_docs: Vec<String>,
}

#[derive(Debug)]
pub(crate) struct Key {
    /// Record field holding the key
    pub(crate) field: syn::Ident,

    /// True if the database assigns the key on insert
    pub(crate) generated: bool,
}

#[derive(Debug)]
pub(crate) struct PreparedSql {
    /// Registry name, e.g. `Get`
    pub(crate) name: &'static str,

    pub(crate) sql: String,
}

impl Accessor {
    pub(crate) fn from_table(table: &TableMap) -> Result<Accessor> {
        table.validate()?;

        let record = ident(table, &table.record)?;
        let mapper = quote::format_ident!("{}Mapper", record);

        let field_idents = |fields: Vec<&str>| -> Result<Vec<syn::Ident>> {
            fields.into_iter().map(|field| ident(table, field)).collect()
        };

        let key = table
            .primary_key()
            .map(|pk| -> Result<Key> {
                Ok(Key {
                    field: ident(table, &pk.field)?,
                    generated: table.has_generated_key(),
                })
            })
            .transpose()?;

        let serializer = Serializer::postgresql(table);

        let prepared = Statement::FIXED
            .iter()
            .filter_map(|stmt| {
                serializer.serialize(stmt).map(|sql| PreparedSql {
                    name: stmt.name(),
                    sql,
                })
            })
            .collect();

        // `All` never needs a key
        let select_sql = serializer.serialize(&Statement::All).unwrap_or_default();

        Ok(Accessor {
            record,
            mapper,
            table: table.table.clone(),
            load_fields: field_idents(table.fields())?,
            insert_fields: field_idents(table.insert_fields())?,
            update_fields: field_idents(table.update_fields())?,
            key,
            prepared,
            select_sql,
            column_docs: table.columns.iter().map(column_doc).collect(),
        })
    }

    /// Looks up the SQL of a prepared statement.
    #[cfg(test)]
    pub(crate) fn sql(&self, name: &str) -> Option<&str> {
        self.prepared
            .iter()
            .find(|prepared| prepared.name == name)
            .map(|prepared| prepared.sql.as_str())
    }
}

fn ident(table: &TableMap, name: &str) -> Result<syn::Ident> {
    util::ident(name).ok_or_else(|| Error::InvalidIdentifier {
        table: table.table.clone(),
        name: name.to_string(),
    })
}

fn column_doc(column: &ColumnMap) -> String {
    let mut doc = format!(" - `{}`: column `{}`", column.field, column.column);

    if !column.ty.is_empty() {
        doc.push_str(&format!(" ({})", column.ty));
    }

    if column.pk {
        doc.push_str(", primary key");
    }

    if column.null {
        doc.push_str(", nullable");
    }

    doc
}
