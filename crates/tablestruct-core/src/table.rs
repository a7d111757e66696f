use crate::{ColumnMap, Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps one record type to one database table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMap {
    /// Name of the record type
    #[serde(rename = "struct")]
    pub record: String,

    /// Name of the table in the database
    pub table: String,

    /// Column mappings, in the order they appear in every generated statement
    #[serde(default)]
    pub columns: Vec<ColumnMap>,

    /// Whether the database generates new primary key values. `false` means
    /// the application supplies them.
    #[serde(default)]
    pub auto_pk: bool,
}

/// One entry of the value list of an `INSERT` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertValue {
    /// Let the database fill in the column
    Default,

    /// Bind the `$N` statement argument
    Placeholder(usize),
}

impl fmt::Display for InsertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertValue::Default => f.write_str("default"),
            InsertValue::Placeholder(n) => write!(f, "${n}"),
        }
    }
}

impl TableMap {
    pub fn new(record: impl Into<String>, table: impl Into<String>) -> TableMap {
        TableMap {
            record: record.into(),
            table: table.into(),
            columns: vec![],
            auto_pk: false,
        }
    }

    pub fn column(mut self, column: ColumnMap) -> Self {
        self.columns.push(column);
        self
    }

    pub fn auto_pk(mut self, auto_pk: bool) -> Self {
        self.auto_pk = auto_pk;
        self
    }

    /// Checks the invariants parsing leaves alone.
    pub fn validate(&self) -> Result<()> {
        if self.record.is_empty() {
            return Err(Error::invariant(&self.table, "record type name is empty"));
        }

        if self.table.is_empty() {
            return Err(Error::invariant(
                &self.table,
                format!("table name for `{}` is empty", self.record),
            ));
        }

        for (index, column) in self.columns.iter().enumerate() {
            if column.field.is_empty() {
                return Err(Error::invariant(
                    &self.table,
                    format!("column {index} has an empty field name"),
                ));
            }

            if column.column.is_empty() {
                return Err(Error::invariant(
                    &self.table,
                    format!("column {index} has an empty column name"),
                ));
            }
        }

        let pk_count = self.columns.iter().filter(|column| column.pk).count();

        if pk_count > 1 {
            return Err(Error::invariant(
                &self.table,
                format!("expected at most one primary key column, found {pk_count}"),
            ));
        }

        if self.auto_pk && pk_count == 0 {
            return Err(Error::invariant(
                &self.table,
                "auto_pk requires a primary key column",
            ));
        }

        Ok(())
    }

    /// Returns the primary key column, if the mapping declares one.
    pub fn primary_key(&self) -> Option<&ColumnMap> {
        self.columns.iter().find(|column| column.pk)
    }

    /// True when the primary key is assigned by the database on insert.
    pub fn has_generated_key(&self) -> bool {
        self.auto_pk && self.primary_key().is_some()
    }

    /// Column names in declared order, as selected by `SELECT`.
    pub fn select_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.column.as_str())
            .collect()
    }

    /// SQL for the column expressions of a `SELECT` statement.
    pub fn column_list(&self) -> String {
        self.select_columns().join(", ")
    }

    /// Record fields in declared order. Rows are loaded into these fields in
    /// the same order as [`select_columns`](Self::select_columns).
    pub fn fields(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.field.as_str())
            .collect()
    }

    /// `column = $N` pairs of an `UPDATE` statement.
    ///
    /// A primary key declared among the columns is assigned its own current
    /// value, which keeps columns and arguments positionally aligned.
    pub fn update_assignments(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{} = ${}", column.column, index + 1))
            .collect()
    }

    /// SQL for the column-placeholder pairs of an `UPDATE` statement.
    pub fn update_list(&self) -> String {
        self.update_assignments().join(", ")
    }

    /// Placeholder number of the `WHERE` clause of an `UPDATE` statement.
    pub fn update_key_placeholder(&self) -> usize {
        self.columns.len() + 1
    }

    /// Record fields bound to an `UPDATE` statement: every field, then the
    /// primary key field for the trailing placeholder.
    pub fn update_fields(&self) -> Vec<&str> {
        let mut fields = self.fields();

        if let Some(pk) = self.primary_key() {
            fields.push(&pk.field);
        }

        fields
    }

    /// Value expressions of an `INSERT` statement.
    ///
    /// A database-generated key is written as `default` and does not consume
    /// a placeholder number.
    pub fn insert_values(&self) -> Vec<InsertValue> {
        let mut next = 1;

        self.columns
            .iter()
            .map(|column| {
                if self.auto_pk && column.pk {
                    InsertValue::Default
                } else {
                    let value = InsertValue::Placeholder(next);
                    next += 1;
                    value
                }
            })
            .collect()
    }

    /// SQL for the value expressions of an `INSERT` statement.
    pub fn insert_list(&self) -> String {
        self.insert_values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Record fields bound to an `INSERT` statement, aligned with the
    /// placeholders of [`insert_values`](Self::insert_values).
    pub fn insert_fields(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| !(self.auto_pk && column.pk))
            .map(|column| column.field.as_str())
            .collect()
    }
}
