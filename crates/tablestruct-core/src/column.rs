use serde::{Deserialize, Serialize};

/// Maps one record field to one database column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Name of the record field
    pub field: String,

    /// Name of the column in the database
    pub column: String,

    /// Database type of the column. Informational only; generated code never
    /// casts based on it.
    #[serde(rename = "type", default)]
    pub ty: String,

    /// Whether or not the column is nullable
    #[serde(default)]
    pub null: bool,

    /// True if the column is the table's primary key
    #[serde(default)]
    pub pk: bool,
}

impl ColumnMap {
    pub fn new(field: impl Into<String>, column: impl Into<String>) -> ColumnMap {
        ColumnMap {
            field: field.into(),
            column: column.into(),
            ty: String::new(),
            null: false,
            pk: false,
        }
    }

    /// Sets the informational column type.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn nullable(mut self, null: bool) -> Self {
        self.null = null;
        self
    }

    /// Marks the column as the primary key.
    pub fn primary_key(mut self) -> Self {
        self.pk = true;
        self
    }
}
