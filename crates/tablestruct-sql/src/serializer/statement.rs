use super::{Comma, Formatter, Placeholder, ToSql};

use crate::stmt::Statement;

use tablestruct_core::ColumnMap;

/// Column expressions of a `SELECT`, followed by its `FROM` clause.
struct Select;

impl ToSql for Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = f.serializer.table();
        let columns = Comma(table.select_columns());
        let name = &table.table;

        fmt!(f, "SELECT " columns " FROM " name);
    }
}

/// `WHERE <pk> = $N`
struct WherePrimaryKey<'a>(&'a ColumnMap, usize);

impl ToSql for WherePrimaryKey<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.0.column;
        let placeholder = Placeholder(self.1);

        fmt!(f, " WHERE " column " = " placeholder);
    }
}

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = f.serializer.table();
        let name = &table.table;
        let pk = table.primary_key();

        match (self, pk) {
            (Statement::Get, Some(pk)) => {
                let key = WherePrimaryKey(pk, 1);
                fmt!(f, Select key);
            }
            (Statement::Update, Some(pk)) => {
                let assignments = Comma(table.update_assignments());
                let key = WherePrimaryKey(pk, table.update_key_placeholder());

                fmt!(f, "UPDATE " name " SET " assignments key);
            }
            (Statement::Insert, _) => {
                let columns = Comma(table.select_columns());
                let values = Comma(table.insert_values());

                fmt!(f, "INSERT INTO " name " (" columns ") VALUES (" values ")");

                if let Some(pk) = pk {
                    let returning = &pk.column;
                    fmt!(f, " RETURNING " returning);
                }
            }
            (Statement::Delete, Some(pk)) => {
                let key = WherePrimaryKey(pk, 1);
                fmt!(f, "DELETE FROM " name key);
            }
            (Statement::All, _) => {
                fmt!(f, Select);
            }
            (Statement::FindWhere(filter), _) => {
                let filter: &str = filter;
                fmt!(f, Select " WHERE " filter);
            }
            (Statement::Get | Statement::Update | Statement::Delete, None) => {
                unreachable!("keyed statement serialized without a primary key")
            }
        }
    }
}
