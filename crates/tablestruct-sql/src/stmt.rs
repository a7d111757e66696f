/// A statement an accessor can run against its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// Load one row by primary key
    Get,

    /// Overwrite every column of the row with the record's primary key
    Update,

    /// Insert one record
    Insert,

    /// Delete one row by primary key
    Delete,

    /// Load every row
    All,

    /// Load the rows matching a raw SQL boolean expression. The expression is
    /// not escaped or bound.
    FindWhere(&'a str),
}

impl Statement<'_> {
    /// Statements prepared eagerly by every accessor, in registry order.
    pub const FIXED: [Statement<'static>; 5] = [
        Statement::Get,
        Statement::Update,
        Statement::Insert,
        Statement::Delete,
        Statement::All,
    ];

    /// Name the statement is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Get => "Get",
            Statement::Update => "Update",
            Statement::Insert => "Insert",
            Statement::Delete => "Delete",
            Statement::All => "All",
            Statement::FindWhere(_) => "FindWhere",
        }
    }

    /// True if the statement locates its row through the primary key.
    pub fn requires_key(&self) -> bool {
        matches!(
            self,
            Statement::Get | Statement::Update | Statement::Delete
        )
    }
}
