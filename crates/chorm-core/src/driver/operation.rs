mod insert;
pub use insert::{Format, Insert};

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Bulk-insert a batch of rows into a table
    Insert(Insert),

    /// Execute a SQL statement
    QuerySql(QuerySql),
}

impl Operation {
    pub fn as_query_sql(&self) -> Option<&QuerySql> {
        match self {
            Operation::QuerySql(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Operation::Insert(op) => Some(op),
            _ => None,
        }
    }

    pub fn is_query_sql(&self) -> bool {
        matches!(self, Operation::QuerySql(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Operation::Insert(_))
    }
}
