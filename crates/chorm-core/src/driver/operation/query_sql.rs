use super::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySql {
    /// The SQL statement to execute
    pub sql: String,

    /// Whether the statement produces rows. Drivers use this to pick a
    /// response format; DDL and mutations produce none.
    pub returning: bool,
}

impl QuerySql {
    /// A statement that returns rows.
    pub fn query(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            returning: true,
        }
    }

    /// A statement that returns nothing.
    pub fn command(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            returning: false,
        }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
