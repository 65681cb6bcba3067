use crate::stmt::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// The statement was accepted; it produces no rows
    Ack,

    /// Rows returned by the statement, keyed by column name
    Values(Vec<Record>),
}

impl Response {
    pub fn ack() -> Self {
        Self { rows: Rows::Ack }
    }

    pub fn values(rows: impl Into<Vec<Record>>) -> Self {
        Self {
            rows: Rows::Values(rows.into()),
        }
    }

    pub fn empty() -> Self {
        Self::values(Vec::new())
    }

    /// The returned rows. An acknowledgement counts as no rows.
    pub fn into_values(self) -> Vec<Record> {
        match self.rows {
            Rows::Ack => Vec::new(),
            Rows::Values(rows) => rows,
        }
    }
}

impl Rows {
    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }
}
