use chorm_core::stmt::{Record, Value};

/// Result of [`Db::fetch`](crate::Db::fetch).
///
/// A fetch with `limit == Some(1)` yields a single record or nothing, never a
/// one-element list.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    One(Option<Record>),
    Many(Vec<Record>),
}

impl Fetched {
    pub fn is_one(&self) -> bool {
        matches!(self, Fetched::One(_))
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Fetched::Many(_))
    }

    /// The single record, or the first of many.
    pub fn into_one(self) -> Option<Record> {
        match self {
            Fetched::One(record) => record,
            Fetched::Many(records) => records.into_iter().next(),
        }
    }

    pub fn into_many(self) -> Vec<Record> {
        match self {
            Fetched::One(record) => record.into_iter().collect(),
            Fetched::Many(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Fetched::One(record) => usize::from(record.is_some()),
            Fetched::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `One(None)` becomes `Null`, `One(Some(..))` a record and `Many` a list of
/// records; the shape relations are attached in.
impl From<Fetched> for Value {
    fn from(value: Fetched) -> Self {
        match value {
            Fetched::One(record) => record.map(Value::Record).unwrap_or_default(),
            Fetched::Many(records) => Value::List(records.into_iter().map(Value::Record).collect()),
        }
    }
}
