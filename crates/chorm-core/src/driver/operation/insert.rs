use super::Operation;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: String,

    /// Rows keyed by column name. Values are already encoded for insertion.
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,

    pub format: Format,
}

/// Input format of a bulk insert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One JSON object per line
    #[default]
    JsonEachRow,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::JsonEachRow => "JSONEachRow",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
