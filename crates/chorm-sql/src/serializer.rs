#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

// Fragment serializers
mod column_def;
mod create_table;
mod filter;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
///
/// Statements render on a single line without a trailing semicolon; the HTTP
/// interface accepts one statement per request and appends its own `FORMAT`
/// clause to queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer {}
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret
    }
}
