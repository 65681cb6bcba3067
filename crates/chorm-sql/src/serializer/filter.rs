use super::{Delimited, Formatter, ToSql};

use crate::stmt::Predicate;

/// ` WHERE a = 1 AND b IS NULL`, or nothing for an empty filter.
pub(super) struct Where<'a>(pub(super) &'a [Predicate]);

impl ToSql for &Predicate {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.literal {
            Some(literal) => fmt!(f, self.column.as_str() " = " literal),
            None => fmt!(f, self.column.as_str() " IS NULL"),
        }
    }
}

impl ToSql for Where<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " Delimited(self.0, " AND "));
        }
    }
}
