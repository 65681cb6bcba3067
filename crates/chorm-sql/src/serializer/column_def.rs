use super::{Formatter, ToSql};

use crate::{codec, stmt};

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name.as_str() " " self.ty.as_str());

        if let Some(comment) = &self.comment {
            fmt!(f, " COMMENT " codec::quote(comment).as_str());
        }
    }
}
