use super::{filter::Where, Comma, Formatter, ToSql};

use crate::stmt::{self, Statement};

use chorm_core::stmt::Direction;

struct OrderBy<'a>(&'a str, Direction);

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SELECT * FROM " self.table.as_str() Where(&self.filter));

        if !self.order_by.is_empty() {
            let order_by = Comma(
                self.order_by
                    .iter()
                    .map(|(column, direction)| OrderBy(column, *direction)),
            );
            fmt!(f, " ORDER BY " order_by);
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }

        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET " offset);
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );

        fmt!(f, "ALTER TABLE " self.table.as_str() " UPDATE " assignments Where(&self.filter));
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ALTER TABLE " self.table.as_str() " DELETE" Where(&self.filter));
    }
}

struct Assignment<'a>(&'a str, &'a str);

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = " self.1);
    }
}

impl ToSql for OrderBy<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " " self.1.as_sql());
    }
}
