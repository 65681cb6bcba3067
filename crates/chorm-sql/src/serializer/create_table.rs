use super::{Comma, Formatter, ToSql};

use crate::{codec, stmt};

use chorm_core::schema::SettingValue;

/// Wraps a key list in parentheses. A single partition expression is
/// emitted bare; ordering and primary keys are always a tuple.
struct Tuple<'a>(&'a [String]);

struct Setting<'a>(&'a str, &'a SettingValue);

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);

        fmt!(
            f, "CREATE TABLE IF NOT EXISTS " self.table.as_str() " (" columns ") ENGINE = " self.engine.as_str()
        );

        match &self.partition_by[..] {
            [] => {}
            [expr] => fmt!(f, " PARTITION BY " expr),
            exprs => fmt!(f, " PARTITION BY " Tuple(exprs)),
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Tuple(&self.order_by));
        }

        if !self.primary_key.is_empty() {
            fmt!(f, " PRIMARY KEY " Tuple(&self.primary_key));
        }

        if let Some(sample_by) = &self.sample_by {
            fmt!(f, " SAMPLE BY " sample_by);
        }

        if !self.settings.is_empty() {
            let settings = Comma(
                self.settings
                    .iter()
                    .map(|(name, value)| Setting(name, value)),
            );
            fmt!(f, " SETTINGS " settings);
        }

        if let Some(comment) = &self.comment {
            fmt!(f, " COMMENT " codec::quote(comment).as_str());
        }
    }
}

impl ToSql for Tuple<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "(" Comma(self.0) ")");
    }
}

impl ToSql for Setting<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = ");

        match self.1 {
            SettingValue::Bool(value) => fmt!(f, if *value { "1" } else { "0" }),
            SettingValue::Int(value) => fmt!(f, value.to_string().as_str()),
            SettingValue::String(value) => fmt!(f, codec::quote(value).as_str()),
        }
    }
}
