//! Rendering of values into SQL text.
//!
//! Every literal that reaches a statement goes through this module. How a
//! value is rendered depends on where it is going:
//!
//! * [`Context::Insert`] renders values spliced into SQL text that inserts
//!   or assigns them. UUID and DateTime columns are wrapped in their cast
//!   functions, strings are passed through with embedded quotes doubled but
//!   not quote-wrapped, and dates render as ISO-8601 text. The `JSONEachRow`
//!   bulk-insert payload is data, not SQL text, and does not use this
//!   context (see [`InsertRow`](crate::InsertRow)).
//! * [`Context::Filter`] produces literals spliced into a `WHERE` clause.
//!   UUID and DateTime columns, strings and dates are quote-wrapped; numbers
//!   and booleans are not.
//! * [`Context::Assignment`] produces the right-hand side of an
//!   `ALTER TABLE .. UPDATE` assignment: the insert-context casts for UUID
//!   and DateTime columns, filter-context literals for everything else.
//!
//! Quote-wrapped literals escape both `'` (doubled) and `\`.

use chorm_core::{schema::FieldTy, stmt::Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Insert,
    Filter,
    Assignment,
}

/// Renders `value`, bound to a column of type `ty`, for `cx`.
pub fn encode(value: &Value, ty: FieldTy, cx: Context) -> String {
    match cx {
        Context::Insert => encode_insert(value, ty),
        Context::Filter => encode_filter(value, ty),
        Context::Assignment => encode_assignment(value, ty),
    }
}

pub fn encode_insert(value: &Value, ty: FieldTy) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }

    match ty {
        FieldTy::Uuid => return format!("toUUID({})", quote(&value.to_text())),
        FieldTy::DateTime => return format!("toDateTime({})", quote(&value.to_text())),
        _ => {}
    }

    match value {
        Value::String(text) => text.replace('\'', "''"),
        value => value.to_text(),
    }
}

pub fn encode_filter(value: &Value, ty: FieldTy) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }

    if matches!(ty, FieldTy::Uuid | FieldTy::DateTime) {
        return quote(&value.to_text());
    }

    literal(value)
}

pub fn encode_assignment(value: &Value, ty: FieldTy) -> String {
    match ty {
        FieldTy::Uuid | FieldTy::DateTime if !value.is_null() => encode_insert(value, ty),
        _ => encode_filter(value, ty),
    }
}

/// Wraps `text` in single quotes, escaping quotes and backslashes.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            ch => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// SQL literal for a value independent of any column type.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(_) | Value::I64(_) | Value::U64(_) | Value::F64(_) => value.to_text(),
        Value::List(items) => {
            let items: Vec<_> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::String(_)
        | Value::Uuid(_)
        | Value::DateTime(_)
        | Value::Date(_)
        | Value::Record(_) => quote(&value.to_text()),
    }
}
