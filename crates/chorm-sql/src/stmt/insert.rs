use chorm_core::{
    driver::operation::{Format, Insert},
    schema::Model,
    stmt::{Record, Value},
    Error, Result,
};

/// A single row prepared for a bulk insert.
///
/// Keys that are not declared fields of the model are dropped. Declared
/// fields are keyed by column name. The row travels as `JSONEachRow`, which
/// the store parses as data, not SQL: values are sent bare and JSON escaping
/// is the only escaping applied. Numbers and booleans stay JSON scalars,
/// `Null` stays JSON `null`, lists become JSON arrays, and UUIDs, instants
/// and dates are sent as their ISO-8601 text for the store to parse into
/// the column type.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRow {
    pub table: String,
    pub row: serde_json::Map<String, serde_json::Value>,

    /// The declared subset of the input data, keyed by field name
    pub declared: Record,
}

impl InsertRow {
    pub fn new(model: &Model, data: &Record) -> Result<InsertRow> {
        if let Some(field) = model
            .fields
            .values()
            .find(|field| field.required && data.get(&field.name).map_or(true, Value::is_null))
        {
            return Err(Error::config(format!(
                "field `{}` is required on model `{}`",
                field.name, model.name
            )));
        }

        let mut row = serde_json::Map::new();
        let mut declared = Record::new();

        for (name, value) in data {
            let Some(field) = model.field(name) else {
                continue;
            };

            row.insert(field.column().to_string(), serde_json::Value::from(value.clone()));
            declared.insert(name.clone(), value.clone());
        }

        if row.is_empty() {
            return Err(Error::config(format!(
                "create of model `{}` has no declared fields",
                model.name
            )));
        }

        Ok(InsertRow {
            table: model.table_name().to_string(),
            row,
            declared,
        })
    }
}

impl From<InsertRow> for Insert {
    fn from(value: InsertRow) -> Self {
        Insert {
            table: value.table,
            rows: vec![value.row],
            format: Format::JsonEachRow,
        }
    }
}
