use super::Record;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use uuid::Uuid;

/// A value flowing to or from the store.
///
/// Values are untyped with respect to the model: how a value is rendered
/// into SQL is decided by the field type it is bound to, not by the variant.
/// A UUID read back from the store arrives as `String` and still renders as
/// a UUID literal when used to filter a UUID column.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// 128-bit universally unique identifier
    Uuid(Uuid),

    /// An instant in time, UTC
    DateTime(DateTime<Utc>),

    /// A civil date
    Date(NaiveDate),

    /// A list of values
    List(Vec<Value>),

    /// A nested record, used for attached relations
    Record(Record),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Text of the value as it appears inside a SQL literal or payload,
    /// before any quoting. Dates and instants use ISO-8601.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::String(v) => v.clone(),
            Self::Uuid(v) => v.hyphenated().to_string(),
            Self::DateTime(v) => v.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Date(v) => v.format("%Y-%m-%d").to_string(),
            Self::List(items) => {
                let items: Vec<_> = items.iter().map(Value::to_text).collect();
                format!("[{}]", items.join(","))
            }
            Self::Record(record) => serde_json::Value::from(record.clone()).to_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($src:ty),*) => {
        $(
            impl From<$src> for Value {
                fn from(value: $src) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(I64 as i64: i8, i16, i32, i64);
impl_from_int!(U64 as u64: u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F64(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

/// Rows come back from the store as JSON. Numbers keep their integer-ness;
/// everything the store renders as text (UUIDs, dates, 64-bit integers in
/// the default output settings) stays a `String`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(n) => {
                if let Some(v) = n.as_u64() {
                    Self::U64(v)
                } else if let Some(v) = n.as_i64() {
                    Self::I64(v)
                } else {
                    Self::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Self::Record(Record::from(map)),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Value::Null => Json::Null,
            Value::Bool(v) => Json::Bool(v),
            Value::I64(v) => Json::from(v),
            Value::U64(v) => Json::from(v),
            Value::F64(v) => serde_json::Number::from_f64(v)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Record(record) => Json::from(record),
            value => Json::String(value.to_text()),
        }
    }
}
