use std::fmt;

/// Semantic type of a model field.
///
/// Each variant corresponds to a ClickHouse column type family. Parameters
/// for the parametric families (`Decimal`, `FixedString`, `DateTime64`,
/// `Array`) live on [`Field`](super::Field), not on the variant, so a field's
/// kind can be inspected without caring about its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTy {
    // Numeric types
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt256,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Int256,
    Float32,
    Float64,
    Decimal,

    // String types
    String,
    FixedString,

    // Date and time types
    Date,
    Date32,
    DateTime,
    DateTime64,

    Array,

    Uuid,
    Enum8,
    Enum16,
    Bool,
}

impl FieldTy {
    /// The type family name as ClickHouse spells it.
    pub fn name(self) -> &'static str {
        use FieldTy::*;

        match self {
            UInt8 => "UInt8",
            UInt16 => "UInt16",
            UInt32 => "UInt32",
            UInt64 => "UInt64",
            UInt256 => "UInt256",
            Int8 => "Int8",
            Int16 => "Int16",
            Int32 => "Int32",
            Int64 => "Int64",
            Int128 => "Int128",
            Int256 => "Int256",
            Float32 => "Float32",
            Float64 => "Float64",
            Decimal => "Decimal",
            String => "String",
            FixedString => "FixedString",
            Date => "Date",
            Date32 => "Date32",
            DateTime => "DateTime",
            DateTime64 => "DateTime64",
            Array => "Array",
            Uuid => "UUID",
            Enum8 => "Enum8",
            Enum16 => "Enum16",
            Bool => "Bool",
        }
    }

    /// Families that cannot be rendered without parameters.
    pub fn requires_parameters(self) -> bool {
        matches!(self, FieldTy::Decimal | FieldTy::FixedString | FieldTy::Array)
    }

    /// Families that accept a `precision` parameter.
    pub fn accepts_precision(self) -> bool {
        matches!(
            self,
            FieldTy::Decimal | FieldTy::FixedString | FieldTy::DateTime64
        )
    }

    pub fn accepts_scale(self) -> bool {
        matches!(self, FieldTy::Decimal)
    }

    pub fn is_string(self) -> bool {
        matches!(self, FieldTy::String | FieldTy::FixedString)
    }

    pub fn is_date(self) -> bool {
        matches!(
            self,
            FieldTy::Date | FieldTy::Date32 | FieldTy::DateTime | FieldTy::DateTime64
        )
    }
}

impl fmt::Display for FieldTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
