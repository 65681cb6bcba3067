mod ty;
pub use ty::FieldTy;

use crate::{Error, Result};

/// A declared model field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name, as used in filters and records. Set when the field is
    /// added to a model.
    pub name: String,

    pub ty: FieldTy,

    /// `create` rejects data that omits a required field
    pub required: bool,

    /// Column is declared `Nullable(..)`
    pub nullable: bool,

    /// `Decimal` precision, `FixedString` length, `DateTime64` tick precision
    pub precision: Option<u32>,

    /// `Decimal` scale
    pub scale: Option<u32>,

    /// `Array` element type
    pub item_ty: Option<FieldTy>,

    /// Column name, when it differs from the field name
    pub column_name: Option<String>,

    pub comment: Option<String>,
}

impl Field {
    pub fn new(ty: FieldTy) -> Field {
        Field {
            name: String::new(),
            ty,
            required: false,
            nullable: false,
            precision: None,
            scale: None,
            item_ty: None,
            column_name: None,
            comment: None,
        }
    }

    pub fn decimal(precision: u32, scale: u32) -> Field {
        Field::new(FieldTy::Decimal).precision(precision).scale(scale)
    }

    pub fn fixed_string(len: u32) -> Field {
        Field::new(FieldTy::FixedString).precision(len)
    }

    pub fn array(item_ty: FieldTy) -> Field {
        Field::new(FieldTy::Array).item_ty(item_ty)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn item_ty(mut self, item_ty: FieldTy) -> Self {
        self.item_ty = Some(item_ty);
        self
    }

    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Name of the backing column.
    pub fn column(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }

    /// Maps the field to its ClickHouse column type.
    ///
    /// Parametric families need their parameters: `Decimal` needs precision
    /// and scale, `FixedString` needs a length (`precision`), `Array` needs a
    /// non-parametric item type. Parameters are not range-checked; the store
    /// rejects out-of-range values when the table is created.
    pub fn column_type(&self) -> Result<String> {
        let base = match self.ty {
            FieldTy::Array => {
                let Some(item_ty) = self.item_ty else {
                    return Err(self.missing("an item type"));
                };

                if item_ty.requires_parameters() {
                    return Err(Error::config(format!(
                        "field `{}`: array item type {} requires parameters, which item types cannot carry",
                        self.name, item_ty
                    )));
                }

                format!("Array({item_ty})")
            }
            FieldTy::Decimal => match (self.precision, self.scale) {
                (Some(precision), Some(scale)) => format!("Decimal({precision}, {scale})"),
                _ => return Err(self.missing("precision and scale")),
            },
            FieldTy::FixedString => match self.precision {
                Some(len) => format!("FixedString({len})"),
                None => return Err(self.missing("a length (precision)")),
            },
            FieldTy::DateTime64 => match self.precision {
                Some(precision) => format!("DateTime64({precision})"),
                None => "DateTime64".to_string(),
            },
            ty => ty.name().to_string(),
        };

        if self.nullable {
            Ok(format!("Nullable({base})"))
        } else {
            Ok(base)
        }
    }

    /// Checks that parameters are only present on the families that use
    /// them and that the column type can be rendered.
    pub(crate) fn verify(&self) -> Result<()> {
        if self.precision.is_some() && !self.ty.accepts_precision() {
            return Err(self.unexpected("precision"));
        }

        if self.scale.is_some() && !self.ty.accepts_scale() {
            return Err(self.unexpected("scale"));
        }

        if self.item_ty.is_some() && self.ty != FieldTy::Array {
            return Err(self.unexpected("an item type"));
        }

        if self.nullable && self.ty == FieldTy::Array {
            return Err(Error::config(format!(
                "field `{}`: Array columns cannot be Nullable",
                self.name
            )));
        }

        self.column_type().map(|_| ())
    }

    fn missing(&self, what: &str) -> Error {
        Error::config(format!(
            "field `{}` of type {} requires {}",
            self.name, self.ty, what
        ))
    }

    fn unexpected(&self, what: &str) -> Error {
        Error::config(format!(
            "field `{}` of type {} does not take {}",
            self.name, self.ty, what
        ))
    }
}
