use crate::codec;

use chorm_core::{schema::Model, stmt::Filter, Result};

/// One `column = literal` (or `column IS NULL`) term of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,

    /// Filter-encoded literal; `None` for a null comparison
    pub literal: Option<String>,
}

impl Predicate {
    /// Resolves and encodes every entry of `filter`, in the filter's order.
    pub fn from_filter(model: &Model, filter: &Filter) -> Result<Vec<Predicate>> {
        filter
            .iter()
            .map(|(name, value)| {
                let field = model.resolve_field(name)?;

                Ok(Predicate {
                    column: field.column().to_string(),
                    literal: (!value.is_null()).then(|| codec::encode_filter(value, field.ty)),
                })
            })
            .collect()
    }
}
