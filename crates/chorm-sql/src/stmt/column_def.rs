use chorm_core::{schema::Field, Result};

/// One column of a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,

    /// Fully rendered column type, e.g. `Nullable(String)`
    pub ty: String,

    pub comment: Option<String>,
}

impl ColumnDef {
    pub(crate) fn from_field(field: &Field) -> Result<ColumnDef> {
        Ok(ColumnDef {
            name: field.column().to_string(),
            ty: field.column_type()?,
            comment: field.comment.clone(),
        })
    }
}
