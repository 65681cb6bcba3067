use super::{Predicate, Statement};
use crate::codec;

use chorm_core::{
    schema::Model,
    stmt::{Filter, Record},
    Error, Result,
};

/// `ALTER TABLE <table> UPDATE <col> = <value>, .. WHERE ..`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub table: String,

    /// Column and assignment-encoded value
    pub assignments: Vec<(String, String)>,

    pub filter: Vec<Predicate>,
}

impl Statement {
    pub fn update(model: &Model, filter: &Filter, data: &Record) -> Result<Statement> {
        if data.is_empty() {
            return Err(Error::config(format!(
                "update of model `{}` has no assignments",
                model.name
            )));
        }

        let assignments = data
            .iter()
            .map(|(name, value)| {
                let field = model.resolve_field(name)?;
                Ok((
                    field.column().to_string(),
                    codec::encode_assignment(value, field.ty),
                ))
            })
            .collect::<Result<_>>()?;

        Ok(Update {
            table: model.table_name().to_string(),
            assignments,
            filter: mutation_filter(model, filter, "update")?,
        }
        .into())
    }
}

/// Mutations always carry a `WHERE` clause; an empty filter would otherwise
/// render as `WHERE` followed by nothing.
pub(super) fn mutation_filter(model: &Model, filter: &Filter, op: &str) -> Result<Vec<Predicate>> {
    if filter.is_empty() {
        return Err(Error::config(format!(
            "{op} of model `{}` requires a non-empty filter",
            model.name
        )));
    }

    Predicate::from_filter(model, filter)
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
