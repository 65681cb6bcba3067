use super::{update::mutation_filter, Predicate, Statement};

use chorm_core::{schema::Model, stmt::Filter, Result};

/// `ALTER TABLE <table> DELETE WHERE ..`
///
/// Related rows are left alone even when the relation declares
/// `cascade_delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
    pub table: String,
    pub filter: Vec<Predicate>,
}

impl Statement {
    pub fn delete(model: &Model, filter: &Filter) -> Result<Statement> {
        Ok(Delete {
            table: model.table_name().to_string(),
            filter: mutation_filter(model, filter, "delete")?,
        }
        .into())
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
