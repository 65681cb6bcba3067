use super::{Predicate, Statement};

use chorm_core::{
    schema::Model,
    stmt::{Direction, Filter, OrderBy},
    Result,
};

/// `SELECT * FROM <table> [WHERE ..] [ORDER BY ..] [LIMIT n] [OFFSET n]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub table: String,
    pub filter: Vec<Predicate>,
    pub order_by: Vec<(String, Direction)>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Statement {
    pub fn select(
        model: &Model,
        filter: &Filter,
        order_by: &OrderBy,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Statement> {
        let order_by = order_by
            .iter()
            .map(|(name, direction)| {
                let field = model.resolve_field(name)?;
                Ok((field.column().to_string(), *direction))
            })
            .collect::<Result<_>>()?;

        Ok(Select {
            table: model.table_name().to_string(),
            filter: Predicate::from_filter(model, filter)?,
            order_by,
            limit,
            offset,
        }
        .into())
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
