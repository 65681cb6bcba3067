use super::{ColumnDef, Statement};

use chorm_core::{
    schema::{Model, SettingValue},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Name of the table
    pub table: String,

    /// Column definitions, in field declaration order
    pub columns: Vec<ColumnDef>,

    /// Rendered engine clause, e.g. `MergeTree()`
    pub engine: String,

    pub partition_by: Vec<String>,
    pub order_by: Vec<String>,
    pub primary_key: Vec<String>,
    pub sample_by: Option<String>,
    pub settings: Vec<(String, SettingValue)>,
    pub comment: Option<String>,
}

impl Statement {
    /// `CREATE TABLE IF NOT EXISTS` for `model`. Fails when any field type
    /// cannot be rendered.
    pub fn create_table(model: &Model) -> Result<Statement> {
        let columns = model
            .fields
            .values()
            .map(ColumnDef::from_field)
            .collect::<Result<_>>()?;

        let table = &model.table;

        Ok(CreateTable {
            table: model.table_name().to_string(),
            columns,
            engine: table.engine.to_string(),
            partition_by: table.partition_by.clone(),
            order_by: table.order_by.clone(),
            primary_key: table.primary_key.clone(),
            sample_by: table.sample_by.clone(),
            settings: table
                .settings
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            comment: table.comment.clone(),
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
