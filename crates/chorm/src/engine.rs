mod relation;

use crate::{db::registry::Bound, Fetched};

use chorm_core::{
    driver::{
        operation::{Insert, QuerySql},
        Response,
    },
    schema::Model,
    stmt::{Filter, OrderBy, QueryOptions, Record},
    Driver, Result, Schema,
};
use chorm_sql::{InsertRow, Serializer, Statement};

/// Runs facade operations against one consistent registry view.
///
/// Every operation is a sequence of driver round trips issued one after the
/// other. Nothing is rolled back: a failure part-way leaves the effects of
/// the round trips that already completed.
pub(crate) struct Engine<'a> {
    schema: &'a Schema,
    driver: &'a dyn Driver,
    serializer: Serializer,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(bound: &'a Bound) -> Engine<'a> {
        Engine {
            schema: &bound.schema,
            driver: &*bound.driver,
            serializer: Serializer::new(),
        }
    }

    pub(crate) fn model(&self, name: &str) -> Result<&'a Model> {
        Ok(&**self.schema.lookup(name)?)
    }

    /// Issues one `CREATE TABLE IF NOT EXISTS` per model, in registration
    /// order, stopping at the first failure.
    pub(crate) async fn push_schema(&self) -> Result<()> {
        for model in self.schema.models() {
            let stmt = Statement::create_table(model)?;

            self.exec(&stmt)
                .await
                .map_err(|err| err.context(format!("creating table for model `{}`", model.name)))?;
        }

        Ok(())
    }

    pub(crate) async fn create(&self, model: &Model, data: &Record) -> Result<Option<Record>> {
        let row = InsertRow::new(model, data)?;
        let filter = Filter::from(&row.declared);

        tracing::debug!(table = %row.table, "insert");
        self.driver.exec(Insert::from(row).into()).await?;

        let rows = self
            .select(model, &filter, &OrderBy::new(), Some(1), None)
            .await?;
        Ok(rows.into_iter().next())
    }

    pub(crate) async fn fetch(
        &self,
        model: &Model,
        filter: &Filter,
        options: &QueryOptions,
    ) -> Result<Fetched> {
        let mut rows = self
            .select(model, filter, &options.order_by, options.limit, options.offset)
            .await?;

        relation::include(self, model, &mut rows, &options.include).await?;

        if options.is_single() {
            Ok(Fetched::One(rows.into_iter().next()))
        } else {
            Ok(Fetched::Many(rows))
        }
    }

    /// Applies the update, then re-reads the first row matching `filter`.
    pub(crate) async fn update(
        &self,
        model: &Model,
        filter: &Filter,
        data: &Record,
    ) -> Result<Option<Record>> {
        let stmt = Statement::update(model, filter, data)?;
        self.exec(&stmt).await?;

        let rows = self
            .select(model, filter, &OrderBy::new(), Some(1), None)
            .await?;
        Ok(rows.into_iter().next())
    }

    pub(crate) async fn delete(&self, model: &Model, filter: &Filter) -> Result<()> {
        let stmt = Statement::delete(model, filter)?;
        self.exec(&stmt).await?;
        Ok(())
    }

    /// Selects rows of `model`, keyed by field name.
    pub(crate) async fn select(
        &self,
        model: &Model,
        filter: &Filter,
        order_by: &OrderBy,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<Record>> {
        let stmt = Statement::select(model, filter, order_by, limit, offset)?;
        let rows = self.exec(&stmt).await?.into_values();

        Ok(rows.into_iter().map(|row| to_fields(model, row)).collect())
    }

    async fn exec(&self, stmt: &Statement) -> Result<Response> {
        let sql = self.serializer.serialize(stmt);

        tracing::debug!(table = stmt.table(), sql = %sql, "exec");

        let op = if stmt.is_query() {
            QuerySql::query(sql)
        } else {
            QuerySql::command(sql)
        };

        self.driver.exec(op.into()).await
    }
}

/// Rows come back keyed by column. Columns backing a declared field are
/// renamed to the field; anything else is kept under its column name.
fn to_fields(model: &Model, row: Record) -> Record {
    row.into_iter()
        .map(|(column, value)| match model.field_for_column(&column) {
            Some(field) => (field.name.clone(), value),
            None => (column, value),
        })
        .collect()
}
