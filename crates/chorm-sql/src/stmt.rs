mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::InsertRow;

mod predicate;
pub use predicate::Predicate;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

/// A statement that renders to SQL text.
///
/// Statements are built from a model descriptor. Building resolves every
/// field to its column and encodes every value, so an undeclared field or a
/// missing type parameter fails before any text exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Whether the statement produces rows.
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    pub fn table(&self) -> &str {
        match self {
            Statement::CreateTable(stmt) => &stmt.table,
            Statement::Delete(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }
}
