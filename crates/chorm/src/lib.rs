pub mod db;
pub use db::Db;

mod engine;

mod fetched;
pub use fetched::Fetched;

pub use chorm_core::{
    bail_config,
    driver::{self, Driver},
    schema::{self, Engine, Field, FieldTy, Model, Relation, RelationKind, TableOptions},
    stmt::{self, Direction, Filter, Include, IncludeOptions, QueryOptions, Record, Value},
    Error, Result,
};
