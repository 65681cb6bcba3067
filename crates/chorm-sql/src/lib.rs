pub mod codec;
pub use codec::Context;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::{InsertRow, Statement};
