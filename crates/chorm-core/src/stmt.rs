mod direction;
pub use direction::Direction;

mod filter;
pub use filter::Filter;

mod options;
pub use options::{Include, IncludeOptions, OrderBy, QueryOptions};

mod record;
pub use record::Record;

mod value;
pub use value::Value;
