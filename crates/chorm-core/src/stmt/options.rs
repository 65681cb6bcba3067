use super::{Direction, Filter};

use indexmap::IndexMap;

/// Ordered field → direction mapping. Insertion order is the sort priority.
pub type OrderBy = IndexMap<String, Direction>;

/// Options for `fetch`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryOptions {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: OrderBy,

    /// Relations to resolve and attach, keyed by relation name
    pub include: IndexMap<String, Include>,
}

/// How a single relation is included.
#[derive(Debug, Clone, PartialEq)]
pub enum Include {
    /// Attach every related row
    All,

    /// Attach related rows narrowed by the given options
    With(IncludeOptions),
}

/// Per-relation overrides for an include.
///
/// There is no nested `include` here: related rows are resolved
/// one level deep.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IncludeOptions {
    pub filter: Filter,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: OrderBy,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by.insert(field.into(), direction);
        self
    }

    pub fn include(mut self, relation: impl Into<String>, include: impl Into<Include>) -> Self {
        self.include.insert(relation.into(), include.into());
        self
    }

    /// True when the caller asked for a single record.
    pub fn is_single(&self) -> bool {
        self.limit == Some(1)
    }
}

impl Include {
    pub fn options(&self) -> Option<&IncludeOptions> {
        match self {
            Include::All => None,
            Include::With(options) => Some(options),
        }
    }
}

impl From<IncludeOptions> for Include {
    fn from(options: IncludeOptions) -> Self {
        Include::With(options)
    }
}

impl IncludeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by.insert(field.into(), direction);
        self
    }
}
