use super::{Record, Value};

use indexmap::IndexMap;

/// An equality-conjunction predicate: every entry must match.
///
/// Entries keep insertion order, which is the order the predicates appear in
/// the rendered `WHERE` clause.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    entries: IndexMap<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `field = value`. A second call for the same field replaces the
    /// value and keeps the original position.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns a filter with `self`'s entries followed by the entries of
    /// `other` whose field is not already constrained by `self`.
    pub fn merge(&self, other: &Filter) -> Filter {
        let mut merged = self.clone();
        for (field, value) in other.iter() {
            if !merged.contains(field) {
                merged.insert(field, value.clone());
            }
        }
        merged
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filter {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Filter {
            entries: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

/// Any record can be used as a filter; this is how `create` re-reads the row
/// it just inserted.
impl From<Record> for Filter {
    fn from(record: Record) -> Self {
        record.into_iter().collect()
    }
}

impl From<&Record> for Filter {
    fn from(record: &Record) -> Self {
        record
            .iter()
            .map(|(name, value)| (name, value.clone()))
            .collect()
    }
}
