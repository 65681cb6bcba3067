mod field;
pub use field::{Field, FieldTy};

mod model;
pub use model::{Model, ModelBuilder};

mod relation;
pub use relation::{Relation, RelationKind};

mod table;
pub use table::{Engine, SettingValue, TableOptions};

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Model descriptors keyed by name, in registration order.
///
/// Registration order is what DDL generation walks, so it is kept stable:
/// replacing a descriptor keeps the slot of the original registration.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    models: IndexMap<String, Arc<Model>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `model` under its name, returning the descriptor it replaced.
    pub fn register(&mut self, model: impl Into<Arc<Model>>) -> Option<Arc<Model>> {
        let model = model.into();
        self.models.insert(model.name.clone(), model)
    }

    pub fn lookup(&self, name: &str) -> Result<&Arc<Model>> {
        self.models
            .get(name)
            .ok_or_else(|| Error::model_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Descriptors in registration order.
    pub fn models(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
