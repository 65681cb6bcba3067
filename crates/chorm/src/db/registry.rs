use chorm_core::{bail_config, schema::Model, Driver, Error, Result, Schema};

use indexmap::IndexMap;
use std::sync::Arc;

/// Model descriptors and the driver they are served through.
///
/// Models may be declared before the driver exists. Until [`bind`] is called
/// they are buffered in registration order; binding flushes them into the
/// schema in that same order.
///
/// [`bind`]: Registry::bind
#[derive(Debug)]
pub(crate) enum Registry {
    Unbound {
        pending: IndexMap<String, Arc<Model>>,
    },
    Bound {
        schema: Arc<Schema>,
        driver: Arc<dyn Driver>,
    },
}

/// A consistent view of a bound registry, detached from the lock. Later
/// registrations copy the schema instead of changing a view in use.
#[derive(Debug, Clone)]
pub(crate) struct Bound {
    pub(crate) schema: Arc<Schema>,
    pub(crate) driver: Arc<dyn Driver>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::Unbound {
            pending: IndexMap::new(),
        }
    }
}

impl Registry {
    /// Stores `model`, replacing any descriptor registered under the same
    /// name.
    pub(crate) fn register(&mut self, model: Arc<Model>) {
        let replaced = match self {
            Registry::Unbound { pending } => pending.insert(model.name.clone(), model.clone()),
            Registry::Bound { schema, .. } => Arc::make_mut(schema).register(model.clone()),
        };

        if replaced.is_some() {
            tracing::warn!(model = %model.name, "replacing registered model");
        }
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<Arc<Model>> {
        match self {
            Registry::Unbound { pending } => pending
                .get(name)
                .cloned()
                .ok_or_else(|| Error::model_not_found(name)),
            Registry::Bound { schema, .. } => schema.lookup(name).cloned(),
        }
    }

    pub(crate) fn bind(&mut self, driver: Arc<dyn Driver>) -> Result<()> {
        let Registry::Unbound { pending } = self else {
            bail_config!("registry is already bound to a driver");
        };

        let mut schema = Schema::new();
        for model in std::mem::take(pending).into_values() {
            schema.register(model);
        }

        tracing::debug!(models = schema.len(), "registry bound");

        *self = Registry::Bound {
            schema: Arc::new(schema),
            driver,
        };
        Ok(())
    }

    pub(crate) fn bound(&self) -> Result<Bound> {
        match self {
            Registry::Unbound { .. } => Err(Error::config(
                "registry is not bound to a driver; call `Db::bind` first",
            )),
            Registry::Bound { schema, driver } => Ok(Bound {
                schema: schema.clone(),
                driver: driver.clone(),
            }),
        }
    }

    pub(crate) fn is_bound(&self) -> bool {
        matches!(self, Registry::Bound { .. })
    }
}
