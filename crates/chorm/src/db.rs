pub(crate) mod registry;
use registry::{Bound, Registry};

use crate::{engine::Engine, Fetched};

use chorm_core::{
    schema::Model,
    stmt::{Filter, QueryOptions, Record},
    Driver, Result,
};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A database handle.
///
/// `Db` is a cheap handle: clones share the same registry and driver. Models
/// can be registered before a driver is bound; every operation that reaches
/// the store requires a bound driver and fails with a configuration error
/// otherwise.
///
/// ```ignore
/// let db = Db::new();
/// db.register(user_model);
/// db.bind(driver)?;
/// db.push_schema().await?;
///
/// let user = db
///     .fetch("User", &Filter::new().eq("name", "Ann"), &QueryOptions::new().limit(1))
///     .await?
///     .into_one();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Db {
    registry: Arc<RwLock<Registry>>,
}

impl Db {
    /// An unbound handle. Register models, then [`bind`](Db::bind) a driver.
    pub fn new() -> Db {
        Db::default()
    }

    /// A handle bound to `driver`.
    pub fn with_driver(driver: impl Driver) -> Db {
        Db {
            registry: Arc::new(RwLock::new(Registry::Bound {
                schema: Default::default(),
                driver: Arc::new(driver),
            })),
        }
    }

    /// Registers a model descriptor. A descriptor with the same name is
    /// replaced and keeps its registration slot.
    pub fn register(&self, model: impl Into<Arc<Model>>) -> &Self {
        self.write().register(model.into());
        self
    }

    /// Binds the driver and flushes models registered so far. Binding a
    /// second time is a configuration error.
    pub fn bind(&self, driver: impl Driver) -> Result<()> {
        self.write().bind(Arc::new(driver))
    }

    pub fn is_bound(&self) -> bool {
        self.read().is_bound()
    }

    /// Looks up a registered model by name.
    pub fn model(&self, name: &str) -> Result<Arc<Model>> {
        self.read().lookup(name)
    }

    /// Creates a table for every registered model.
    pub async fn push_schema(&self) -> Result<()> {
        let bound = self.bound()?;
        Engine::new(&bound).push_schema().await
    }

    /// Inserts one row and returns it as read back from the store.
    ///
    /// Keys of `data` that are not declared fields are ignored. The re-read
    /// filters on the declared keys, so `data` should identify the row.
    pub async fn create(&self, model: &str, data: &Record) -> Result<Option<Record>> {
        let bound = self.bound()?;
        let engine = Engine::new(&bound);
        engine.create(engine.model(model)?, data).await
    }

    /// Selects rows matching `filter` and attaches the requested relations.
    ///
    /// With `limit == Some(1)` the result is [`Fetched::One`]; otherwise it
    /// is [`Fetched::Many`].
    pub async fn fetch(
        &self,
        model: &str,
        filter: &Filter,
        options: &QueryOptions,
    ) -> Result<Fetched> {
        let bound = self.bound()?;
        let engine = Engine::new(&bound);
        engine.fetch(engine.model(model)?, filter, options).await
    }

    /// Updates rows matching `filter` and returns the first row that still
    /// matches it afterwards.
    pub async fn update(&self, model: &str, filter: &Filter, data: &Record) -> Result<Option<Record>> {
        let bound = self.bound()?;
        let engine = Engine::new(&bound);
        engine.update(engine.model(model)?, filter, data).await
    }

    /// Deletes rows matching `filter`. Related rows are not touched.
    pub async fn delete(&self, model: &str, filter: &Filter) -> Result<()> {
        let bound = self.bound()?;
        let engine = Engine::new(&bound);
        engine.delete(engine.model(model)?, filter).await
    }

    /// Snapshot of the bound registry. The lock is released before any
    /// round trip is issued.
    fn bound(&self) -> Result<Bound> {
        self.read().bound()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}
