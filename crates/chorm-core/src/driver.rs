mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// The client used to reach the store.
///
/// chorm only ever hands a driver fully rendered SQL text or a batch of
/// JSON-shaped rows; connection handling, authentication, retries and
/// timeouts are the driver's concern. Driver failures are surfaced to the
/// caller unchanged, wrapped with [`Error::store`](crate::Error::store).
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
