use super::Error;

/// Error when the store, or the transport to it, fails.
///
/// The underlying error is kept as-is; chorm never reinterprets or retries a
/// store failure.
#[derive(Debug)]
pub(super) struct StoreError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("store error: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a driver or transport failure.
    pub fn store(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::Store(StoreError { inner: err.into() }))
    }

    /// Returns `true` if the root cause is a store failure.
    pub fn is_store(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::Store(_))
    }
}
