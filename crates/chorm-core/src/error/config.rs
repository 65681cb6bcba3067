use super::Error;

/// Error when descriptors or call arguments are inconsistent.
///
/// This occurs when:
/// - A field type is missing a required parameter (Decimal without
///   precision/scale, FixedString without length, Array without item type)
/// - A filter, data map or ordering references a field the model does not
///   declare
/// - The registry is used before it is bound, or bound twice
#[derive(Debug)]
pub(super) struct ConfigError {
    message: Box<str>,
}

impl ConfigError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Config(ConfigError::new(message)))
    }

    /// Creates the error raised when a filter, data map or ordering names a
    /// field that is not declared on the model.
    pub fn undeclared_field(model: &str, field: &str) -> Error {
        Error::config(format!(
            "field `{field}` is not declared on model `{model}`"
        ))
    }

    /// Returns `true` if the root cause is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::Config(_))
    }
}
