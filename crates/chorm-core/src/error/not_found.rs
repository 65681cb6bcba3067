use super::Error;

/// Error when a model or relation name does not resolve.
///
/// Models are looked up by name when an operation runs, and relation targets
/// are resolved by name when an include is evaluated, so a typo in either
/// surfaces here rather than at registration time.
#[derive(Debug)]
pub(super) enum NotFoundError {
    Model { name: Box<str> },
    Relation { model: Box<str>, relation: Box<str> },
}

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            NotFoundError::Model { name } => write!(f, "not found: model `{name}`"),
            NotFoundError::Relation { model, relation } => {
                write!(f, "not found: relation `{relation}` on model `{model}`")
            }
        }
    }
}

impl Error {
    /// Creates an error for a model name that is not registered.
    pub fn model_not_found(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError::Model {
            name: name.into().into(),
        }))
    }

    /// Creates an error for a relation that is not declared on a model.
    pub fn relation_not_found(model: impl Into<String>, relation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError::Relation {
            model: model.into().into(),
            relation: relation.into().into(),
        }))
    }

    /// Returns `true` if the root cause is an unknown model or relation.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::NotFound(_))
    }
}
