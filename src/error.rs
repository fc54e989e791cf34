//! Error types returned by record operations.

/// Error returned by [`crate::RecordClient`] and [`crate::ScopedRecordClient`] operations.
///
/// `E` is the transport error. It is carried verbatim in [`Error::Transport`] so callers can
/// branch on store failure codes.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// A filter or update was requested with no field: the store rejects empty expressions.
    #[error("{operation} requires at least one field")]
    EmptyExpression {
        /// The operation that was rejected.
        operation: &'static str,
    },
    /// A field name has no ASCII letter, so its sanitized attribute name would be empty.
    #[error("{operation}: field {name:?} has no letter to build an attribute name from")]
    InvalidFieldName {
        /// The operation that was rejected.
        operation: &'static str,
        /// The field name as given.
        name: String,
    },
    /// A key, item or field value could not be converted into attribute values.
    #[error("failed to serialize attribute values: {0}")]
    Serialization(#[from] serde_dynamo::Error),
    /// The transport failed.
    #[error(transparent)]
    Transport(E),
}

impl<E> Error<E> {
    pub(crate) fn empty_expression(operation: &'static str) -> Self {
        Self::EmptyExpression { operation }
    }

    pub(crate) fn invalid_field_name(operation: &'static str, name: &str) -> Self {
        Self::InvalidFieldName {
            operation,
            name: name.to_string(),
        }
    }

    /// Whether the request was rejected before dispatch because it had no field.
    pub fn is_empty_expression(&self) -> bool {
        matches!(self, Self::EmptyExpression { .. })
    }

    /// The transport error, if the failure came from the store.
    pub fn transport(&self) -> Option<&E> {
        match self {
            Self::Transport(error) => Some(error),
            _ => None,
        }
    }

    /// Take the transport error, if the failure came from the store.
    pub fn into_transport(self) -> Option<E> {
        match self {
            Self::Transport(error) => Some(error),
            _ => None,
        }
    }
}

/// Result of a record operation over transport error `E`.
pub type Result<T, E> = std::result::Result<T, Error<E>>;
