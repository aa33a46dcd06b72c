use thiserror::Error;

/// Core domain errors
///
/// A lookup that finds nothing is not an error; it is reported as `None`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Unknown field: '{name}'")]
    UnknownField { name: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the error was caused by the caller's arguments
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = DomainError::invalid_argument("id", "expected a string, got boolean");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'id': expected a string, got boolean"
        );
        assert!(error.is_argument_error());
    }

    #[test]
    fn test_unknown_field_error() {
        let error = DomainError::unknown_field("trainTypes");
        assert_eq!(error.to_string(), "Unknown field: 'trainTypes'");
        assert!(!error.is_argument_error());
    }

    #[test]
    fn test_catalog_error() {
        let error = DomainError::catalog("file not found");
        assert_eq!(error.to_string(), "Catalog error: file not found");
    }
}
