//! Error types for component registration.

/// Result type alias for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur when registering components.
///
/// Searching never fails; degenerate queries return an empty result list.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A component with the same name is already registered.
    ///
    /// Components are expected to be registered once, at startup, with
    /// globally unique names, so this is a configuration error rather than
    /// something to recover from.
    #[error("Component name '{name}' is not unique")]
    DuplicateName { name: String },

    /// The descriptor carries an empty name.
    #[error("Component name cannot be empty")]
    EmptyName,
}

impl RegistryError {
    /// Creates a new `DuplicateName` error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::duplicate_name("DrawTool");
        assert!(err.to_string().contains("DrawTool"));

        let err = RegistryError::EmptyName;
        assert!(err.to_string().contains("empty"));
    }
}
