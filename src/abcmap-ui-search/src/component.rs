//! Component descriptors registered for search.

use serde::{Deserialize, Serialize};

/// The searchable identity of a UI component.
///
/// A descriptor pairs a unique component name with the free-text description
/// shown next to it in search results. Both are fixed at registration time;
/// the registry never mutates a descriptor once it holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Component name. Uniqueness across the registry is case-sensitive.
    pub name: String,

    /// Free-text description of what the component does.
    pub description: String,
}

impl ComponentDescriptor {
    /// Creates a new descriptor.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
