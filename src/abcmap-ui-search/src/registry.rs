//! Component registry with ranked free-text search.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::component::ComponentDescriptor;
use crate::error::{RegistryError, RegistryResult};
use crate::query::significant_tokens;
use crate::result::{DEFAULT_MAX_RESULTS, SearchHit};
use crate::score::score_component;

/// A registered component together with its precomputed search text.
///
/// Lowercasing happens once here instead of on every keystroke.
#[derive(Debug, Clone)]
struct RegisteredComponent {
    /// The descriptor as registered.
    descriptor: ComponentDescriptor,

    /// Lowercased name for matching.
    name_lower: String,

    /// Lowercased description for matching.
    description_lower: String,
}

impl RegisteredComponent {
    fn new(descriptor: ComponentDescriptor) -> Self {
        let name_lower = descriptor.name.to_lowercase();
        let description_lower = descriptor.description.to_lowercase();

        Self {
            descriptor,
            name_lower,
            description_lower,
        }
    }
}

/// Registry of searchable UI components.
///
/// The registry holds descriptors in registration order, guarantees that no
/// two of them share a name, and answers free-text queries with the
/// best-matching components first. Registration happens once, at application
/// start; queries run on every keystroke afterwards.
///
/// Both operations are synchronous and the registry does no internal
/// locking; a multi-threaded host must guard `register` and `search` behind
/// a single lock.
///
/// # Example
///
/// ```
/// use abcmap_ui_search::{ComponentDescriptor, ComponentRegistry};
///
/// let mut registry = ComponentRegistry::new();
/// registry.register(ComponentDescriptor::new(
///     "DrawTool",
///     "draw shapes with a pen",
/// ))?;
///
/// let hits = registry.search("draw");
/// assert_eq!(hits[0].name, "DrawTool");
/// # Ok::<(), abcmap_ui_search::RegistryError>(())
/// ```
#[derive(Debug)]
pub struct ComponentRegistry {
    /// Registered components in registration order.
    components: Vec<RegisteredComponent>,

    /// Map of component names to positions in `components`.
    by_name: HashMap<String, usize>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registers a component.
    ///
    /// Fails with [`RegistryError::EmptyName`] when the descriptor carries
    /// an empty name, and with [`RegistryError::DuplicateName`] when a
    /// component with the same name (case-sensitive comparison) is already
    /// registered. On failure the registry is left unchanged.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> RegistryResult<()> {
        if descriptor.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.by_name.contains_key(&descriptor.name) {
            return Err(RegistryError::duplicate_name(&descriptor.name));
        }

        debug!("Registering component '{}'", descriptor.name);

        self.by_name
            .insert(descriptor.name.clone(), self.components.len());
        self.components.push(RegisteredComponent::new(descriptor));

        Ok(())
    }

    /// Registers every descriptor in order.
    ///
    /// Stops at the first failure and returns it; descriptors registered
    /// before the failure stay registered.
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = ComponentDescriptor>,
    ) -> RegistryResult<()> {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    /// Searches with the default result limit.
    ///
    /// Equivalent to `search_with_limit(query, DEFAULT_MAX_RESULTS)`.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.search_with_limit(query, DEFAULT_MAX_RESULTS)
    }

    /// Returns the best-matching components for a free-text query.
    ///
    /// The query is split on whitespace, stopwords are dropped, and every
    /// surviving token scores each component: name substring matches add 3,
    /// description substring matches add 2, case-insensitively, summed into
    /// one score per component. Components that score zero are omitted.
    /// Hits come back sorted by descending score, equal scores keeping
    /// registration order, truncated to at most `max_results`.
    ///
    /// Searching never fails: empty, whitespace-only, stopword-only, and
    /// unmatched queries all return an empty vector.
    pub fn search_with_limit(&self, query: &str, max_results: usize) -> Vec<SearchHit<'_>> {
        let tokens = significant_tokens(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .components
            .iter()
            .filter_map(|component| {
                let score = score_component(
                    &tokens,
                    &component.name_lower,
                    &component.description_lower,
                );

                if score > 0 {
                    Some(SearchHit {
                        name: &component.descriptor.name,
                        score,
                        component: &component.descriptor,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort over candidates collected in registration order, so
        // equal scores keep that order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(max_results);

        trace!("Search '{}' returned {} hits", query, hits.len());

        hits
    }

    /// Gets a registered component by exact name.
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.by_name
            .get(name)
            .map(|&idx| &self.components[idx].descriptor)
    }

    /// Checks whether a component with this exact name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns all component names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.components
            .iter()
            .map(|c| c.descriptor.name.as_str())
            .collect()
    }

    /// Returns the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over registered components in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter().map(|c| &c.descriptor)
    }
}
