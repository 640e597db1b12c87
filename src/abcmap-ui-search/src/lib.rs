//! Searchable registry for Abc-Map UI components.
//!
//! UI modules register the components they contribute (a unique name plus a
//! short description) once at startup, and the search overlay queries the
//! registry on every keystroke to suggest the most relevant components.
//!
//! Queries are plain text: they are split on whitespace, common filler
//! words are dropped, and the remaining tokens are matched as
//! case-insensitive substrings against component names and descriptions.
//! Name matches weigh more than description matches, and the best-scoring
//! components come back first.
//!
//! # Example
//!
//! ```
//! use abcmap_ui_search::{ComponentDescriptor, ComponentRegistry};
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register_all([
//!     ComponentDescriptor::new("ScaleSelector", "set the scale of the map"),
//!     ComponentDescriptor::new("ProjectionSelector", "change the projection of the map"),
//! ])?;
//!
//! let hits = registry.search("projection");
//! assert_eq!(hits[0].name, "ProjectionSelector");
//! # Ok::<(), abcmap_ui_search::RegistryError>(())
//! ```

pub mod component;
pub mod error;
pub mod query;
pub mod registry;
pub mod result;
pub mod score;

pub use component::ComponentDescriptor;
pub use error::{RegistryError, RegistryResult};
pub use query::{STOPWORDS, significant_tokens};
pub use registry::ComponentRegistry;
pub use result::{DEFAULT_MAX_RESULTS, SearchHit};
pub use score::{DESCRIPTION_WEIGHT, NAME_WEIGHT, score_component};
