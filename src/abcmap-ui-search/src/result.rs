//! Search result types.

use serde::Serialize;

use crate::component::ComponentDescriptor;

/// Default maximum number of hits returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A single ranked search hit.
///
/// Hits borrow from the registry that produced them and are rebuilt from
/// scratch on every query; the registry retains nothing between queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    /// Name of the matched component.
    pub name: &'a str,

    /// Accumulated relevance score (higher is better).
    pub score: u32,

    /// The matched component itself.
    pub component: &'a ComponentDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_serializes_with_component_payload() {
        let descriptor = ComponentDescriptor::new("DrawTool", "draw shapes with a pen");
        let hit = SearchHit {
            name: &descriptor.name,
            score: 5,
            component: &descriptor,
        };

        let value = serde_json::to_value(&hit).unwrap();

        assert_eq!(value["name"], "DrawTool");
        assert_eq!(value["score"], 5);
        assert_eq!(value["component"]["description"], "draw shapes with a pen");
    }
}
