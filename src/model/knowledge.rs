//! Knowledge record — the connectivity data returned by the map server.

use serde::{Deserialize, Serialize};

use super::EntityTuple;

/// A directed connection between two entities.
pub type KnowledgeEdge = (EntityTuple, EntityTuple);

/// Axonal/dendritic connectivity of one neuron population.
///
/// `axons` and `dendrites` share the identity space of the edge endpoints
/// but nothing requires their members to appear in `connectivity`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    pub connectivity: Vec<KnowledgeEdge>,
    #[serde(default)]
    pub axons: Vec<EntityTuple>,
    #[serde(default)]
    pub dendrites: Vec<EntityTuple>,
}

impl KnowledgeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(mut self, source: EntityTuple, target: EntityTuple) -> Self {
        self.connectivity.push((source, target));
        self
    }

    pub fn with_axon(mut self, axon: EntityTuple) -> Self {
        self.axons.push(axon);
        self
    }

    pub fn with_dendrite(mut self, dendrite: EntityTuple) -> Self {
        self.dendrites.push(dendrite);
        self
    }

    /// True when there is nothing to draw: no edges and no terminals.
    pub fn is_empty(&self) -> bool {
        self.connectivity.is_empty() && self.axons.is_empty() && self.dendrites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_knowledge() {
        let json = r#"{
            "connectivity": [[["A", []], ["B", ["b1"]]]],
            "axons": [["A", []]],
            "dendrites": [["B", ["b1"]]],
            "label": "ignored"
        }"#;
        let record: KnowledgeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.connectivity.len(), 1);
        assert_eq!(record.connectivity[0].1, EntityTuple::new("B").with_qualifiers(["b1"]));
        assert_eq!(record.axons, vec![EntityTuple::new("A")]);
        assert_eq!(record.dendrites.len(), 1);
    }

    #[test]
    fn test_terminal_sets_default_empty() {
        let record: KnowledgeRecord = serde_json::from_str(r#"{"connectivity": []}"#).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_missing_connectivity_is_rejected() {
        assert!(serde_json::from_str::<KnowledgeRecord>(r#"{"axons": []}"#).is_err());
    }
}
