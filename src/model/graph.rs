//! Display-graph elements derived from a knowledge record.

use serde::{Deserialize, Serialize};

use super::{EntityTuple, NodeKey};

/// Terminal classification of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[default]
    None,
    Axon,
    Dendrite,
    Both,
}

impl Classification {
    /// Membership in both sets wins over either alone.
    pub fn from_membership(is_axon: bool, is_dendrite: bool) -> Self {
        match (is_axon, is_dendrite) {
            (true, true) => Classification::Both,
            (true, false) => Classification::Axon,
            (false, true) => Classification::Dendrite,
            (false, false) => Classification::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::None => "none",
            Classification::Axon => "axon",
            Classification::Dendrite => "dendrite",
            Classification::Both => "both",
        }
    }

    pub fn is_axon(&self) -> bool {
        matches!(self, Classification::Axon | Classification::Both)
    }

    pub fn is_dendrite(&self) -> bool {
        matches!(self, Classification::Dendrite | Classification::Both)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the display graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeKey,
    pub label: String,
    pub classification: Classification,
}

impl GraphNode {
    pub fn new(tuple: &EntityTuple, classification: Classification) -> Self {
        Self {
            id: tuple.key(),
            label: tuple.label(),
            classification,
        }
    }
}

/// A directed edge in the display graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: NodeKey,
    pub target: NodeKey,
}

impl GraphEdge {
    /// Edge id is `{source}_{target}`, so it is directional.
    pub fn between(source: &NodeKey, target: &NodeKey) -> Self {
        Self {
            id: format!("{source}_{target}"),
            source: source.clone(),
            target: target.clone(),
        }
    }
}

/// Attribute bag of a graph element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementData {
    Node(GraphNode),
    Edge(GraphEdge),
}

/// Uniform element record handed to a renderer: `{"data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphElement {
    pub data: ElementData,
}

impl GraphElement {
    pub fn id(&self) -> &str {
        match &self.data {
            ElementData::Node(n) => n.id.as_str(),
            ElementData::Edge(e) => &e.id,
        }
    }

    pub fn as_node(&self) -> Option<&GraphNode> {
        match &self.data {
            ElementData::Node(n) => Some(n),
            ElementData::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&GraphEdge> {
        match &self.data {
            ElementData::Edge(e) => Some(e),
            ElementData::Node(_) => None,
        }
    }
}

impl From<GraphNode> for GraphElement {
    fn from(node: GraphNode) -> Self {
        Self { data: ElementData::Node(node) }
    }
}

impl From<GraphEdge> for GraphElement {
    fn from(edge: GraphEdge) -> Self {
        Self { data: ElementData::Edge(edge) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_precedence() {
        assert_eq!(Classification::from_membership(true, true), Classification::Both);
        assert_eq!(Classification::from_membership(true, false), Classification::Axon);
        assert_eq!(Classification::from_membership(false, true), Classification::Dendrite);
        assert_eq!(Classification::from_membership(false, false), Classification::None);
        assert!(Classification::Both.is_axon() && Classification::Both.is_dendrite());
    }

    #[test]
    fn test_element_json_shape() {
        let a = EntityTuple::new("A");
        let b = EntityTuple::new("B").with_qualifiers(["b1"]);
        let node = GraphElement::from(GraphNode::new(&b, Classification::Dendrite));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["data"]["id"], r#"["B",["b1"]]"#);
        assert_eq!(json["data"]["label"], "B\nb1");
        assert_eq!(json["data"]["classification"], "dendrite");

        let edge = GraphElement::from(GraphEdge::between(&a.key(), &b.key()));
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["data"]["id"], r#"["A",[]]_["B",["b1"]]"#);
        assert_eq!(json["data"]["source"], r#"["A",[]]"#);
    }

    #[test]
    fn test_untagged_element_roundtrip() {
        let edge = GraphElement::from(GraphEdge::between(
            &EntityTuple::new("A").key(),
            &EntityTuple::new("B").key(),
        ));
        let text = serde_json::to_string(&edge).unwrap();
        let back: GraphElement = serde_json::from_str(&text).unwrap();
        assert!(back.as_edge().is_some());
        assert_eq!(back, edge);
    }
}
