//! Connectivity graph builder.
//!
//! Turns a [`KnowledgeRecord`] into display-graph elements:
//!
//! ```text
//! connectivity[i] = (src, dst)  →  nodes += [node(src), node(dst)]
//!                                  edges += [src_dst]
//! dendrites                     →  roots
//! ```
//!
//! Nodes are appended once per edge endpoint, so an entity that ends
//! several edges appears several times. Renderers upsert by id.

use hashbrown::HashSet;

use crate::model::*;

/// A built display graph. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectivityGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    roots: Vec<NodeKey>,
}

impl ConnectivityGraph {
    pub fn new(knowledge: &KnowledgeRecord) -> Self {
        let axons: HashSet<NodeKey> = knowledge.axons.iter().map(EntityTuple::key).collect();
        let dendrites: HashSet<NodeKey> = knowledge.dendrites.iter().map(EntityTuple::key).collect();

        let classify = |tuple: &EntityTuple| {
            let key = tuple.key();
            let classification =
                Classification::from_membership(axons.contains(&key), dendrites.contains(&key));
            GraphNode { id: key, label: tuple.label(), classification }
        };

        let mut nodes = Vec::with_capacity(knowledge.connectivity.len() * 2);
        let mut edges = Vec::with_capacity(knowledge.connectivity.len());
        for (source, target) in &knowledge.connectivity {
            let source = classify(source);
            let target = classify(target);
            edges.push(GraphEdge::between(&source.id, &target.id));
            nodes.push(source);
            nodes.push(target);
        }

        // Roots keep input order, duplicates included.
        let roots: Vec<NodeKey> = knowledge.dendrites.iter().map(EntityTuple::key).collect();

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            roots = roots.len(),
            "built connectivity graph"
        );

        Self { nodes, edges, roots }
    }

    /// All nodes, then all edges, each wrapped as a [`GraphElement`].
    pub fn elements(&self) -> Vec<GraphElement> {
        self.nodes.iter().cloned().map(GraphElement::from)
            .chain(self.edges.iter().cloned().map(GraphElement::from))
            .collect()
    }

    /// Layout roots: the dendrite keys in input order.
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Number of distinct node ids (what a renderer will actually draw).
    pub fn distinct_node_count(&self) -> usize {
        self.nodes.iter().map(|n| &n.id).collect::<HashSet<_>>().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

impl From<&KnowledgeRecord> for ConnectivityGraph {
    fn from(knowledge: &KnowledgeRecord) -> Self {
        Self::new(knowledge)
    }
}
