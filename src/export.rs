//! Graph export — serialize a built graph for a renderer or a database.
//!
//! Two formats:
//!
//! ```text
//! ConnectivityGraph → write_cytoscape_json() → {elements, layout, style}
//!                   → export_cypher_dump()   → MERGE/CREATE statements
//! ```
//!
//! The Cypher dump uses `MERGE` for nodes, so repeated node entries
//! collapse to one database node (the same upsert-by-id a renderer does).

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::builder::ConnectivityGraph;
use crate::model::*;
use crate::style::{StyleRule, default_stylesheet};
use crate::Result;

/// Node label used for entities in the Cypher dump.
pub const CYPHER_NODE_LABEL: &str = "Entity";
/// Relationship type used for connectivity in the Cypher dump.
pub const CYPHER_REL_TYPE: &str = "CONNECTS_TO";

// ============================================================================
// Cytoscape document
// ============================================================================

/// Breadth-first layout anchored at the graph roots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub circle: bool,
    pub roots: Vec<NodeKey>,
}

impl Layout {
    pub fn breadthfirst(roots: &[NodeKey]) -> Self {
        Self { name: "breadthfirst".into(), circle: false, roots: roots.to_vec() }
    }
}

/// Everything a Cytoscape-compatible renderer needs to draw the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeDocument {
    pub elements: Vec<GraphElement>,
    pub layout: Layout,
    pub directed: bool,
    pub style: Vec<StyleRule>,
}

impl CytoscapeDocument {
    pub fn from_graph(graph: &ConnectivityGraph) -> Self {
        Self {
            elements: graph.elements(),
            layout: Layout::breadthfirst(graph.roots()),
            directed: true,
            style: default_stylesheet(),
        }
    }
}

/// Write the graph as a pretty-printed Cytoscape JSON document.
pub fn write_cytoscape_json(graph: &ConnectivityGraph, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &CytoscapeDocument::from_graph(graph))?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================================
// Cypher dump
// ============================================================================

/// Export the graph as a Cypher script.
pub fn export_cypher_dump(graph: &ConnectivityGraph, writer: &mut dyn Write) -> Result<()> {
    // Header
    writeln!(writer, "// neuron-connectivity Cypher DUMP")?;
    writeln!(writer, "// Generated: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(writer, "// Node entries: {}", graph.nodes().len())?;
    writeln!(writer, "// Distinct nodes: {}", graph.distinct_node_count())?;
    writeln!(writer, "// Relationships: {}", graph.edges().len())?;
    writeln!(writer)?;

    for node in graph.nodes() {
        writeln!(
            writer,
            "MERGE (n:{} {{id: {}}}) SET n.label = {}, n.classification = {};",
            CYPHER_NODE_LABEL,
            cypher_string(node.id.as_str()),
            cypher_string(&node.label),
            cypher_string(node.classification.as_str()),
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "// Relationships")?;

    for edge in graph.edges() {
        writeln!(
            writer,
            "MATCH (a:{label} {{id: {}}}), (b:{label} {{id: {}}}) CREATE (a)-[:{} {{id: {}}}]->(b);",
            cypher_string(edge.source.as_str()),
            cypher_string(edge.target.as_str()),
            CYPHER_REL_TYPE,
            cypher_string(&edge.id),
            label = CYPHER_NODE_LABEL,
        )?;
    }

    Ok(())
}

/// Format a string as a single-quoted Cypher literal.
fn cypher_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cypher_string() {
        assert_eq!(cypher_string("hello"), "'hello'");
        assert_eq!(cypher_string("it's"), r"'it\'s'");
        assert_eq!(cypher_string("a\nb"), r"'a\nb'");
        assert_eq!(cypher_string(r#"["A",[]]"#), r#"'["A",[]]'"#);
        assert_eq!(cypher_string(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_layout_uses_roots() {
        let record = KnowledgeRecord::new()
            .with_edge(EntityTuple::new("A"), EntityTuple::new("B"))
            .with_dendrite(EntityTuple::new("B"));
        let doc = CytoscapeDocument::from_graph(&ConnectivityGraph::new(&record));
        assert_eq!(doc.layout.name, "breadthfirst");
        assert!(!doc.layout.circle);
        assert_eq!(doc.layout.roots, vec![EntityTuple::new("B").key()]);
        assert!(doc.directed);
        assert_eq!(doc.elements.len(), 3);
    }
}
