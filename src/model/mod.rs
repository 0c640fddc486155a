//! # Connectivity Model
//!
//! Plain data on both sides of the graph builder: the knowledge record the
//! map server returns and the display-graph elements a renderer consumes.
//!
//! Design rule: no I/O, no state, no async in this module.

pub mod entity;
pub mod knowledge;
pub mod graph;

pub use entity::{EntityTuple, NodeKey, Qualifiers};
pub use knowledge::{KnowledgeRecord, KnowledgeEdge};
pub use graph::{Classification, GraphNode, GraphEdge, GraphElement, ElementData};
