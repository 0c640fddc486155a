//! # neuron-connectivity — Neural Connectivity Knowledge Graphs
//!
//! Turns the connectivity knowledge a flatmap server holds for a neuron
//! population into a display graph: nodes classified as axon/dendrite
//! terminals, directed edges, and the roots for a hierarchical layout.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `KnowledgeSource` is the contract between retrieval and building
//! 2. **Value identity**: an entity's `NodeKey` is its canonical JSON text, never a pointer
//! 3. **Builder owns nothing external**: record → graph is a pure function
//! 4. **Renderer-agnostic output**: elements + roots, exported as data
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neuron_connectivity::{ConnectivityGraph, HttpKnowledgeSource, MapServerConfig};
//!
//! # async fn example() -> neuron_connectivity::Result<()> {
//! let source = HttpKnowledgeSource::new(MapServerConfig::default())?;
//! let graph = neuron_connectivity::load_graph(&source, "ilxtr:neuron-type-keast-9").await?;
//!
//! for element in graph.elements() {
//!     println!("{}", element.id());
//! }
//! println!("roots: {:?}", graph.roots());
//! # Ok(())
//! # }
//! ```
//!
//! ## Knowledge Sources
//!
//! | Source | Feature | Description |
//! |--------|---------|-------------|
//! | Memory | (always) | In-memory records for testing/embedding |
//! | Http | `http` (default) | Flatmap server `knowledge/query/` endpoint |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod builder;
pub mod source;
pub mod config;
pub mod export;
pub mod style;
pub mod tooltip;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    EntityTuple, NodeKey, KnowledgeRecord, KnowledgeEdge,
    Classification, GraphNode, GraphEdge, GraphElement, ElementData,
};

// ============================================================================
// Re-exports: Builder, sources, config
// ============================================================================

pub use builder::ConnectivityGraph;
pub use source::{KnowledgeSource, KnowledgeQuery, MemoryKnowledgeSource};
#[cfg(feature = "http")]
pub use source::HttpKnowledgeSource;
pub use config::MapServerConfig;

// ============================================================================
// Top-level entry point
// ============================================================================

/// Load the knowledge for `entity` and build its connectivity graph.
///
/// Retrieval failures abort before any graph is built.
pub async fn load_graph<S>(source: &S, entity: &str) -> Result<ConnectivityGraph>
where
    S: KnowledgeSource + ?Sized,
{
    let knowledge = source.load_knowledge(entity).await?;
    Ok(ConnectivityGraph::new(&knowledge))
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot access {url} (status {status})")]
    Status { url: String, status: u16 },

    #[error("Invalid knowledge JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty knowledge response: {0}")]
    EmptyResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
