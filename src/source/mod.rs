//! # Knowledge Sources
//!
//! Anything that can produce a [`KnowledgeRecord`] for an entity id.
//!
//! | Source | Module | Description |
//! |--------|--------|-------------|
//! | `MemoryKnowledgeSource` | `memory` | In-memory records for testing/embedding |
//! | `HttpKnowledgeSource` | `http` | Flatmap server knowledge endpoint |

pub mod memory;
#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::model::KnowledgeRecord;
use crate::{Error, Result};

pub use memory::MemoryKnowledgeSource;
#[cfg(feature = "http")]
pub use http::HttpKnowledgeSource;

// ============================================================================
// KnowledgeSource Trait
// ============================================================================

/// Retrieval contract. Implementations return a fully materialized record
/// or fail; partial records are never handed out.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    async fn load_knowledge(&self, entity: &str) -> Result<KnowledgeRecord>;
}

// ============================================================================
// Query / response wire format
// ============================================================================

/// Body of a knowledge query: `{"sql": "select knowledge from ..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeQuery {
    pub sql: String,
}

impl KnowledgeQuery {
    pub fn for_entity(entity: &str) -> Self {
        let entity = entity.replace('\'', "''");
        Self { sql: format!("select knowledge from knowledge where entity = '{entity}'") }
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    values: Vec<Json>,
}

/// Parse a knowledge query response.
///
/// The first entry of `values` is normally the knowledge as a JSON
/// *string*, which needs a second parse. An already-structured object is
/// accepted as well.
pub fn parse_query_response(body: &str) -> Result<KnowledgeRecord> {
    let response: QueryResponse = serde_json::from_str(body)?;
    let first = response
        .values
        .into_iter()
        .next()
        .ok_or_else(|| Error::EmptyResponse("query returned no values".into()))?;
    match first {
        Json::String(text) => Ok(serde_json::from_str(&text)?),
        Json::Null => Err(Error::EmptyResponse("knowledge value is null".into())),
        other => Ok(serde_json::from_value(other)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityTuple;

    #[test]
    fn test_query_for_entity() {
        let q = KnowledgeQuery::for_entity("ilxtr:neuron-type-keast-9");
        assert_eq!(q.sql, "select knowledge from knowledge where entity = 'ilxtr:neuron-type-keast-9'");
        assert_eq!(
            serde_json::to_string(&q).unwrap(),
            r#"{"sql":"select knowledge from knowledge where entity = 'ilxtr:neuron-type-keast-9'"}"#
        );
    }

    #[test]
    fn test_query_escapes_quotes() {
        let q = KnowledgeQuery::for_entity("x' or '1'='1");
        assert_eq!(q.sql, "select knowledge from knowledge where entity = 'x'' or ''1''=''1'");
    }

    #[test]
    fn test_parse_double_encoded_response() {
        let body = r#"{"keys": ["knowledge"], "values": ["{\"connectivity\": [[[\"A\", []], [\"B\", []]]], \"axons\": [[\"A\", []]], \"dendrites\": []}"]}"#;
        let record = parse_query_response(body).unwrap();
        assert_eq!(record.connectivity, vec![(EntityTuple::new("A"), EntityTuple::new("B"))]);
        assert_eq!(record.axons, vec![EntityTuple::new("A")]);
    }

    #[test]
    fn test_parse_structured_response() {
        let body = r#"{"values": [{"connectivity": [], "dendrites": [["D", ["d"]]]}]}"#;
        let record = parse_query_response(body).unwrap();
        assert_eq!(record.dendrites.len(), 1);
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(matches!(parse_query_response(r#"{"values": []}"#), Err(Error::EmptyResponse(_))));
        assert!(matches!(parse_query_response("{}"), Err(Error::EmptyResponse(_))));
        assert!(matches!(parse_query_response(r#"{"values": [null]}"#), Err(Error::EmptyResponse(_))));
    }

    #[test]
    fn test_parse_malformed_knowledge() {
        let body = r#"{"values": ["{\"axons\": []}"]}"#;
        assert!(matches!(parse_query_response(body), Err(Error::Json(_))));
        assert!(matches!(parse_query_response("not json"), Err(Error::Json(_))));
    }
}
