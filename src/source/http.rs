//! Flatmap server knowledge source.
//!
//! Issues one `POST {server}/knowledge/query/` per entity with an SQL
//! query body and parses the double-encoded knowledge out of the reply.

use async_trait::async_trait;

use crate::config::MapServerConfig;
use crate::model::KnowledgeRecord;
use crate::{Error, Result};
use super::{KnowledgeQuery, KnowledgeSource, parse_query_response};

/// HTTP knowledge source. Cheap to clone (shares the reqwest client).
#[derive(Debug, Clone)]
pub struct HttpKnowledgeSource {
    client: reqwest::Client,
    config: MapServerConfig,
}

impl HttpKnowledgeSource {
    pub fn new(config: MapServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Reuse an existing client; the config timeout is not applied.
    pub fn with_client(client: reqwest::Client, config: MapServerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &MapServerConfig {
        &self.config
    }
}

#[async_trait]
impl KnowledgeSource for HttpKnowledgeSource {
    async fn load_knowledge(&self, entity: &str) -> Result<KnowledgeRecord> {
        let url = self.config.query_url();
        tracing::info!(%url, entity, "querying connectivity knowledge");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json; charset=utf-8")
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .json(&KnowledgeQuery::for_entity(entity))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "knowledge query failed");
            return Err(Error::Status { url, status: status.as_u16() });
        }

        let body = response.text().await?;
        let record = parse_query_response(&body)?;
        tracing::debug!(
            entity,
            edges = record.connectivity.len(),
            axons = record.axons.len(),
            dendrites = record.dendrites.len(),
            "received knowledge"
        );
        Ok(record)
    }
}
