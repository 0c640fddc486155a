//! In-memory knowledge source.
//!
//! Holds records keyed by entity id behind a `RwLock`. Useful for tests
//! and for embedding pre-fetched knowledge without a map server.

use std::sync::Arc;

use async_trait::async_trait;
use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::KnowledgeRecord;
use crate::{Error, Result};
use super::KnowledgeSource;

/// In-memory knowledge store. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryKnowledgeSource {
    records: Arc<RwLock<HashMap<String, KnowledgeRecord>>>,
}

impl MemoryKnowledgeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, entity: impl Into<String>, record: KnowledgeRecord) -> Self {
        self.insert(entity, record);
        self
    }

    /// Store (or replace) the record for an entity.
    pub fn insert(&self, entity: impl Into<String>, record: KnowledgeRecord) -> Option<KnowledgeRecord> {
        self.records.write().insert(entity.into(), record)
    }

    pub fn remove(&self, entity: &str) -> Option<KnowledgeRecord> {
        self.records.write().remove(entity)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl KnowledgeSource for MemoryKnowledgeSource {
    async fn load_knowledge(&self, entity: &str) -> Result<KnowledgeRecord> {
        self.records
            .read()
            .get(entity)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("knowledge for entity '{entity}'")))
    }
}
