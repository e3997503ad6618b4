use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ConsultationId, ConsultationRecord, RegistryError, Result, store::ConsultationStore};

/// In-memory consultation registry.
///
/// Records live in a `Vec` in insertion order and every lookup is a linear
/// scan. Each operation holds the lock across its whole check-then-mutate
/// sequence, so concurrent creates with the same id cannot both succeed.
/// Cloning yields another handle to the same records.
#[derive(Clone, Default)]
pub struct InMemoryConsultationStore {
    records: Arc<RwLock<Vec<ConsultationRecord>>>,
}

impl InMemoryConsultationStore {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Removes every record.
    pub async fn clear(&self) {
        self.records.write().await.clear();
        metrics::gauge!("consultations_stored").set(0.0);
    }
}

fn position_of(records: &[ConsultationRecord], id: ConsultationId) -> Option<usize> {
    records.iter().position(|r| r.id == id)
}

fn record_outcome(operation: &'static str, outcome: &'static str) {
    metrics::counter!(
        "consultations_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

#[async_trait]
impl ConsultationStore for InMemoryConsultationStore {
    async fn list(&self) -> Vec<ConsultationRecord> {
        let records = self.records.read().await;
        record_outcome("list", "ok");
        records.clone()
    }

    async fn get(&self, id: ConsultationId) -> Result<ConsultationRecord> {
        let records = self.records.read().await;
        match records.iter().find(|r| r.id == id) {
            Some(record) => {
                record_outcome("get", "ok");
                Ok(record.clone())
            }
            None => {
                record_outcome("get", "not_found");
                tracing::debug!(%id, "consultation not found");
                Err(RegistryError::NotFound(id))
            }
        }
    }

    async fn create(&self, record: ConsultationRecord) -> Result<ConsultationRecord> {
        let mut records = self.records.write().await;

        if position_of(&records, record.id).is_some() {
            record_outcome("create", "conflict");
            tracing::warn!(id = %record.id, "consultation id already exists");
            return Err(RegistryError::Conflict(record.id));
        }

        records.push(record.clone());
        record_outcome("create", "ok");
        metrics::gauge!("consultations_stored").set(records.len() as f64);
        tracing::debug!(id = %record.id, total = records.len(), "consultation created");

        Ok(record)
    }

    async fn update(
        &self,
        id: ConsultationId,
        record: ConsultationRecord,
    ) -> Result<ConsultationRecord> {
        let mut records = self.records.write().await;

        let Some(index) = position_of(&records, id) else {
            record_outcome("update", "not_found");
            tracing::debug!(%id, "consultation not found");
            return Err(RegistryError::NotFound(id));
        };

        if record.id != id {
            tracing::debug!(%id, new_id = %record.id, "update replaces the stored id");
        }

        records[index] = record.clone();
        record_outcome("update", "ok");
        tracing::debug!(%id, "consultation updated");

        Ok(record)
    }

    async fn delete(&self, id: ConsultationId) -> Result<ConsultationRecord> {
        let mut records = self.records.write().await;

        let Some(index) = position_of(&records, id) else {
            record_outcome("delete", "not_found");
            tracing::debug!(%id, "consultation not found");
            return Err(RegistryError::NotFound(id));
        };

        let removed = records.remove(index);
        record_outcome("delete", "ok");
        metrics::gauge!("consultations_stored").set(records.len() as f64);
        tracing::debug!(%id, total = records.len(), "consultation deleted");

        Ok(removed)
    }
}
