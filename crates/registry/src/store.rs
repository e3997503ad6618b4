use async_trait::async_trait;

use crate::{ConsultationId, ConsultationRecord, Result};

/// Storage contract for consultation schedules.
///
/// Records are passed by value across this boundary. When more than one
/// stored record shares an id, operations act on the first one in
/// insertion order.
#[async_trait]
pub trait ConsultationStore: Send + Sync {
    /// Returns every stored record in insertion order.
    async fn list(&self) -> Vec<ConsultationRecord>;

    /// Returns the record with the given id.
    async fn get(&self, id: ConsultationId) -> Result<ConsultationRecord>;

    /// Appends a record, failing with `Conflict` if its id is already stored.
    async fn create(&self, record: ConsultationRecord) -> Result<ConsultationRecord>;

    /// Replaces the whole record stored under `id` with `record`.
    ///
    /// The replacement's own `id` field is stored as given, even when it
    /// differs from `id`.
    async fn update(
        &self,
        id: ConsultationId,
        record: ConsultationRecord,
    ) -> Result<ConsultationRecord>;

    /// Removes the record stored under `id` and returns it.
    async fn delete(&self, id: ConsultationId) -> Result<ConsultationRecord>;
}
