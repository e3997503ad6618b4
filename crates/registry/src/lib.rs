//! In-memory registry of doctor consultation schedules.
//!
//! - [`ConsultationRecord`] is the stored entity
//! - [`ConsultationStore`] is the async contract handlers depend on
//! - [`InMemoryConsultationStore`] keeps records in insertion order behind a single lock

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use common::ConsultationId;
pub use error::{RegistryError, Result};
pub use memory::InMemoryConsultationStore;
pub use record::ConsultationRecord;
pub use store::ConsultationStore;
