//! Shared types for the consultation scheduling service.

pub mod types;

pub use types::ConsultationId;
