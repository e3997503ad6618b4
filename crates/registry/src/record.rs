use serde::{Deserialize, Serialize};

use crate::ConsultationId;

/// One doctor consultation schedule entry.
///
/// Time and date are kept as the caller sent them; they are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    pub id: ConsultationId,
    pub doctor_name: String,
    pub patient_name: String,
    pub appointment_time: String,
    pub appointment_date: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ConsultationRecord {
    /// Creates a record without a description.
    pub fn new(
        id: i64,
        doctor_name: impl Into<String>,
        patient_name: impl Into<String>,
        appointment_time: impl Into<String>,
        appointment_date: impl Into<String>,
    ) -> Self {
        Self {
            id: ConsultationId::new(id),
            doctor_name: doctor_name.into(),
            patient_name: patient_name.into(),
            appointment_time: appointment_time.into(),
            appointment_date: appointment_date.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
