use serde::{Deserialize, Deserializer, Serialize};

/// Caller-supplied identifier of a consultation schedule.
///
/// Wraps the integer id so it cannot be mixed up with other integers
/// flowing through handlers (counts, ports, indexes). Serializes as a
/// plain integer; deserializes from an integer or an integer string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConsultationId(i64);

impl ConsultationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ConsultationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Int(id) => Ok(Self(id)),
            RawId::Text(text) => text.trim().parse().map(Self).map_err(|_| {
                serde::de::Error::custom(format!("invalid consultation id: {text:?}"))
            }),
        }
    }
}

impl std::fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ConsultationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
