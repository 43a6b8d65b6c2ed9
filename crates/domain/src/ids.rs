use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(RoundId);

/// Stable catalog key of an anatomical part (e.g. `"femur"`, `"phalanges-hand"`).
///
/// Part ids are authored by hand in catalog data rather than generated, so
/// unlike the UUID-backed ids they are validated strings: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartId(String);

impl PartId {
    /// Create a new validated part id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Part id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PartId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PartId> for String {
    fn from(id: PartId) -> String {
        id.0
    }
}

impl AsRef<str> for PartId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_id_is_trimmed() {
        let id = PartId::new("  femur ").unwrap();
        assert_eq!(id.as_str(), "femur");
    }

    #[test]
    fn part_id_rejects_blank() {
        assert!(PartId::new("").is_err());
        assert!(PartId::new("   ").is_err());
    }

    #[test]
    fn part_id_deserializes_through_validation() {
        let id: PartId = serde_json::from_str("\"tibia\"").unwrap();
        assert_eq!(id.as_str(), "tibia");
        assert!(serde_json::from_str::<PartId>("\"  \"").is_err());
    }

    #[test]
    fn round_ids_are_unique() {
        assert_ne!(RoundId::new(), RoundId::new());
        let uuid = Uuid::nil();
        assert_eq!(RoundId::from_uuid(uuid).to_uuid(), uuid);
    }
}
