//! Body vocabulary: the closed sets of systems and regions a part belongs to.
//!
//! Both enums serialize as snake_case strings (`"upper_limb"`), which is also
//! the format accepted by `FromStr`. Proximity hints compare parts by these
//! values, so a part carries exactly one system and one region.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organ system an anatomical part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySystem {
    Skeletal,
    Muscular,
    Nervous,
    Cardiovascular,
    Respiratory,
    Digestive,
    Endocrine,
    Lymphatic,
    Urinary,
    Reproductive,
}

impl BodySystem {
    /// All systems in declaration order
    pub fn all() -> &'static [BodySystem] {
        &[
            BodySystem::Skeletal,
            BodySystem::Muscular,
            BodySystem::Nervous,
            BodySystem::Cardiovascular,
            BodySystem::Respiratory,
            BodySystem::Digestive,
            BodySystem::Endocrine,
            BodySystem::Lymphatic,
            BodySystem::Urinary,
            BodySystem::Reproductive,
        ]
    }

    /// Wire/storage key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            BodySystem::Skeletal => "skeletal",
            BodySystem::Muscular => "muscular",
            BodySystem::Nervous => "nervous",
            BodySystem::Cardiovascular => "cardiovascular",
            BodySystem::Respiratory => "respiratory",
            BodySystem::Digestive => "digestive",
            BodySystem::Endocrine => "endocrine",
            BodySystem::Lymphatic => "lymphatic",
            BodySystem::Urinary => "urinary",
            BodySystem::Reproductive => "reproductive",
        }
    }

    /// Get a display name for the system
    pub fn display_name(&self) -> &'static str {
        match self {
            BodySystem::Skeletal => "Skeletal",
            BodySystem::Muscular => "Muscular",
            BodySystem::Nervous => "Nervous",
            BodySystem::Cardiovascular => "Cardiovascular",
            BodySystem::Respiratory => "Respiratory",
            BodySystem::Digestive => "Digestive",
            BodySystem::Endocrine => "Endocrine",
            BodySystem::Lymphatic => "Lymphatic",
            BodySystem::Urinary => "Urinary",
            BodySystem::Reproductive => "Reproductive",
        }
    }
}

impl fmt::Display for BodySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BodySystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        BodySystem::all()
            .iter()
            .copied()
            .find(|system| system.key() == key)
            .ok_or_else(|| DomainError::parse(format!("Unknown body system: {}", s)))
    }
}

/// Anatomical region of the body a part is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    Head,
    Neck,
    Thorax,
    Abdomen,
    Pelvis,
    UpperLimb,
    LowerLimb,
    Back,
}

impl BodyRegion {
    /// All regions in declaration order
    pub fn all() -> &'static [BodyRegion] {
        &[
            BodyRegion::Head,
            BodyRegion::Neck,
            BodyRegion::Thorax,
            BodyRegion::Abdomen,
            BodyRegion::Pelvis,
            BodyRegion::UpperLimb,
            BodyRegion::LowerLimb,
            BodyRegion::Back,
        ]
    }

    /// Wire/storage key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            BodyRegion::Head => "head",
            BodyRegion::Neck => "neck",
            BodyRegion::Thorax => "thorax",
            BodyRegion::Abdomen => "abdomen",
            BodyRegion::Pelvis => "pelvis",
            BodyRegion::UpperLimb => "upper_limb",
            BodyRegion::LowerLimb => "lower_limb",
            BodyRegion::Back => "back",
        }
    }

    /// Get a display name for the region
    pub fn display_name(&self) -> &'static str {
        match self {
            BodyRegion::Head => "Head",
            BodyRegion::Neck => "Neck",
            BodyRegion::Thorax => "Thorax",
            BodyRegion::Abdomen => "Abdomen",
            BodyRegion::Pelvis => "Pelvis",
            BodyRegion::UpperLimb => "Upper Limb",
            BodyRegion::LowerLimb => "Lower Limb",
            BodyRegion::Back => "Back",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BodyRegion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        BodyRegion::all()
            .iter()
            .copied()
            .find(|region| region.key() == key)
            .ok_or_else(|| DomainError::parse(format!("Unknown body region: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_from_str_roundtrip() {
        for system in BodySystem::all() {
            assert_eq!(system.key().parse::<BodySystem>().unwrap(), *system);
        }
    }

    #[test]
    fn test_system_from_str_is_case_insensitive() {
        assert_eq!(
            " Skeletal ".parse::<BodySystem>().unwrap(),
            BodySystem::Skeletal
        );
        assert!("bones".parse::<BodySystem>().is_err());
    }

    #[test]
    fn test_region_serde_uses_snake_case() {
        let json = serde_json::to_string(&BodyRegion::UpperLimb).unwrap();
        assert_eq!(json, "\"upper_limb\"");
        let region: BodyRegion = serde_json::from_str("\"lower_limb\"").unwrap();
        assert_eq!(region, BodyRegion::LowerLimb);
    }

    #[test]
    fn test_region_display() {
        assert_eq!(BodyRegion::LowerLimb.to_string(), "Lower Limb");
        assert_eq!(BodySystem::Nervous.to_string(), "Nervous");
    }
}
