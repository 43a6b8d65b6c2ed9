//! AnatomicalPart aggregate - a single structure the player can be asked to identify
//!
//! # Matching rules
//!
//! Two different matching rules apply to a part and must not be mixed up:
//!
//! - **Win matching** ([`AnatomicalPart::matches`]): a guess names this part if
//!   it equals the canonical name, the common name, or any alias, compared
//!   after trimming and lower-casing.
//! - **Search matching** (see [`Catalog::search_by_prefix`](crate::Catalog::search_by_prefix)):
//!   only the canonical name, only by prefix. Common names and aliases never
//!   appear in search so the search box cannot give the answer away.

use serde::{Deserialize, Serialize};

use crate::common::{names_match, normalize};
use crate::ids::PartId;
use crate::types::{BodyRegion, BodySystem};
use crate::value_objects::{DiagramReference, PartName, ProximityHint};

/// An anatomical part record.
///
/// # Invariants
///
/// - `id` is a non-empty, trimmed key (uniqueness is enforced by the catalog)
/// - `name` is non-empty
/// - `diagram` references at least one element
///
/// # Example
///
/// ```
/// use skeledle_domain::{AnatomicalPart, BodyRegion, BodySystem, DiagramReference, PartId, PartName};
///
/// let femur = AnatomicalPart::new(
///     PartId::new("femur").unwrap(),
///     PartName::new("Femur").unwrap(),
///     "Thigh Bone",
///     BodySystem::Skeletal,
///     BodyRegion::LowerLimb,
///     DiagramReference::on_default_asset(["FemurLeft"]).unwrap(),
/// )
/// .with_aliases(["thigh bone"]);
///
/// assert!(femur.matches("  FEMUR "));
/// assert!(femur.matches("thigh bone"));
/// assert!(!femur.matches("fem"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnatomicalPart {
    id: PartId,
    name: PartName,
    /// Informal name; shown to players, never searched
    common_name: String,
    system: BodySystem,
    region: BodyRegion,
    /// Alternate names accepted for win matching only
    #[serde(default)]
    aliases: Vec<String>,
    diagram: DiagramReference,
}

impl AnatomicalPart {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(
        id: PartId,
        name: PartName,
        common_name: impl Into<String>,
        system: BodySystem,
        region: BodyRegion,
        diagram: DiagramReference,
    ) -> Self {
        Self {
            id,
            name,
            common_name: common_name.into().trim().to_string(),
            system,
            region,
            aliases: Vec::new(),
            diagram,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &PartId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &PartName {
        &self.name
    }

    #[inline]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    #[inline]
    pub fn system(&self) -> BodySystem {
        self.system
    }

    #[inline]
    pub fn region(&self) -> BodyRegion {
        self.region
    }

    #[inline]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[inline]
    pub fn diagram(&self) -> &DiagramReference {
        &self.diagram
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the alternate names accepted for this part. Order is preserved;
    /// blank aliases are dropped.
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases
            .into_iter()
            .map(|a| a.into().trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        self
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Win-matching rule: does `guess` name this part?
    pub fn matches(&self, guess: &str) -> bool {
        let guess = normalize(guess);
        if guess.is_empty() {
            return false;
        }
        names_match(self.name.as_str(), &guess)
            || names_match(&self.common_name, &guess)
            || self.aliases.iter().any(|alias| names_match(alias, &guess))
    }

    /// Search-matching rule: does the canonical name start with the
    /// already-normalized `prefix`?
    pub fn name_starts_with(&self, normalized_prefix: &str) -> bool {
        self.name.normalized().starts_with(normalized_prefix)
    }

    /// Feedback for `guess` when this part is the round's target.
    pub fn proximity_hint(&self, guess: &AnatomicalPart) -> ProximityHint {
        ProximityHint {
            system_match: self.system == guess.system,
            region_match: self.region == guess.region,
            name_match: self.matches(guess.name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(
        id: &str,
        name: &str,
        common: &str,
        system: BodySystem,
        region: BodyRegion,
    ) -> AnatomicalPart {
        AnatomicalPart::new(
            PartId::new(id).unwrap(),
            PartName::new(name).unwrap(),
            common,
            system,
            region,
            DiagramReference::on_default_asset([format!("{name}Left")]).unwrap(),
        )
    }

    fn femur() -> AnatomicalPart {
        part(
            "femur",
            "Femur",
            "Thigh Bone",
            BodySystem::Skeletal,
            BodyRegion::LowerLimb,
        )
        .with_aliases(["thigh bone", "femur"])
    }

    #[test]
    fn test_matches_name_common_name_and_aliases() {
        let mandible = part(
            "mandible",
            "Mandible",
            "Lower Jaw",
            BodySystem::Skeletal,
            BodyRegion::Head,
        )
        .with_aliases(["jaw", "jawbone"]);

        assert!(mandible.matches("mandible"));
        assert!(mandible.matches("LOWER JAW"));
        assert!(mandible.matches(" Jawbone "));
        assert!(!mandible.matches("jaw bone"));
        assert!(!mandible.matches(""));
    }

    #[test]
    fn test_hint_for_same_system_different_region() {
        let metacarpals = part(
            "metacarpals",
            "Metacarpals",
            "Hand Bones",
            BodySystem::Skeletal,
            BodyRegion::UpperLimb,
        );
        let hint = femur().proximity_hint(&metacarpals);
        assert_eq!(hint, ProximityHint::new(true, false, false));
    }

    #[test]
    fn test_hint_for_exact_part() {
        let target = femur();
        let hint = target.proximity_hint(&target);
        assert_eq!(hint, ProximityHint::new(true, true, true));
    }

    #[test]
    fn test_hint_name_match_through_target_alias() {
        // A distinct record whose canonical name is one of the target's aliases
        let skull = part("skull", "Skull", "Skull", BodySystem::Skeletal, BodyRegion::Head)
            .with_aliases(["cranium", "head bones"]);
        let cranium = part(
            "cranium",
            "Cranium",
            "Brain Case",
            BodySystem::Skeletal,
            BodyRegion::Head,
        );
        assert!(skull.proximity_hint(&cranium).name_match);
        // Not symmetric: Skull is not an alias of Cranium
        assert!(!cranium.proximity_hint(&skull).name_match);
    }

    #[test]
    fn test_hint_different_system() {
        let target = part(
            "biceps",
            "Biceps Brachii",
            "Biceps",
            BodySystem::Muscular,
            BodyRegion::UpperLimb,
        );
        let humerus = part(
            "humerus",
            "Humerus",
            "Upper Arm Bone",
            BodySystem::Skeletal,
            BodyRegion::UpperLimb,
        );
        assert_eq!(
            target.proximity_hint(&humerus),
            ProximityHint::new(false, true, false)
        );
    }

    #[test]
    fn test_name_starts_with_ignores_common_name() {
        let metacarpals = part(
            "metacarpals",
            "Metacarpals",
            "Hand Bones",
            BodySystem::Skeletal,
            BodyRegion::UpperLimb,
        );
        assert!(metacarpals.name_starts_with("meta"));
        assert!(!metacarpals.name_starts_with("hand"));
    }

    #[test]
    fn test_with_aliases_drops_blank() {
        let femur = femur().with_aliases(["  ", "thigh bone "]);
        assert_eq!(femur.aliases(), ["thigh bone"]);
    }
}
