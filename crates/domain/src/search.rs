//! Autocomplete filter for the guess box.
//!
//! The filter matches only the beginning of the canonical medical name, so a
//! player cannot discover the answer by typing its everyday name.

use crate::common::normalize;
use crate::AnatomicalPart;

/// Queries shorter than this (after trimming) produce no suggestions.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Parts whose canonical name starts with `query`, in input order.
///
/// Returns nothing until the trimmed query has [`MIN_QUERY_LENGTH`]
/// characters.
pub fn filter_parts<'a, I>(parts: I, query: &str) -> Vec<&'a AnatomicalPart>
where
    I: IntoIterator<Item = &'a AnatomicalPart>,
{
    let query = normalize(query);
    if query.chars().count() < MIN_QUERY_LENGTH {
        return Vec::new();
    }
    parts
        .into_iter()
        .filter(|part| part.name_starts_with(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PartId;
    use crate::types::{BodyRegion, BodySystem};
    use crate::value_objects::{DiagramReference, PartName};

    fn part(id: &str, name: &str, common: &str, region: BodyRegion) -> AnatomicalPart {
        AnatomicalPart::new(
            PartId::new(id).unwrap(),
            PartName::new(name).unwrap(),
            common,
            BodySystem::Skeletal,
            region,
            DiagramReference::on_default_asset([format!("{name}Left")]).unwrap(),
        )
    }

    fn femur() -> AnatomicalPart {
        part("femur", "Femur", "Thigh Bone", BodyRegion::LowerLimb)
    }

    fn metacarpals() -> AnatomicalPart {
        part("metacarpals", "Metacarpals", "Hand Bones", BodyRegion::UpperLimb)
    }

    fn fibula() -> AnatomicalPart {
        part("fibula", "Fibula", "Calf Bone", BodyRegion::LowerLimb)
    }

    #[test]
    fn returns_nothing_for_queries_shorter_than_two_characters() {
        let parts = [femur(), metacarpals()];
        assert!(filter_parts(&parts, "f").is_empty());
        assert!(filter_parts(&parts, " f ").is_empty());
        assert!(filter_parts(&parts, "").is_empty());
    }

    #[test]
    fn matches_only_the_beginning_of_official_names() {
        let parts = [femur(), metacarpals(), fibula()];
        let ids: Vec<_> = filter_parts(&parts, "fe")
            .iter()
            .map(|p| p.id().as_str())
            .collect();
        assert_eq!(ids, ["femur"]);
    }

    #[test]
    fn does_not_match_common_names() {
        let parts = [metacarpals()];
        assert!(filter_parts(&parts, "hand").is_empty());
    }

    #[test]
    fn ignores_case_and_padding() {
        let parts = [femur(), metacarpals(), fibula()];
        let ids: Vec<_> = filter_parts(&parts, "  META ")
            .iter()
            .map(|p| p.id().as_str())
            .collect();
        assert_eq!(ids, ["metacarpals"]);
    }

    #[test]
    fn preserves_input_order() {
        let fenestra = part("fenestra", "Fenestra Vestibuli", "Oval Window", BodyRegion::Head);
        let parts = [fenestra, fibula(), femur()];
        let ids: Vec<_> = filter_parts(&parts, "fe")
            .iter()
            .map(|p| p.id().as_str())
            .collect();
        assert_eq!(ids, ["fenestra", "femur"]);
    }
}
