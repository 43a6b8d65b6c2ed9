//! Test fixtures shared by unit and end-to-end tests.
//!
//! The fixture catalog is deliberately tiny so expected seeds and hints can
//! be worked out by hand:
//!
//! | index | id | system | region |
//! |---|---|---|---|
//! | 0 | femur | skeletal | lower_limb |
//! | 1 | metacarpals | skeletal | upper_limb |
//! | 2 | fibula | skeletal | lower_limb |

use chrono::{DateTime, TimeZone, Utc};
use skeledle_domain::{
    AnatomicalPart, BodyRegion, BodySystem, Catalog, DiagramReference, PartId, PartName,
};

pub fn part(
    id: &str,
    name: &str,
    common_name: &str,
    system: BodySystem,
    region: BodyRegion,
    elements: &[&str],
) -> AnatomicalPart {
    AnatomicalPart::new(
        PartId::new(id).expect("fixture id"),
        PartName::new(name).expect("fixture name"),
        common_name,
        system,
        region,
        DiagramReference::on_default_asset(elements.iter().copied()).expect("fixture elements"),
    )
}

pub fn femur() -> AnatomicalPart {
    part(
        "femur",
        "Femur",
        "Thigh Bone",
        BodySystem::Skeletal,
        BodyRegion::LowerLimb,
        &["FemurLeft"],
    )
    .with_aliases(["thigh bone"])
}

pub fn metacarpals() -> AnatomicalPart {
    part(
        "metacarpals",
        "Metacarpals",
        "Hand Bones",
        BodySystem::Skeletal,
        BodyRegion::UpperLimb,
        &["MetacarpalsLeft", "MetacarpalsRight"],
    )
    .with_aliases(["hand bones"])
}

pub fn fibula() -> AnatomicalPart {
    part(
        "fibula",
        "Fibula",
        "Calf Bone",
        BodySystem::Skeletal,
        BodyRegion::LowerLimb,
        &["FibulaLeft", "FibulaRight"],
    )
    .with_aliases(["calf bone"])
}

pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![femur(), metacarpals(), fibula()]).expect("fixture catalog")
}

/// UTC timestamp on the hour.
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}
