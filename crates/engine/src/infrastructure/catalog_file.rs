//! Catalog loading from JSON.
//!
//! The record format is the one authored by the diagram annotation tool:
//!
//! ```json
//! {
//!   "id": "clavicle",
//!   "name": "Clavicle",
//!   "commonName": "Collarbone",
//!   "system": "skeletal",
//!   "region": "thorax",
//!   "svgPath": ["ClavicleLeft", "ClavicleRight"],
//!   "aliases": ["collarbone"],
//!   "svgFile": "/anatomical-images/Human_skeleton_front_-_no_labels.svg"
//! }
//! ```
//!
//! `svgPath` may be a single element id or a list; `svgFile` defaults to the
//! full-skeleton diagram. Loading fails on the first invalid record, on
//! duplicate ids, and on an empty file: a catalog that cannot serve a round
//! must stop the process at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skeledle_domain::common::none_if_empty;
use skeledle_domain::{
    AnatomicalPart, BodyRegion, BodySystem, Catalog, DiagramReference, DomainError, PartId,
    PartName, DEFAULT_DIAGRAM_ASSET,
};

use super::config::EngineConfig;

const STARTER_CATALOG: &str = include_str!("../../data/starter_catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid part record #{index} ({id}): {source}")]
    Record {
        index: usize,
        id: String,
        #[source]
        source: DomainError,
    },
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] DomainError),
}

/// Element id(s) of a part on its diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SvgPath {
    One(String),
    Many(Vec<String>),
}

impl SvgPath {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SvgPath::One(id) => vec![id],
            SvgPath::Many(ids) => ids,
        }
    }
}

/// One part as stored in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub common_name: String,
    pub system: BodySystem,
    pub region: BodyRegion,
    pub svg_path: SvgPath,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_file: Option<String>,
}

impl PartRecord {
    /// Validate the record and build the domain part.
    pub fn into_part(self) -> Result<AnatomicalPart, DomainError> {
        let asset = self
            .svg_file
            .as_deref()
            .map(str::trim)
            .and_then(none_if_empty)
            .unwrap_or(DEFAULT_DIAGRAM_ASSET)
            .to_string();

        Ok(AnatomicalPart::new(
            PartId::new(self.id)?,
            PartName::new(self.name)?,
            self.common_name,
            self.system,
            self.region,
            DiagramReference::new(asset, self.svg_path.into_vec())?,
        )
        .with_aliases(self.aliases))
    }
}

/// Parse a JSON array of part records into a catalog.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let records: Vec<PartRecord> = serde_json::from_str(json)?;
    let mut parts = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let id = record.id.clone();
        let part = record
            .into_part()
            .map_err(|source| CatalogLoadError::Record { index, id, source })?;
        parts.push(part);
    }
    Ok(Catalog::new(parts)?)
}

/// Read and parse a catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

/// The catalog compiled into the binary.
pub fn starter_catalog() -> Result<Catalog, CatalogLoadError> {
    parse_catalog(STARTER_CATALOG)
}

/// Load the configured catalog, or the starter catalog when none is set.
pub fn load_catalog(config: &EngineConfig) -> Result<Catalog, CatalogLoadError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = load_catalog_file(path)?;
            tracing::info!(path = %path.display(), parts = catalog.len(), "Loaded catalog file");
            catalog
        }
        None => {
            let catalog = starter_catalog()?;
            tracing::info!(parts = catalog.len(), "Loaded embedded starter catalog");
            catalog
        }
    };
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn starter_catalog_loads() {
        let catalog = starter_catalog().unwrap();
        assert_eq!(catalog.len(), 29);
        assert_eq!(catalog.all()[0].id().as_str(), "skull");

        let clavicle = catalog.get("clavicle").unwrap();
        assert_eq!(
            clavicle.diagram().elements(),
            ["ClavicleLeft", "ClavicleRight"]
        );
        assert_eq!(clavicle.diagram().asset(), DEFAULT_DIAGRAM_ASSET);

        let thumb = catalog.get("distal-phalanx-thumb").unwrap();
        assert_eq!(thumb.diagram().label(), "Hand Anatomy");
        assert_eq!(thumb.region(), BodyRegion::UpperLimb);
    }

    #[test]
    fn single_svg_path_and_defaults() {
        let json = r#"[{"id":"femur","name":"Femur","system":"skeletal","region":"lower_limb","svgPath":"FemurLeft"}]"#;
        let catalog = parse_catalog(json).unwrap();
        let femur = catalog.get("femur").unwrap();
        assert_eq!(femur.diagram().elements(), ["FemurLeft"]);
        assert_eq!(femur.common_name(), "");
        assert!(femur.aliases().is_empty());
    }

    #[test]
    fn blank_svg_file_uses_default_asset() {
        let json = r#"[{"id":"femur","name":"Femur","system":"skeletal","region":"lower_limb","svgPath":"FemurLeft","svgFile":" "}]"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(
            catalog.get("femur").unwrap().diagram().asset(),
            DEFAULT_DIAGRAM_ASSET
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = parse_catalog("[]").unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Catalog(DomainError::EmptyCatalog)
        ));
    }

    #[test]
    fn invalid_record_reports_position() {
        let json = r#"[
            {"id":"femur","name":"Femur","system":"skeletal","region":"lower_limb","svgPath":"FemurLeft"},
            {"id":"ghost","name":"  ","system":"skeletal","region":"lower_limb","svgPath":"Ghost"}
        ]"#;
        let err = parse_catalog(json).unwrap_err();
        match err {
            CatalogLoadError::Record { index, id, .. } => {
                assert_eq!(index, 1);
                assert_eq!(id, "ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_svg_path_list_is_rejected() {
        let json = r#"[{"id":"femur","name":"Femur","system":"skeletal","region":"lower_limb","svgPath":[]}]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogLoadError::Record { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"femur","name":"Femur","system":"skeletal","region":"lower_limb","svgPath":"A"},
            {"id":"femur","name":"Femur","system":"skeletal","region":"lower_limb","svgPath":"B"}
        ]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogLoadError::Catalog(DomainError::DuplicateId(_)))
        ));
    }

    #[test]
    fn unknown_region_is_a_json_error() {
        let json = r#"[{"id":"femur","name":"Femur","system":"skeletal","region":"leg","svgPath":"A"}]"#;
        assert!(matches!(parse_catalog(json), Err(CatalogLoadError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"tibia","name":"Tibia","commonName":"Shin Bone","system":"skeletal","region":"lower_limb","svgPath":["TibiaLeft","TibiaRight"]}}]"#
        )
        .unwrap();

        let config = EngineConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..EngineConfig::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("tibia").unwrap().common_name(), "Shin Bone");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
