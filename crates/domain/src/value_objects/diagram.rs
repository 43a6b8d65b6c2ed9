//! Diagram references - where a part is drawn
//!
//! A part is highlighted by one or more element ids inside a single diagram
//! asset. Bilateral structures (left and right clavicle) list both elements;
//! selecting either one identifies the part.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Asset used when a catalog record does not name one.
pub const DEFAULT_DIAGRAM_ASSET: &str = "/anatomical-images/Human_skeleton_front_-_no_labels.svg";

const DEFAULT_LABEL: &str = "Anatomy Diagram";

const LABEL_OVERRIDES: &[(&str, &str)] = &[
    (DEFAULT_DIAGRAM_ASSET, "Full Skeleton (Front)"),
    ("/anatomical-images/hand_diagram.svg", "Hand Anatomy"),
];

/// Location of a part on a diagram asset.
///
/// # Invariants
///
/// - `elements` is non-empty and holds no blank ids
/// - `asset` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DiagramReferenceRaw", into = "DiagramReferenceRaw")]
pub struct DiagramReference {
    asset: String,
    elements: Vec<String>,
}

impl DiagramReference {
    /// Create a reference into `asset`.
    ///
    /// Element ids are trimmed; blank ids are dropped before the
    /// non-empty check.
    pub fn new(
        asset: impl Into<String>,
        elements: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let asset = asset.into().trim().to_string();
        if asset.is_empty() {
            return Err(DomainError::validation("Diagram asset cannot be empty"));
        }
        let elements: Vec<String> = elements
            .into_iter()
            .map(|e| e.into().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if elements.is_empty() {
            return Err(DomainError::validation(
                "Diagram reference needs at least one element id",
            ));
        }
        Ok(Self { asset, elements })
    }

    /// Reference into the default full-skeleton diagram.
    pub fn on_default_asset(
        elements: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        Self::new(DEFAULT_DIAGRAM_ASSET, elements)
    }

    #[inline]
    pub fn asset(&self) -> &str {
        &self.asset
    }

    #[inline]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// True if `element_id` is one of this part's highlightable elements.
    pub fn contains(&self, element_id: &str) -> bool {
        self.elements.iter().any(|e| e == element_id)
    }

    /// Friendly label of the asset this reference points into.
    pub fn label(&self) -> String {
        diagram_label(Some(&self.asset))
    }
}

#[derive(Serialize, Deserialize)]
struct DiagramReferenceRaw {
    asset: String,
    elements: Vec<String>,
}

impl TryFrom<DiagramReferenceRaw> for DiagramReference {
    type Error = DomainError;

    fn try_from(raw: DiagramReferenceRaw) -> Result<Self, Self::Error> {
        Self::new(raw.asset, raw.elements)
    }
}

impl From<DiagramReference> for DiagramReferenceRaw {
    fn from(reference: DiagramReference) -> Self {
        Self {
            asset: reference.asset,
            elements: reference.elements,
        }
    }
}

/// Human-readable label for a diagram asset path.
///
/// Known assets have fixed labels. Anything else is title-cased from its file
/// name: the `.svg` extension is dropped and runs of `-`/`_` become spaces.
///
/// ```
/// use skeledle_domain::diagram_label;
///
/// assert_eq!(diagram_label(Some("/anatomical-images/hand_diagram.svg")), "Hand Anatomy");
/// assert_eq!(diagram_label(Some("/img/skull-side_view.SVG")), "Skull Side View");
/// assert_eq!(diagram_label(None), "Anatomy Diagram");
/// ```
pub fn diagram_label(asset: Option<&str>) -> String {
    let Some(asset) = asset.filter(|a| !a.is_empty()) else {
        return DEFAULT_LABEL.to_string();
    };

    if let Some((_, label)) = LABEL_OVERRIDES.iter().find(|(path, _)| *path == asset) {
        return (*label).to_string();
    }

    let filename = asset.rsplit('/').next().unwrap_or(asset);
    let without_ext = strip_svg_extension(filename);

    let mut cleaned = String::with_capacity(without_ext.len());
    let mut in_separator = false;
    for c in without_ext.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                cleaned.push(' ');
            }
            in_separator = true;
        } else {
            cleaned.push(c);
            in_separator = false;
        }
    }
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return DEFAULT_LABEL.to_string();
    }

    cleaned
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_svg_extension(filename: &str) -> &str {
    let len = filename.len();
    if len >= 4 && filename.is_char_boundary(len - 4) {
        let (stem, ext) = filename.split_at(len - 4);
        if ext.eq_ignore_ascii_case(".svg") {
            return stem;
        }
    }
    filename
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
