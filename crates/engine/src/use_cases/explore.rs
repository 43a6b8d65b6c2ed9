//! Explore use cases.
//!
//! Browsing the diagrams outside of a round: which diagrams exist, which
//! parts each one shows, and which part a pointed-at element belongs to.

use std::sync::Arc;

use skeledle_domain::{diagram_label, AnatomicalPart, Catalog};

/// A diagram asset and how many parts it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSummary {
    pub asset: String,
    pub label: String,
    pub part_count: usize,
}

pub struct ExploreDiagrams {
    catalog: Arc<Catalog>,
}

impl ExploreDiagrams {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Every diagram referenced by the catalog, in first-seen order.
    pub fn diagrams(&self) -> Vec<DiagramSummary> {
        self.catalog
            .diagrams()
            .into_iter()
            .map(|asset| DiagramSummary {
                asset: asset.to_string(),
                label: diagram_label(Some(asset)),
                part_count: self.catalog.on_diagram(asset).len(),
            })
            .collect()
    }

    pub fn parts_on(&self, asset: &str) -> Vec<&AnatomicalPart> {
        self.catalog.on_diagram(asset)
    }

    /// Part highlighted by a diagram element, if any.
    pub fn part_at(&self, element_id: &str) -> Option<&AnatomicalPart> {
        let part = self.catalog.by_diagram_element(element_id);
        if part.is_none() {
            tracing::debug!(element_id, "No part drawn by element");
        }
        part
    }
}
