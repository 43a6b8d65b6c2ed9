//! Catalog - the fixed, read-only set of anatomical parts
//!
//! A catalog is built once from loaded records and never mutated afterwards,
//! so it can be shared behind an `Arc` and read from anywhere without locks.
//!
//! # Invariants
//!
//! - At least one part (an empty catalog is rejected at construction)
//! - Part ids are unique
//! - Iteration order is load order; every query preserves it

use std::collections::HashMap;

use crate::common::normalize;
use crate::error::DomainError;
use crate::AnatomicalPart;

#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<AnatomicalPart>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from parts in load order.
    ///
    /// # Errors
    ///
    /// - `DomainError::EmptyCatalog` if `parts` is empty
    /// - `DomainError::DuplicateId` if two parts share an id
    pub fn new(parts: Vec<AnatomicalPart>) -> Result<Self, DomainError> {
        if parts.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(parts.len());
        for (position, part) in parts.iter().enumerate() {
            if index
                .insert(part.id().as_str().to_string(), position)
                .is_some()
            {
                return Err(DomainError::duplicate_id(part.id().as_str()));
            }
        }

        Ok(Self { parts, index })
    }

    /// Number of parts. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Every part, in load order.
    #[inline]
    pub fn all(&self) -> &[AnatomicalPart] {
        &self.parts
    }

    /// Look up a part by id. Unknown ids are an ordinary `None`.
    pub fn get(&self, id: &str) -> Option<&AnatomicalPart> {
        self.index.get(id.trim()).map(|&i| &self.parts[i])
    }

    /// Parts whose canonical name starts with `query`, ignoring case and
    /// surrounding whitespace.
    ///
    /// Common names and aliases are never searched. An empty query (after
    /// trimming) matches nothing; use [`Catalog::all`] to list parts.
    pub fn search_by_prefix(&self, query: &str) -> Vec<&AnatomicalPart> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.parts
            .iter()
            .filter(|part| part.name_starts_with(&query))
            .collect()
    }

    /// Pick a part with a caller-supplied index source.
    ///
    /// `pick` receives the catalog length and should return an index in
    /// `0..len`; out-of-range answers are wrapped. The engine passes a
    /// uniform RNG here.
    pub fn random_with(&self, pick: impl FnOnce(usize) -> usize) -> &AnatomicalPart {
        let len = self.parts.len();
        &self.parts[pick(len) % len]
    }

    /// Deterministic pick: the part at `seed mod len`.
    pub fn by_seed(&self, seed: u64) -> &AnatomicalPart {
        let len = self.parts.len() as u64;
        // The remainder is < len, which came from a usize
        let index = (seed % len) as usize;
        &self.parts[index]
    }

    /// First part (in catalog order) drawn by the given diagram element.
    pub fn by_diagram_element(&self, element_id: &str) -> Option<&AnatomicalPart> {
        let element_id = element_id.trim();
        self.parts
            .iter()
            .find(|part| part.diagram().contains(element_id))
    }

    /// Parts drawn on one diagram asset, in catalog order.
    pub fn on_diagram(&self, asset: &str) -> Vec<&AnatomicalPart> {
        self.parts
            .iter()
            .filter(|part| part.diagram().asset() == asset)
            .collect()
    }

    /// Distinct diagram assets, in order of first appearance.
    pub fn diagrams(&self) -> Vec<&str> {
        let mut assets: Vec<&str> = Vec::new();
        for part in &self.parts {
            let asset = part.diagram().asset();
            if !assets.contains(&asset) {
                assets.push(asset);
            }
        }
        assets
    }
}
