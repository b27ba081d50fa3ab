//! Loaded catalog snapshot with material lookup and search.

use std::collections::HashSet;

use etchant_core::{Etchant, Material, MaterialCategory};
use log::{info, warn};

use crate::error::CatalogError;
use crate::source::CatalogSource;

/// Default number of materials returned by [`Catalog::search_materials`].
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// An immutable snapshot of published materials and etchants.
///
/// Matching borrows [`Catalog::etchants`]; the snapshot is never mutated
/// after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    materials: Vec<Material>,
    etchants: Vec<Etchant>,
}

impl Catalog {
    /// Load both datasets from `source`.
    ///
    /// # Errors
    /// Propagates [`CatalogError`] from the source.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let catalog = Self::from_parts(source.fetch_materials()?, source.fetch_candidates()?);
        info!(
            "loaded {} materials and {} etchants",
            catalog.materials.len(),
            catalog.etchants.len()
        );
        Ok(catalog)
    }

    /// Build a snapshot from already converted values.
    ///
    /// Unpublished entries are dropped. When several materials share an id
    /// the first wins.
    #[must_use]
    pub fn from_parts(materials: Vec<Material>, etchants: Vec<Etchant>) -> Self {
        let mut seen = HashSet::new();
        let materials = materials
            .into_iter()
            .filter(Material::is_published)
            .filter(|material| {
                let fresh = seen.insert(material.id.clone());
                if !fresh {
                    warn!(
                        "dropping duplicate material id '{}' ({})",
                        material.id, material.name
                    );
                }
                fresh
            })
            .collect();
        let etchants = etchants.into_iter().filter(Etchant::is_published).collect();
        Self {
            materials,
            etchants,
        }
    }

    /// Materials in catalog order.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Etchants in catalog order.
    #[must_use]
    pub fn etchants(&self) -> &[Etchant] {
        &self.etchants
    }

    /// Resolve `key` as an exact id, then a slug, then a case-insensitive
    /// name.
    #[must_use]
    pub fn find_material(&self, key: &str) -> Option<&Material> {
        let wanted = key.trim();
        self.materials
            .iter()
            .find(|material| material.id == wanted)
            .or_else(|| {
                self.materials
                    .iter()
                    .find(|material| material.slug.as_deref() == Some(wanted))
            })
            .or_else(|| {
                self.materials
                    .iter()
                    .find(|material| material.name.trim().eq_ignore_ascii_case(wanted))
            })
    }

    /// The first material whose derived category is `category`.
    #[must_use]
    pub fn first_in_category(&self, category: &MaterialCategory) -> Option<&Material> {
        self.materials
            .iter()
            .find(|material| MaterialCategory::derive(material) == *category)
    }

    /// Search materials for `query`.
    ///
    /// A blank query lists featured materials first, then ascending
    /// `sort_order`. Otherwise the query is matched case-insensitively
    /// against name, category, composition, alternative names and tags,
    /// keeping catalog order. At most `limit` materials are returned.
    ///
    /// # Examples
    /// ```
    /// use etchant_core::test_support::material_catalog;
    /// use etchant_data::Catalog;
    ///
    /// let catalog = Catalog::from_parts(material_catalog(), Vec::new());
    /// let found = catalog.search_materials("stainless", 20);
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].id, "ss-304");
    /// ```
    #[must_use]
    pub fn search_materials(&self, query: &str, limit: usize) -> Vec<&Material> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            let mut listed: Vec<&Material> = self.materials.iter().collect();
            listed.sort_by_key(|material| (!material.featured, material.sort_order));
            listed.truncate(limit);
            return listed;
        }
        self.materials
            .iter()
            .filter(|material| material_mentions(material, &needle))
            .take(limit)
            .collect()
    }
}

fn material_mentions(material: &Material, needle: &str) -> bool {
    let has = |text: &str| text.to_lowercase().contains(needle);
    has(&material.name)
        || has(&material.category)
        || has(&material.composition)
        || material.alternative_names.iter().any(|alt| has(alt))
        || material.tags.iter().any(|tag| has(tag))
}
