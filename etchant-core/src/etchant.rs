//! Candidate treatments (etchants) ranked by the matcher.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::field::{Record, status_is_published};

/// Application method that marks an electrolytic etch.
pub const ELECTROLYTIC_METHOD: &str = "electrolytic";

/// Editorial category of an etchant.
///
/// # Examples
/// ```
/// use etchant_core::EtchantCategory;
///
/// assert_eq!(EtchantCategory::parse("Material-Specific"), EtchantCategory::MaterialSpecific);
/// assert_eq!(EtchantCategory::parse("custom").as_str(), "custom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EtchantCategory {
    /// Designed for a specific material family.
    MaterialSpecific,
    /// Niche reagent for detailed work.
    Specialty,
    /// Broadly applicable reagent.
    #[default]
    GeneralPurpose,
    /// Any other category, lowercased.
    Other(String),
}

impl EtchantCategory {
    /// Parse a raw category, lowercasing and trimming it first.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalised = raw.trim().to_lowercase();
        match normalised.as_str() {
            "material-specific" => Self::MaterialSpecific,
            "specialty" => Self::Specialty,
            "general-purpose" | "" => Self::GeneralPurpose,
            _ => Self::Other(normalised),
        }
    }

    /// Return the category key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::MaterialSpecific => "material-specific",
            Self::Specialty => "specialty",
            Self::GeneralPurpose => "general-purpose",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for EtchantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EtchantCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Errors returned when constructing an [`Etchant`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EtchantError {
    /// Neither an id nor a slug was supplied.
    #[error("etchant must have an id or a slug")]
    MissingIdentity,
}

/// A reagent or process that can be applied to a material.
///
/// # Examples
/// ```
/// use etchant_core::{Etchant, EtchantCategory};
///
/// # fn main() -> Result<(), etchant_core::EtchantError> {
/// let nital = Etchant::new(Some("e1"), None, "Nital 2%")?
///     .with_category(EtchantCategory::GeneralPurpose)
///     .with_compatible_materials(["carbon-steel"]);
/// assert!(nital.is_compatible_with("Carbon-Steel"));
/// assert_eq!(nital.key(), "e1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Etchant {
    /// Stable identifier.
    pub id: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Display name.
    pub name: String,
    /// Editorial category.
    pub category: EtchantCategory,
    /// Free-text chemical composition.
    pub composition: String,
    /// Method such as `immersion` or `electrolytic`.
    pub application_method: String,
    /// Features the etchant exposes, usually comma-separated.
    pub reveals: String,
    /// Free-text description of typical results.
    pub typical_results: String,
    /// Other names, in catalog order.
    pub alternative_names: Vec<String>,
    /// Material category keys the etchant suits.
    pub compatible_materials: Vec<String>,
    /// Material category keys the etchant must never be used on.
    pub incompatible_materials: Vec<String>,
    /// Material ids the etchant is documented against.
    pub related_material_ids: Vec<String>,
    /// Referenced standards, e.g. `E407`.
    pub astm_references: Vec<String>,
    /// Hazard tags such as `corrosive` or `toxic`.
    pub hazards: Vec<String>,
    /// Search tags.
    pub tags: Vec<String>,
    /// Whether the etchant is an editorial favourite.
    pub featured: bool,
    /// Whether a pre-mixed product is sold.
    pub pace_product_available: bool,
    /// Typical etch time in seconds.
    pub typical_time_seconds: Option<u32>,
    /// Publication status; `None` counts as published.
    pub status: Option<String>,
    /// Manual ordering key.
    pub sort_order: i64,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

fn contains_key(keys: &[String], key: &str) -> bool {
    let wanted = key.trim();
    keys.iter().any(|k| k.trim().eq_ignore_ascii_case(wanted))
}

impl Etchant {
    /// Validate and construct an [`Etchant`] with empty descriptive fields.
    ///
    /// Blank identifiers are normalised to `None`.
    ///
    /// # Errors
    /// Returns [`EtchantError::MissingIdentity`] when both `id` and `slug`
    /// are absent or blank.
    pub fn new(
        id: Option<&str>,
        slug: Option<&str>,
        name: impl Into<String>,
    ) -> Result<Self, EtchantError> {
        let id = non_blank(id);
        let slug = non_blank(slug);
        if id.is_none() && slug.is_none() {
            return Err(EtchantError::MissingIdentity);
        }
        Ok(Self {
            id,
            slug,
            name: name.into(),
            category: EtchantCategory::default(),
            composition: String::new(),
            application_method: String::new(),
            reveals: String::new(),
            typical_results: String::new(),
            alternative_names: Vec::new(),
            compatible_materials: Vec::new(),
            incompatible_materials: Vec::new(),
            related_material_ids: Vec::new(),
            astm_references: Vec::new(),
            hazards: Vec::new(),
            tags: Vec::new(),
            featured: false,
            pace_product_available: false,
            typical_time_seconds: None,
            status: None,
            sort_order: 0,
        })
    }

    /// Build an etchant from a raw catalog record.
    ///
    /// Malformed fields degrade to empty values.
    ///
    /// # Errors
    /// Returns [`EtchantError::MissingIdentity`] when the record has neither
    /// an `id` nor a `slug`.
    pub fn from_record(record: &Record) -> Result<Self, EtchantError> {
        let id = record.optional_text("id");
        let slug = record.optional_text("slug");
        let mut etchant = Self::new(id.as_deref(), slug.as_deref(), record.text("name"))?;
        etchant.category = EtchantCategory::parse(&record.text("category"));
        etchant.composition = record.text("composition");
        etchant.application_method = record.text("application_method");
        etchant.reveals = record.text("reveals");
        etchant.typical_results = record.text("typical_results");
        etchant.alternative_names = record.sequence("alternative_names");
        etchant.compatible_materials = record.sequence("compatible_materials");
        etchant.incompatible_materials = record.sequence("incompatible_materials");
        etchant.related_material_ids = record.sequence("related_material_ids");
        etchant.astm_references = record.sequence("astm_references");
        etchant.hazards = record.sequence("hazards");
        etchant.tags = record.sequence("tags");
        etchant.featured = record.flag("featured");
        etchant.pace_product_available = record.flag("pace_product_available");
        etchant.typical_time_seconds = record.unsigned("typical_time_seconds");
        etchant.status = record.optional_text("status");
        etchant.sort_order = record.integer("sort_order").unwrap_or_default();
        Ok(etchant)
    }

    /// Return the identifier used to refer to this etchant: the id when
    /// present, otherwise the slug.
    #[must_use]
    pub fn key(&self) -> &str {
        self.id
            .as_deref()
            .or(self.slug.as_deref())
            .unwrap_or_default()
    }

    /// Set the editorial category.
    #[must_use]
    pub fn with_category(mut self, category: EtchantCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the free-text composition.
    #[must_use]
    pub fn with_composition(mut self, composition: impl Into<String>) -> Self {
        self.composition = composition.into();
        self
    }

    /// Set the application method.
    #[must_use]
    pub fn with_application_method(mut self, method: impl Into<String>) -> Self {
        self.application_method = method.into();
        self
    }

    /// Set the revealed features.
    #[must_use]
    pub fn with_reveals(mut self, reveals: impl Into<String>) -> Self {
        self.reveals = reveals.into();
        self
    }

    /// Set the typical results text.
    #[must_use]
    pub fn with_typical_results(mut self, results: impl Into<String>) -> Self {
        self.typical_results = results.into();
        self
    }

    /// Set the alternative names.
    #[must_use]
    pub fn with_alternative_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternative_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the compatible material category keys.
    #[must_use]
    pub fn with_compatible_materials<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatible_materials = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the incompatible material category keys.
    #[must_use]
    pub fn with_incompatible_materials<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incompatible_materials = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the directly linked material ids.
    #[must_use]
    pub fn with_related_material_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_material_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ASTM references.
    #[must_use]
    pub fn with_astm_references<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.astm_references = refs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hazard tags.
    #[must_use]
    pub fn with_hazards<I, S>(mut self, hazards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hazards = hazards.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the etchant as featured.
    #[must_use]
    pub const fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Mark a pre-mixed product as available.
    #[must_use]
    pub const fn with_premixed_product(mut self, available: bool) -> Self {
        self.pace_product_available = available;
        self
    }

    /// Set the typical etch time.
    #[must_use]
    pub const fn with_typical_time(mut self, seconds: u32) -> Self {
        self.typical_time_seconds = Some(seconds);
        self
    }

    /// Set the publication status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Report whether `category` is listed as compatible.
    #[must_use]
    pub fn is_compatible_with(&self, category: &str) -> bool {
        contains_key(&self.compatible_materials, category)
    }

    /// Report whether `category` is listed as incompatible.
    #[must_use]
    pub fn is_incompatible_with(&self, category: &str) -> bool {
        contains_key(&self.incompatible_materials, category)
    }

    /// Report whether the etchant is applied electrolytically.
    #[must_use]
    pub fn is_electrolytic(&self) -> bool {
        self.application_method
            .trim()
            .eq_ignore_ascii_case(ELECTROLYTIC_METHOD)
    }

    /// Report whether any ASTM standard is referenced.
    #[must_use]
    pub fn has_astm_reference(&self) -> bool {
        !self.astm_references.is_empty()
    }

    /// Return the first ASTM reference, if any.
    #[must_use]
    pub fn primary_astm_reference(&self) -> Option<&str> {
        self.astm_references.first().map(String::as_str)
    }

    /// Report whether `hazard` appears among the hazard tags.
    #[must_use]
    pub fn has_hazard(&self, hazard: &str) -> bool {
        contains_key(&self.hazards, hazard)
    }

    /// Count the comma-separated segments of [`Etchant::reveals`].
    ///
    /// An empty string still counts as one segment.
    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.reveals.split(',').count()
    }

    /// Report whether the etchant passes the publication gate.
    #[must_use]
    pub fn is_published(&self) -> bool {
        status_is_published(self.status.as_deref())
    }
}
