//! Materials that etchants are matched against.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::field::{Record, status_is_published};

/// Coarse hardness classification attached to a material.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use etchant_core::HardnessCategory;
///
/// assert_eq!(HardnessCategory::from_str("Very Hard"), Ok(HardnessCategory::VeryHard));
/// assert_eq!(HardnessCategory::Soft.as_str(), "soft");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardnessCategory {
    /// Soft materials that over-etch easily.
    Soft,
    /// Medium hardness.
    Medium,
    /// Hard materials.
    Hard,
    /// Very hard materials that resist etching.
    VeryHard,
}

impl HardnessCategory {
    /// Return the category as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very-hard",
        }
    }

    /// Report whether the category is `hard` or `very-hard`.
    #[must_use]
    pub const fn is_hard(self) -> bool {
        matches!(self, Self::Hard | Self::VeryHard)
    }

    /// Report whether the category is `soft` or `medium`.
    #[must_use]
    pub const fn is_soft(self) -> bool {
        matches!(self, Self::Soft | Self::Medium)
    }
}

impl fmt::Display for HardnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a hardness category is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown hardness category '{0}'")]
pub struct UnknownHardness(pub String);

impl FromStr for HardnessCategory {
    type Err = UnknownHardness;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalised.as_str() {
            "soft" => Ok(Self::Soft),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "very-hard" => Ok(Self::VeryHard),
            _ => Err(UnknownHardness(s.to_owned())),
        }
    }
}

/// Errors returned when constructing a [`Material`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    /// The identifier was empty.
    #[error("material must have a non-empty id")]
    MissingId,
}

/// A substance to be etched.
///
/// All descriptive fields are free text and may be empty; they are the only
/// semantic signal the matcher has.
///
/// # Examples
/// ```
/// use etchant_core::{HardnessCategory, Material};
///
/// # fn main() -> Result<(), etchant_core::MaterialError> {
/// let material = Material::new("4140", "AISI 4140")?
///     .with_category("Carbon Steel")
///     .with_composition("Fe, 0.40 C, Cr, Mo")
///     .with_hardness(HardnessCategory::Hard);
/// assert_eq!(material.id, "4140");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    /// Stable unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug, if the catalog provides one.
    pub slug: Option<String>,
    /// Free-form category such as `"Carbon Steel"`.
    pub category: String,
    /// Free-text composition, e.g. `"Fe, 0.40 C, Cr, Mo"`.
    pub composition: String,
    /// Free-text description of the expected microstructure.
    pub microstructure: String,
    /// Free-text heat-treatment condition.
    pub heat_treatment: String,
    /// Coarse hardness classification.
    pub hardness_category: Option<HardnessCategory>,
    /// Etchant names documented as working well for this material.
    pub common_etchants: Vec<String>,
    /// Other names for the material.
    pub alternative_names: Vec<String>,
    /// Search tags.
    pub tags: Vec<String>,
    /// Publication status; `None` counts as published.
    pub status: Option<String>,
    /// Whether the material is promoted in selection lists.
    pub featured: bool,
    /// Manual ordering key for selection lists.
    pub sort_order: i64,
}

impl Material {
    /// Validate and construct a [`Material`] with empty descriptive fields.
    ///
    /// # Errors
    /// Returns [`MaterialError::MissingId`] when `id` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, MaterialError> {
        let id = id.into().trim().to_owned();
        if id.is_empty() {
            return Err(MaterialError::MissingId);
        }
        Ok(Self {
            id,
            name: name.into(),
            slug: None,
            category: String::new(),
            composition: String::new(),
            microstructure: String::new(),
            heat_treatment: String::new(),
            hardness_category: None,
            common_etchants: Vec::new(),
            alternative_names: Vec::new(),
            tags: Vec::new(),
            status: None,
            featured: false,
            sort_order: 0,
        })
    }

    /// Build a material from a raw catalog record.
    ///
    /// Unknown hardness values are treated as absent.
    ///
    /// # Errors
    /// Returns [`MaterialError::MissingId`] when the record has no `id`.
    pub fn from_record(record: &Record) -> Result<Self, MaterialError> {
        let mut material = Self::new(record.text("id"), record.text("name"))?;
        material.slug = record.optional_text("slug");
        material.category = record.text("category");
        material.composition = record.text("composition");
        material.microstructure = record.text("microstructure");
        material.heat_treatment = record.text("heat_treatment");
        material.hardness_category = record
            .optional_text("hardness_category")
            .and_then(|raw| raw.parse().ok());
        material.common_etchants = record.sequence("common_etchants");
        material.alternative_names = record.sequence("alternative_names");
        material.tags = record.sequence("tags");
        material.status = record.optional_text("status");
        material.featured = record.flag("featured");
        material.sort_order = record.integer("sort_order").unwrap_or_default();
        Ok(material)
    }

    /// Set the free-form category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the free-text composition.
    #[must_use]
    pub fn with_composition(mut self, composition: impl Into<String>) -> Self {
        self.composition = composition.into();
        self
    }

    /// Set the free-text microstructure.
    #[must_use]
    pub fn with_microstructure(mut self, microstructure: impl Into<String>) -> Self {
        self.microstructure = microstructure.into();
        self
    }

    /// Set the free-text heat-treatment condition.
    #[must_use]
    pub fn with_heat_treatment(mut self, heat_treatment: impl Into<String>) -> Self {
        self.heat_treatment = heat_treatment.into();
        self
    }

    /// Set the hardness classification.
    #[must_use]
    pub const fn with_hardness(mut self, hardness: HardnessCategory) -> Self {
        self.hardness_category = Some(hardness);
        self
    }

    /// Set the documented common etchants.
    #[must_use]
    pub fn with_common_etchants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_etchants = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the publication status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Report whether the material passes the publication gate.
    #[must_use]
    pub fn is_published(&self) -> bool {
        status_is_published(self.status.as_deref())
    }
}
