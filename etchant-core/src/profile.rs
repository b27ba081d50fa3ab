//! Semantic attributes derived from a material's free-text fields.
//!
//! Every extractor is case-insensitive substring matching. The rules are
//! intentionally leaky: `"cr"` matches any word containing those letters. A
//! [`MaterialProfile`] is derived once per match invocation and shared by
//! every candidate.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::Material;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Normalised material family.
///
/// # Examples
/// ```
/// use etchant_core::{Material, MaterialCategory};
///
/// # fn main() -> Result<(), etchant_core::MaterialError> {
/// let alloy = Material::new("6061", "6061-T6")?.with_category("Aluminum 6061");
/// assert_eq!(MaterialCategory::derive(&alloy), MaterialCategory::Aluminum);
///
/// let odd = Material::new("x", "Zircaloy")?.with_category("Zirconium");
/// assert_eq!(MaterialCategory::derive(&odd).as_str(), "zirconium");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaterialCategory {
    /// Carbon and low-alloy steels.
    CarbonSteel,
    /// Stainless steels.
    StainlessSteel,
    /// Aluminium alloys.
    Aluminum,
    /// Copper and brass.
    CopperBrass,
    /// Titanium alloys.
    Titanium,
    /// Nickel alloys and superalloys.
    NickelAlloys,
    /// Cast irons.
    CastIron,
    /// The raw lowercased category when nothing else matched.
    Other(String),
}

impl MaterialCategory {
    /// Every named family, in quick-select order.
    pub const NAMED: [Self; 7] = [
        Self::CarbonSteel,
        Self::StainlessSteel,
        Self::Aluminum,
        Self::Titanium,
        Self::CopperBrass,
        Self::NickelAlloys,
        Self::CastIron,
    ];

    /// Derive the family of `material`. First match wins.
    #[must_use]
    pub fn derive(material: &Material) -> Self {
        let category = material.category.to_lowercase();
        let name = material.name.to_lowercase();

        if contains_any(&category, &["carbon", "low alloy"]) || name.contains("carbon steel") {
            Self::CarbonSteel
        } else if category.contains("stainless") || name.contains("stainless") {
            Self::StainlessSteel
        } else if category.contains("aluminum") || contains_any(&name, &["aluminum", "aluminium"])
        {
            Self::Aluminum
        } else if contains_any(&category, &["copper", "brass"])
            || contains_any(&name, &["copper", "brass"])
        {
            Self::CopperBrass
        } else if category.contains("titanium") || name.contains("titanium") {
            Self::Titanium
        } else if category.contains("nickel") || contains_any(&name, &["nickel", "inconel"]) {
            Self::NickelAlloys
        } else if category.contains("cast iron") || name.contains("cast iron") {
            Self::CastIron
        } else {
            Self::Other(category)
        }
    }

    /// Return the category key compared against etchant compatibility lists.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CarbonSteel => "carbon-steel",
            Self::StainlessSteel => "stainless-steel",
            Self::Aluminum => "aluminum",
            Self::CopperBrass => "copper-brass",
            Self::Titanium => "titanium",
            Self::NickelAlloys => "nickel-alloys",
            Self::CastIron => "cast-iron",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label for named families.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::CarbonSteel => "Carbon Steel",
            Self::StainlessSteel => "Stainless Steel",
            Self::Aluminum => "Aluminum",
            Self::CopperBrass => "Copper/Brass",
            Self::Titanium => "Titanium",
            Self::NickelAlloys => "Nickel Alloys",
            Self::CastIron => "Cast Iron",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MaterialCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Estimated carbon level read from composition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarbonContent {
    /// Tokens `0.6` to `0.9` or `1.`.
    High,
    /// Tokens `0.3` to `0.5`.
    Medium,
    /// Tokens `0.1`, `0.2` or `low carbon`.
    Low,
    /// No recognisable token.
    Unknown,
}

/// Alloying elements mentioned in a material's composition or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositionFlags {
    /// Chromium, or a stainless name.
    pub chromium: bool,
    /// Nickel, or an Inconel/Monel name.
    pub nickel: bool,
    /// Molybdenum.
    pub molybdenum: bool,
    /// Titanium.
    pub titanium: bool,
    /// Aluminium.
    pub aluminum: bool,
    /// Copper, or a brass/bronze name.
    pub copper: bool,
    /// Carbon classification.
    pub carbon: CarbonContent,
}

impl CompositionFlags {
    /// Analyse the composition and name of `material`.
    #[must_use]
    pub fn derive(material: &Material) -> Self {
        let name = material.name.to_lowercase();
        let comp = format!("{} {}", material.composition, material.name).to_lowercase();

        let carbon = if contains_any(&comp, &["0.6", "0.7", "0.8", "0.9", "1."]) {
            CarbonContent::High
        } else if contains_any(&comp, &["0.3", "0.4", "0.5"]) {
            CarbonContent::Medium
        } else if contains_any(&comp, &["0.1", "0.2", "low carbon"]) {
            CarbonContent::Low
        } else {
            CarbonContent::Unknown
        };

        Self {
            chromium: contains_any(&comp, &["cr", "chromium"]) || name.contains("stainless"),
            nickel: contains_any(&comp, &["ni", "nickel"])
                || contains_any(&name, &["inconel", "monel"]),
            molybdenum: contains_any(&comp, &["mo", "molybdenum"]),
            titanium: contains_any(&comp, &["ti", "titanium"]),
            aluminum: contains_any(&comp, &["al", "aluminum", "aluminium"]),
            copper: comp.contains("cu")
                || comp.contains("copper")
                || contains_any(&name, &["brass", "bronze"]),
            carbon,
        }
    }
}

/// Microstructure type named in a material's description or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Microstructure {
    /// Martensite.
    Martensitic,
    /// Austenite.
    Austenitic,
    /// Ferrite.
    Ferritic,
    /// Pearlite.
    Pearlitic,
    /// Bainite.
    Bainitic,
    /// Duplex ferrite/austenite.
    Duplex,
}

impl Microstructure {
    const PATTERNS: [(Self, &'static [&'static str]); 6] = [
        (Self::Martensitic, &["martensite", "martensitic"]),
        (Self::Austenitic, &["austenite", "austenitic"]),
        (Self::Ferritic, &["ferrite", "ferritic"]),
        (Self::Pearlitic, &["pearlite", "pearlitic"]),
        (Self::Bainitic, &["bainite", "bainitic"]),
        (Self::Duplex, &["duplex"]),
    ];

    /// Every type mentioned by `material`'s microstructure or name.
    #[must_use]
    pub fn derive(material: &Material) -> BTreeSet<Self> {
        let text = format!("{} {}", material.microstructure, material.name).to_lowercase();
        Self::PATTERNS
            .into_iter()
            .filter(|(_, needles)| contains_any(&text, needles))
            .map(|(kind, _)| kind)
            .collect()
    }
}

/// Heat-treatment condition named in a material's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatTreatmentState {
    /// Annealed.
    Annealed,
    /// Quenched.
    Quenched,
    /// Tempered.
    Tempered,
    /// Normalized.
    Normalized,
    /// Solution treated.
    SolutionTreated,
    /// Age hardened.
    Aged,
    /// Stress relieved.
    StressRelieved,
}

impl HeatTreatmentState {
    const PATTERNS: [(Self, &'static str); 7] = [
        (Self::Annealed, "anneal"),
        (Self::Quenched, "quench"),
        (Self::Tempered, "temper"),
        (Self::Normalized, "normaliz"),
        (Self::SolutionTreated, "solution"),
        (Self::Aged, "age"),
        (Self::StressRelieved, "stress"),
    ];

    /// Every state mentioned by `material`'s heat-treatment field.
    #[must_use]
    pub fn derive(material: &Material) -> BTreeSet<Self> {
        let text = material.heat_treatment.to_lowercase();
        Self::PATTERNS
            .into_iter()
            .filter(|(_, needle)| text.contains(needle))
            .map(|(state, _)| state)
            .collect()
    }
}

/// All attributes derived from a material, computed once per invocation.
///
/// # Examples
/// ```
/// use etchant_core::{CarbonContent, Material, MaterialCategory, MaterialProfile, Microstructure};
///
/// # fn main() -> Result<(), etchant_core::MaterialError> {
/// let steel = Material::new("4140", "AISI 4140")?
///     .with_category("Carbon Steel")
///     .with_composition("Fe, 0.40 C, Cr, Mo")
///     .with_microstructure("Tempered martensite");
/// let profile = MaterialProfile::derive(&steel);
/// assert_eq!(profile.category, MaterialCategory::CarbonSteel);
/// assert_eq!(profile.composition.carbon, CarbonContent::Medium);
/// assert!(profile.composition.chromium);
/// assert!(profile.has_microstructure(Microstructure::Martensitic));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialProfile {
    /// Normalised family.
    pub category: MaterialCategory,
    /// Element presence flags.
    pub composition: CompositionFlags,
    /// Microstructure types.
    pub microstructures: BTreeSet<Microstructure>,
    /// Heat-treatment states.
    pub heat_treatments: BTreeSet<HeatTreatmentState>,
}

impl MaterialProfile {
    /// Run every extractor over `material`.
    #[must_use]
    pub fn derive(material: &Material) -> Self {
        Self {
            category: MaterialCategory::derive(material),
            composition: CompositionFlags::derive(material),
            microstructures: Microstructure::derive(material),
            heat_treatments: HeatTreatmentState::derive(material),
        }
    }

    /// Report whether `kind` was detected.
    #[must_use]
    pub fn has_microstructure(&self, kind: Microstructure) -> bool {
        self.microstructures.contains(&kind)
    }

    /// Report whether `state` was detected.
    #[must_use]
    pub fn has_heat_treatment(&self, state: HeatTreatmentState) -> bool {
        self.heat_treatments.contains(&state)
    }

    /// Report whether the material was quenched or tempered.
    #[must_use]
    pub fn is_quenched_or_tempered(&self) -> bool {
        self.has_heat_treatment(HeatTreatmentState::Quenched)
            || self.has_heat_treatment(HeatTreatmentState::Tempered)
    }
}
