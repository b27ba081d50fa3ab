//! Optional user filters: the microstructural purpose and the application
//! context of a match request.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::Material;

/// Error returned when a filter value is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownFilter {
    /// Filter kind, `purpose` or `application context`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

fn normalise_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

/// Microstructural feature the user wants to reveal.
///
/// # Examples
/// ```
/// use etchant_core::Purpose;
///
/// let purpose: Purpose = "grain boundaries".parse().unwrap();
/// assert_eq!(purpose, Purpose::GrainBoundaries);
/// assert_eq!(purpose.display_name(), "grain boundaries");
/// assert!(purpose.keywords().contains(&"grain size"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    /// Grain structure and size.
    GrainBoundaries,
    /// Carbide particles.
    Carbides,
    /// Phase distinction.
    Phases,
    /// Precipitation.
    Precipitates,
    /// Non-metallic inclusions.
    Inclusions,
    /// Twinning.
    TwinBoundaries,
    /// Martensitic structure.
    Martensite,
    /// Pearlitic structure.
    Pearlite,
    /// Ferrite phase.
    Ferrite,
    /// Austenite phase.
    Austenite,
    /// Graphite shape in cast iron.
    Nodularity,
    /// No specific feature.
    General,
}

impl Purpose {
    /// Every purpose in presentation order.
    pub const ALL: [Self; 12] = [
        Self::GrainBoundaries,
        Self::Carbides,
        Self::Phases,
        Self::Precipitates,
        Self::Inclusions,
        Self::TwinBoundaries,
        Self::Martensite,
        Self::Pearlite,
        Self::Ferrite,
        Self::Austenite,
        Self::Nodularity,
        Self::General,
    ];

    /// Return the kebab-case key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GrainBoundaries => "grain-boundaries",
            Self::Carbides => "carbides",
            Self::Phases => "phases",
            Self::Precipitates => "precipitates",
            Self::Inclusions => "inclusions",
            Self::TwinBoundaries => "twin-boundaries",
            Self::Martensite => "martensite",
            Self::Pearlite => "pearlite",
            Self::Ferrite => "ferrite",
            Self::Austenite => "austenite",
            Self::Nodularity => "nodularity",
            Self::General => "general",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GrainBoundaries => "Grain Boundaries",
            Self::Carbides => "Carbides",
            Self::Phases => "Phases",
            Self::Precipitates => "Precipitates",
            Self::Inclusions => "Inclusions",
            Self::TwinBoundaries => "Twin Boundaries",
            Self::Martensite => "Martensite",
            Self::Pearlite => "Pearlite",
            Self::Ferrite => "Ferrite",
            Self::Austenite => "Austenite",
            Self::Nodularity => "Nodularity",
            Self::General => "General Purpose",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::GrainBoundaries => "Reveal grain structure and size",
            Self::Carbides => "Highlight carbide particles",
            Self::Phases => "Distinguish different phases",
            Self::Precipitates => "Show precipitation",
            Self::Inclusions => "Reveal non-metallic inclusions",
            Self::TwinBoundaries => "Show twinning in crystals",
            Self::Martensite => "Highlight martensitic structure",
            Self::Pearlite => "Reveal pearlitic structures",
            Self::Ferrite => "Distinguish ferrite phase",
            Self::Austenite => "Distinguish austenite phase",
            Self::Nodularity => "Reveal graphite shape in cast iron",
            Self::General => "General microstructure examination",
        }
    }

    /// Lowercase keywords searched for in etchant text.
    ///
    /// [`Purpose::General`] has none.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::GrainBoundaries => &[
                "grain boundary",
                "grain boundaries",
                "grain structure",
                "grain size",
                "grain",
            ],
            Self::Carbides => &["carbide", "carbides", "m23c6", "m6c", "m7c3", "cementite"],
            Self::Phases => &[
                "phase",
                "phases",
                "phase structure",
                "alpha",
                "beta",
                "gamma",
                "delta",
                "alpha-beta",
            ],
            Self::Precipitates => &[
                "precipitate",
                "precipitates",
                "precipitation",
                "intermetallic",
            ],
            Self::Inclusions => &["inclusion", "inclusions", "non-metallic"],
            Self::TwinBoundaries => &[
                "twin",
                "twins",
                "twin boundary",
                "twinning",
                "annealing twin",
            ],
            Self::Martensite => &["martensite", "martensitic"],
            Self::Pearlite => &["pearlite", "pearlitic", "lamellar"],
            Self::Ferrite => &["ferrite", "ferritic", "delta ferrite"],
            Self::Austenite => &["austenite", "austenitic", "retained austenite"],
            Self::Nodularity => &[
                "nodularity",
                "nodular",
                "graphite",
                "graphite shape",
                "graphite distribution",
                "ductile iron",
                "nodular iron",
                "spheroidal graphite",
            ],
            Self::General => &[],
        }
    }

    /// Key with its first hyphen replaced by a space, for reason text.
    #[must_use]
    pub fn display_name(self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise_key(s);
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == key)
            .ok_or_else(|| UnknownFilter {
                kind: "purpose",
                value: s.to_owned(),
            })
    }
}

/// Use case that adjusts scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationContext {
    /// Standard inspection and testing.
    QualityControl,
    /// Root cause investigation.
    FailureAnalysis,
    /// Scientific investigation.
    Research,
    /// Verifying heat treatment effects.
    HeatTreatmentVerification,
    /// Weld zone examination.
    WeldingAnalysis,
    /// No specific context.
    General,
}

impl ApplicationContext {
    /// Every context in presentation order.
    pub const ALL: [Self; 6] = [
        Self::QualityControl,
        Self::FailureAnalysis,
        Self::Research,
        Self::HeatTreatmentVerification,
        Self::WeldingAnalysis,
        Self::General,
    ];

    /// Return the kebab-case key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QualityControl => "quality-control",
            Self::FailureAnalysis => "failure-analysis",
            Self::Research => "research",
            Self::HeatTreatmentVerification => "heat-treatment-verification",
            Self::WeldingAnalysis => "welding-analysis",
            Self::General => "general",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::QualityControl => "Quality Control",
            Self::FailureAnalysis => "Failure Analysis",
            Self::Research => "Research",
            Self::HeatTreatmentVerification => "Heat Treatment",
            Self::WeldingAnalysis => "Welding Analysis",
            Self::General => "General Purpose",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::QualityControl => "Standard inspection and testing",
            Self::FailureAnalysis => "Root cause investigation",
            Self::Research => "Scientific investigation",
            Self::HeatTreatmentVerification => "Verify heat treatment effects",
            Self::WeldingAnalysis => "Weld zone examination",
            Self::General => "General microstructure examination",
        }
    }

    /// Report whether this context proposes a progressive sequence.
    #[must_use]
    pub const fn triggers_sequencing(self) -> bool {
        matches!(self, Self::FailureAnalysis)
    }
}

impl fmt::Display for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationContext {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise_key(s);
        Self::ALL
            .into_iter()
            .find(|context| context.as_str() == key)
            .ok_or_else(|| UnknownFilter {
                kind: "application context",
                value: s.to_owned(),
            })
    }
}

/// Inputs to a single match invocation.
///
/// # Examples
/// ```
/// use etchant_core::{ApplicationContext, MatchRequest, Purpose};
///
/// let request = MatchRequest::default()
///     .with_purpose(Purpose::General)
///     .with_context(ApplicationContext::Research);
/// assert_eq!(request.active_purpose(), None);
/// assert_eq!(request.active_context(), Some(ApplicationContext::Research));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchRequest<'a> {
    /// Material under examination; `None` yields no matches.
    pub material: Option<&'a Material>,
    /// Optional purpose filter.
    pub purpose: Option<Purpose>,
    /// Optional application context.
    pub context: Option<ApplicationContext>,
}

impl<'a> MatchRequest<'a> {
    /// Start a request for `material`.
    #[must_use]
    pub const fn for_material(material: &'a Material) -> Self {
        Self {
            material: Some(material),
            purpose: None,
            context: None,
        }
    }

    /// Set the purpose filter.
    #[must_use]
    pub const fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    /// Set the application context.
    #[must_use]
    pub const fn with_context(mut self, context: ApplicationContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Purpose that drives scoring; `general` counts as none.
    #[must_use]
    pub fn active_purpose(&self) -> Option<Purpose> {
        self.purpose.filter(|p| *p != Purpose::General)
    }

    /// Context that drives scoring; `general` counts as none.
    #[must_use]
    pub fn active_context(&self) -> Option<ApplicationContext> {
        self.context.filter(|c| *c != ApplicationContext::General)
    }
}
