//! Declarative scoring rules.
//!
//! A [`Rule`] groups mutually exclusive [`Arm`]s behind a gate predicate.
//! When the gate passes, the first arm whose predicate holds fires: its
//! weight is added and its reason, tip and warning templates are rendered.
//! Rules never short-circuit each other, so every applicable rule
//! contributes.

mod concentration;
mod standard;

pub use standard::standard_rules;

use etchant_core::Purpose;

use crate::engine::ScoreSheet;
use crate::input::RuleInput;

/// Predicate over a material/candidate pair.
pub type Predicate = fn(&RuleInput<'_>) -> bool;

/// Scoring tier a rule belongs to, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Candidate lists the material category as compatible.
    Compatibility,
    /// Material documents the candidate as a known-good pairing.
    ProvenPairing,
    /// Candidate links directly to the material id.
    DirectLink,
    /// Candidate reveals the requested feature.
    Purpose,
    /// Named reagents for special purposes such as nodularity.
    PurposeSpecialCase,
    /// Reagents suited to particular alloying elements.
    Composition,
    /// Reagents suited to particular microstructures.
    Microstructure,
    /// Reagents suited to heat-treated material.
    HeatTreatmentAwareness,
    /// Use-case specific adjustments.
    ApplicationContext,
    /// Named Nital strengths against material hardness.
    HardnessAwareness,
    /// Common steel reagents against the carbon level.
    CarbonAwareness,
    /// Reagent concentration against material hardness.
    Hardness,
    /// Reagents suited to the carbon level.
    CarbonContent,
    /// Reagents suited to the heat-treatment state.
    HeatTreatmentState,
    /// Standards, popularity and convenience.
    QualityIndicator,
    /// Hazard warnings.
    Safety,
    /// Etch time guidance.
    Timing,
}

/// Text emitted when an arm fires.
///
/// Placeholders: `{purpose}` renders the purpose display name, `{astm}` the
/// first ASTM reference and `{seconds}` the typical etch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    /// Wrap literal template text.
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    /// The raw template text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Substitute placeholders from `input`.
    #[must_use]
    pub fn render(self, input: &RuleInput<'_>) -> String {
        if !self.0.contains('{') {
            return self.0.to_owned();
        }
        let etchant = input.etchant();
        let purpose = input.purpose().map(Purpose::display_name).unwrap_or_default();
        let seconds = etchant
            .typical_time_seconds
            .map(|secs| secs.to_string())
            .unwrap_or_default();
        self.0
            .replace("{purpose}", &purpose)
            .replace("{astm}", etchant.primary_astm_reference().unwrap_or_default())
            .replace("{seconds}", &seconds)
    }
}

/// One outcome of a [`Rule`].
#[derive(Debug, Clone, Copy)]
pub struct Arm {
    key: &'static str,
    weight: i32,
    when: Predicate,
    reason: Option<Template>,
    tip: Option<Template>,
    tip_unless: Option<&'static str>,
    warning: Option<Template>,
}

impl Arm {
    /// Create an arm that adds `weight` when `when` holds.
    #[must_use]
    pub const fn new(key: &'static str, weight: i32, when: Predicate) -> Self {
        Self {
            key,
            weight,
            when,
            reason: None,
            tip: None,
            tip_unless: None,
            warning: None,
        }
    }

    /// Append a reason when the arm fires.
    #[must_use]
    pub const fn reason(mut self, text: &'static str) -> Self {
        self.reason = Some(Template::new(text));
        self
    }

    /// Add an expert tip when the arm fires.
    #[must_use]
    pub const fn tip(mut self, text: &'static str) -> Self {
        self.tip = Some(Template::new(text));
        self
    }

    /// Add an expert tip unless an existing tip already contains `needle`.
    #[must_use]
    pub const fn tip_unless(mut self, text: &'static str, needle: &'static str) -> Self {
        self.tip = Some(Template::new(text));
        self.tip_unless = Some(needle);
        self
    }

    /// Add a warning when the arm fires.
    #[must_use]
    pub const fn warning(mut self, text: &'static str) -> Self {
        self.warning = Some(Template::new(text));
        self
    }

    /// Arm key, unique within its rule.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Score contribution.
    #[must_use]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    pub(crate) const fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    /// Report whether the arm's predicate holds.
    #[must_use]
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        (self.when)(input)
    }

    pub(crate) fn fire(&self, input: &RuleInput<'_>, sheet: &mut ScoreSheet) {
        sheet.add(self.weight);
        if let Some(reason) = self.reason {
            sheet.push_reason(reason.render(input));
        }
        if let Some(tip) = self.tip {
            let suppressed = self
                .tip_unless
                .is_some_and(|needle| sheet.has_tip_containing(needle));
            if !suppressed {
                sheet.push_tip(tip.render(input));
            }
        }
        if let Some(warning) = self.warning {
            sheet.push_warning(warning.render(input));
        }
    }
}

/// A gated group of mutually exclusive arms.
#[derive(Debug, Clone)]
pub struct Rule {
    id: &'static str,
    tier: Tier,
    applies: Predicate,
    arms: Vec<Arm>,
}

impl Rule {
    /// Create a rule with no arms.
    #[must_use]
    pub const fn new(id: &'static str, tier: Tier, applies: Predicate) -> Self {
        Self {
            id,
            tier,
            applies,
            arms: Vec::new(),
        }
    }

    /// Append an arm; earlier arms take precedence.
    #[must_use]
    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    /// Rule identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Tier the rule belongs to.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Arms in precedence order.
    #[must_use]
    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub(crate) fn arm_mut(&mut self, key: &str) -> Option<&mut Arm> {
        self.arms.iter_mut().find(|arm| arm.key == key)
    }

    /// Return the arm that would fire for `input`, if any.
    #[must_use]
    pub fn select(&self, input: &RuleInput<'_>) -> Option<&Arm> {
        if !(self.applies)(input) {
            return None;
        }
        self.arms.iter().find(|arm| arm.matches(input))
    }

    pub(crate) fn evaluate(&self, input: &RuleInput<'_>, sheet: &mut ScoreSheet) {
        if let Some(arm) = self.select(input) {
            arm.fire(input, sheet);
        }
    }
}
