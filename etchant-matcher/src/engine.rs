//! Per-candidate scoring.

use etchant_core::{ApplicationContext, Etchant, EtchantMatch, Purpose, UniqueList};
use log::trace;

use crate::catalog::RuleCatalog;
use crate::input::{Candidate, RuleInput, Subject};

/// Running totals for one candidate.
///
/// Tips and warnings are deduplicated as they are pushed; reasons keep
/// every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    score: i32,
    reasons: Vec<String>,
    tips: UniqueList,
    warnings: UniqueList,
}

impl ScoreSheet {
    /// Accumulated score, which may be zero or negative.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Reasons in rule order.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Distinct tips.
    #[must_use]
    pub const fn tips(&self) -> &UniqueList {
        &self.tips
    }

    /// Distinct warnings.
    #[must_use]
    pub const fn warnings(&self) -> &UniqueList {
        &self.warnings
    }

    pub(crate) const fn add(&mut self, weight: i32) {
        self.score = self.score.saturating_add(weight);
    }

    pub(crate) fn push_reason(&mut self, reason: String) {
        self.reasons.push(reason);
    }

    pub(crate) fn push_tip(&mut self, tip: String) {
        self.tips.insert(tip);
    }

    pub(crate) fn push_warning(&mut self, warning: String) {
        self.warnings.insert(warning);
    }

    pub(crate) fn has_tip_containing(&self, needle: &str) -> bool {
        self.tips.any_contains(needle)
    }

    /// Convert into a match for `etchant` when the score is positive.
    #[must_use]
    pub fn into_match(self, etchant: &Etchant) -> Option<EtchantMatch<'_>> {
        let score = u32::try_from(self.score).ok().filter(|score| *score > 0)?;
        Some(EtchantMatch::new(
            etchant,
            score,
            self.reasons,
            self.tips,
            self.warnings,
        ))
    }
}

/// Score one candidate against a prepared subject.
///
/// Returns `None` when the candidate is incompatible with the material's
/// category; no rule runs in that case.
#[must_use]
pub fn score_candidate(
    catalog: &RuleCatalog,
    subject: &Subject<'_>,
    etchant: &Etchant,
    purpose: Option<Purpose>,
    context: Option<ApplicationContext>,
) -> Option<ScoreSheet> {
    let category = subject.profile().category.as_str();
    if etchant.is_incompatible_with(category) {
        trace!(
            "excluding etchant '{}': incompatible with {category}",
            etchant.key()
        );
        return None;
    }
    let candidate = Candidate::new(etchant);
    let input = RuleInput::new(subject, &candidate, purpose, context);
    let mut sheet = ScoreSheet::default();
    for rule in catalog.rules() {
        rule.evaluate(&input, &mut sheet);
    }
    Some(sheet)
}
