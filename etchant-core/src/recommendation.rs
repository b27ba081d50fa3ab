//! Ranked match results returned to callers.

use serde::Serialize;

use crate::{Etchant, UniqueList};

/// Calibration ceiling used to express a score as a percentage.
pub const MAX_SCORE_REFERENCE: u32 = 600;

/// Maximum number of matches returned by one invocation.
pub const RESULT_LIMIT: usize = 10;

/// Number of leading matches annotated with a sequence position.
pub const SEQUENCE_LENGTH: usize = 3;

/// Express `score` as a rounded percentage of [`MAX_SCORE_REFERENCE`],
/// capped at 100.
///
/// # Examples
/// ```
/// use etchant_core::score_percentage;
///
/// assert_eq!(score_percentage(300), 50);
/// assert_eq!(score_percentage(3), 1);
/// assert_eq!(score_percentage(900), 100);
/// ```
#[must_use]
pub fn score_percentage(score: u32) -> u8 {
    let scaled = (u64::from(score) * 100 + u64::from(MAX_SCORE_REFERENCE) / 2)
        / u64::from(MAX_SCORE_REFERENCE);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}

/// Coarse presentation bucket for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    /// 80% and above.
    Excellent,
    /// 60% to 79%.
    Good,
    /// 40% to 59%.
    Fair,
    /// Below 40%.
    Low,
}

impl ScoreTier {
    /// Bucket a percentage.
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Low,
        }
    }

    /// Colour used when rendering the tier.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "blue",
            Self::Fair => "yellow",
            Self::Low => "gray",
        }
    }
}

/// A scored candidate with its explanation.
///
/// The candidate is borrowed from the caller's catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EtchantMatch<'a> {
    /// The matched etchant.
    pub etchant: &'a Etchant,
    /// Accumulated score; always positive.
    pub score: u32,
    /// Score as a percentage of the calibration ceiling.
    pub percentage: u8,
    /// Presentation bucket.
    pub tier: ScoreTier,
    /// Reasons in rule evaluation order.
    pub match_reasons: Vec<String>,
    /// Distinct expert tips.
    pub expert_tips: UniqueList,
    /// Distinct warnings.
    pub warnings: UniqueList,
    /// Position in the progressive plan, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_sequence: Option<u8>,
}

impl<'a> EtchantMatch<'a> {
    /// Build a match, deriving the percentage and tier from `score`.
    #[must_use]
    pub fn new(
        etchant: &'a Etchant,
        score: u32,
        match_reasons: Vec<String>,
        expert_tips: UniqueList,
        warnings: UniqueList,
    ) -> Self {
        let percentage = score_percentage(score);
        Self {
            etchant,
            score,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
            match_reasons,
            expert_tips,
            warnings,
            recommended_sequence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(2, 0)]
    #[case(3, 1)]
    #[case(597, 100)]
    #[case(600, 100)]
    #[case(u32::MAX, 100)]
    fn rounds_and_caps_percentages(#[case] score: u32, #[case] expected: u8) {
        assert_eq!(score_percentage(score), expected);
    }

    #[rstest]
    #[case(100, ScoreTier::Excellent)]
    #[case(80, ScoreTier::Excellent)]
    #[case(79, ScoreTier::Good)]
    #[case(60, ScoreTier::Good)]
    #[case(59, ScoreTier::Fair)]
    #[case(40, ScoreTier::Fair)]
    #[case(39, ScoreTier::Low)]
    fn buckets_percentages(#[case] percentage: u8, #[case] expected: ScoreTier) {
        assert_eq!(ScoreTier::from_percentage(percentage), expected);
    }
}
