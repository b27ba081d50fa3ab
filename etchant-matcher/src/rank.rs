//! Ordering and truncation of scored matches.

use etchant_core::{EtchantMatch, RESULT_LIMIT};

/// Sort `matches` by descending score and keep the top [`RESULT_LIMIT`].
///
/// The sort is stable: equal scores keep their input order.
#[must_use]
pub fn rank(mut matches: Vec<EtchantMatch<'_>>) -> Vec<EtchantMatch<'_>> {
    matches.sort_by(|left, right| right.score.cmp(&left.score));
    matches.truncate(RESULT_LIMIT);
    matches
}
