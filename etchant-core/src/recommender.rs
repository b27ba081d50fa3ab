//! Rank etchants for a material.
//!
//! The `Recommender` trait is the seam between callers and the scoring
//! engine.

use crate::{Etchant, EtchantMatch, MatchRequest};

/// Rank a candidate catalog for a match request.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so independent
/// requests can run in parallel. The method is infallible; malformed
/// candidates degrade to lower scores rather than errors, and a request
/// without a material yields no matches.
///
/// Implementations must:
/// - Never return a candidate incompatible with the material.
/// - Return only positive scores, in descending order.
/// - Return at most [`RESULT_LIMIT`](crate::RESULT_LIMIT) matches.
///
/// # Examples
///
/// ```rust
/// use etchant_core::{Etchant, EtchantMatch, MatchRequest, Recommender, UniqueList};
///
/// struct FirstOnly;
///
/// impl Recommender for FirstOnly {
///     fn recommend<'a>(
///         &self,
///         request: &MatchRequest<'_>,
///         candidates: &'a [Etchant],
///     ) -> Vec<EtchantMatch<'a>> {
///         if request.material.is_none() {
///             return Vec::new();
///         }
///         candidates
///             .first()
///             .map(|e| EtchantMatch::new(e, 1, Vec::new(), UniqueList::new(), UniqueList::new()))
///             .into_iter()
///             .collect()
///     }
/// }
///
/// let request = MatchRequest::default();
/// assert!(FirstOnly.recommend(&request, &[]).is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Return ranked matches for `request` drawn from `candidates`.
    fn recommend<'a>(
        &self,
        request: &MatchRequest<'_>,
        candidates: &'a [Etchant],
    ) -> Vec<EtchantMatch<'a>>;
}
