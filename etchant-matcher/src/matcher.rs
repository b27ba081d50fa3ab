//! `EtchantMatcher`: the rule-driven [`Recommender`].

use etchant_core::{
    ApplicationContext, Etchant, EtchantMatch, MatchRequest, Material, Purpose, Recommender,
};
use log::debug;

use crate::catalog::RuleCatalog;
use crate::engine::score_candidate;
use crate::input::Subject;
use crate::rank::rank;
use crate::sequence::assign_sequence;

/// Scores every candidate against the rule catalog, then ranks and
/// sequences the positive matches.
///
/// Each call derives the material's attributes once and reads the candidate
/// slice without mutating it, so one matcher can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct EtchantMatcher {
    catalog: RuleCatalog,
}

impl EtchantMatcher {
    /// Construct a matcher using the standard rule catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a matcher with a tuned or restricted catalog.
    #[must_use]
    pub const fn with_catalog(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}

impl Recommender for EtchantMatcher {
    fn recommend<'a>(
        &self,
        request: &MatchRequest<'_>,
        candidates: &'a [Etchant],
    ) -> Vec<EtchantMatch<'a>> {
        let Some(material) = request.material else {
            return Vec::new();
        };
        let subject = Subject::new(material);
        let purpose = request.active_purpose();
        let context = request.active_context();

        let scored: Vec<_> = candidates
            .iter()
            .filter_map(|etchant| {
                score_candidate(&self.catalog, &subject, etchant, purpose, context)
                    .and_then(|sheet| sheet.into_match(etchant))
            })
            .collect();
        let positive = scored.len();
        let mut ranked = rank(scored);
        assign_sequence(&mut ranked, context);

        debug!(
            "matched '{}' ({}) against {} candidates: {positive} positive, {} returned, catalog {}",
            material.id,
            subject.profile().category,
            candidates.len(),
            ranked.len(),
            self.catalog.version()
        );
        ranked
    }
}

/// Rank `candidates` for `material` with the standard catalog.
///
/// A `general` purpose or context behaves like no filter.
///
/// # Examples
/// ```
/// use etchant_core::{Etchant, Material};
/// use etchant_matcher::match_etchants;
///
/// let steel = Material::new("4140", "AISI 4140").unwrap().with_category("Carbon Steel");
/// let nital = Etchant::new(Some("nital"), None, "Nital 2%")
///     .unwrap()
///     .with_compatible_materials(["carbon-steel"]);
/// let matches = match_etchants(Some(&steel), std::slice::from_ref(&nital), None, None);
/// assert_eq!(matches.len(), 1);
/// assert!(match_etchants(None, std::slice::from_ref(&nital), None, None).is_empty());
/// ```
#[must_use]
pub fn match_etchants<'a>(
    material: Option<&Material>,
    candidates: &'a [Etchant],
    purpose: Option<Purpose>,
    context: Option<ApplicationContext>,
) -> Vec<EtchantMatch<'a>> {
    let request = MatchRequest {
        material,
        purpose,
        context,
    };
    EtchantMatcher::new().recommend(&request, candidates)
}
