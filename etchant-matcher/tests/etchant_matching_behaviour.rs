//! Behaviour tests for end-to-end etchant matching.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

use etchant_core::test_support::{
    aisi_4140, aluminum_6061, caustic_etch, etchant_catalog, generic_reagent, kellers, nital_2,
    picral_4,
};
use etchant_core::{ApplicationContext, Etchant, EtchantCategory, Material, Purpose};
use etchant_matcher::match_etchants;

/// Owned projection of a match so results outlive the candidate borrow.
#[derive(Debug, Clone)]
struct Ranked {
    key: String,
    score: u32,
    sequence: Option<u8>,
}

#[derive(Debug, Default)]
struct Filters {
    purpose: Option<Purpose>,
    context: Option<ApplicationContext>,
}

#[fixture]
fn material() -> RefCell<Option<Material>> {
    RefCell::new(None)
}

#[fixture]
fn candidates() -> RefCell<Vec<Etchant>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn filters() -> RefCell<Filters> {
    RefCell::new(Filters::default())
}

#[fixture]
fn results() -> RefCell<Vec<Ranked>> {
    RefCell::new(Vec::new())
}

fn plain_reagent(id: &str) -> Etchant {
    Etchant::new(Some(id), None, "Plain Reagent")
        .expect("fixture id is non-empty")
        .with_category(EtchantCategory::GeneralPurpose)
}

fn position(results: &[Ranked], key: &str) -> usize {
    results
        .iter()
        .position(|ranked| ranked.key == key)
        .unwrap_or_else(|| panic!("'{key}' should be recommended"))
}

fn score_of(results: &[Ranked], key: &str) -> u32 {
    results
        .iter()
        .find(|ranked| ranked.key == key)
        .map(|ranked| ranked.score)
        .unwrap_or_else(|| panic!("'{key}' should be recommended"))
}

#[given("an AISI 4140 alloy steel")]
fn given_alloy_steel(#[from(material)] material: &RefCell<Option<Material>>) {
    material.replace(Some(aisi_4140()));
}

#[given("a 6061 aluminium alloy")]
fn given_aluminium(#[from(material)] material: &RefCell<Option<Material>>) {
    material.replace(Some(aluminum_6061()));
}

#[given("nital, picral and a general-purpose reagent")]
fn given_steel_reagents(#[from(candidates)] candidates: &RefCell<Vec<Etchant>>) {
    candidates.replace(vec![generic_reagent(), nital_2(), picral_4()]);
}

#[given("a caustic etch that is incompatible with aluminium alongside Keller's reagent")]
fn given_caustic_and_kellers(#[from(candidates)] candidates: &RefCell<Vec<Etchant>>) {
    candidates.replace(vec![caustic_etch(), kellers()]);
}

#[given("two identical reagents of which only the second is featured")]
fn given_featured_pair(#[from(candidates)] candidates: &RefCell<Vec<Etchant>>) {
    let plain = plain_reagent("plain").with_compatible_materials(["carbon-steel"]);
    let featured = plain_reagent("featured")
        .with_compatible_materials(["carbon-steel"])
        .featured(true);
    candidates.replace(vec![plain, featured]);
}

#[given("two identical reagents of which only the second cites ASTM E407")]
fn given_astm_pair(#[from(candidates)] candidates: &RefCell<Vec<Etchant>>) {
    let cited = plain_reagent("cited").with_astm_references(["E407"]);
    candidates.replace(vec![plain_reagent("plain"), cited]);
}

#[given("the full laboratory catalog")]
fn given_full_catalog(#[from(candidates)] candidates: &RefCell<Vec<Etchant>>) {
    candidates.replace(etchant_catalog());
}

#[given("the purpose filter martensite")]
fn given_martensite(#[from(filters)] filters: &RefCell<Filters>) {
    filters.borrow_mut().purpose = Some(Purpose::Martensite);
}

#[given("the application context failure analysis")]
fn given_failure_analysis(#[from(filters)] filters: &RefCell<Filters>) {
    filters.borrow_mut().context = Some(ApplicationContext::FailureAnalysis);
}

#[given("the application context quality control")]
fn given_quality_control(#[from(filters)] filters: &RefCell<Filters>) {
    filters.borrow_mut().context = Some(ApplicationContext::QualityControl);
}

#[when("the etchants are matched")]
fn when_matched(
    #[from(material)] material: &RefCell<Option<Material>>,
    #[from(candidates)] candidates: &RefCell<Vec<Etchant>>,
    #[from(filters)] filters: &RefCell<Filters>,
    #[from(results)] results: &RefCell<Vec<Ranked>>,
) {
    let selected = material.borrow();
    let catalog = candidates.borrow();
    let active = filters.borrow();
    let ranked = match_etchants(selected.as_ref(), &catalog, active.purpose, active.context)
        .into_iter()
        .map(|entry| Ranked {
            key: entry.etchant.key().to_owned(),
            score: entry.score,
            sequence: entry.recommended_sequence,
        })
        .collect();
    results.replace(ranked);
}

#[then("nital and picral each score at least 50")]
fn then_nital_picral_score(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    let ranked = results.borrow();
    assert!(score_of(&ranked, "nital-2") >= 50);
    assert!(score_of(&ranked, "picral-4") >= 50);
}

#[then("nital and picral rank above the general-purpose reagent")]
fn then_nital_picral_rank_first(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    let ranked = results.borrow();
    let generic = position(&ranked, "generic");
    assert!(position(&ranked, "nital-2") < generic);
    assert!(position(&ranked, "picral-4") < generic);
}

#[then("the caustic etch is absent from the results")]
fn then_caustic_absent(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    assert!(results.borrow().iter().all(|ranked| ranked.key != "caustic"));
}

#[then("Keller's reagent is recommended")]
fn then_kellers_present(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    assert_eq!(position(&results.borrow(), "kellers"), 0);
}

#[then("the featured reagent ranks first")]
fn then_featured_first(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    assert_eq!(position(&results.borrow(), "featured"), 0);
}

#[then("the featured reagent scores exactly 20 more")]
fn then_featured_bonus(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    let ranked = results.borrow();
    assert_eq!(
        score_of(&ranked, "featured"),
        score_of(&ranked, "plain") + 20
    );
}

#[then("the first three results are numbered 1 to 3")]
fn then_first_three_numbered(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    let ranked = results.borrow();
    assert!(ranked.len() > 3, "catalog should yield more than three matches");
    let leading: Vec<_> = ranked.iter().take(3).map(|entry| entry.sequence).collect();
    assert_eq!(leading, [Some(1), Some(2), Some(3)]);
}

#[then("later results carry no sequence number")]
fn then_rest_unnumbered(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    assert!(
        results
            .borrow()
            .iter()
            .skip(3)
            .all(|ranked| ranked.sequence.is_none())
    );
}

#[then("only the ASTM reagent is recommended")]
fn then_only_astm(#[from(results)] results: &RefCell<Vec<Ranked>>) {
    let keys: Vec<_> = results
        .borrow()
        .iter()
        .map(|ranked| ranked.key.clone())
        .collect();
    assert_eq!(keys, ["cited"]);
}

#[scenario(path = "tests/features/etchant_matching.feature", index = 0)]
fn martensite_purpose_favours_nital_and_picral(
    material: RefCell<Option<Material>>,
    candidates: RefCell<Vec<Etchant>>,
    filters: RefCell<Filters>,
    results: RefCell<Vec<Ranked>>,
) {
    let _ = (material, candidates, filters, results);
}

#[scenario(path = "tests/features/etchant_matching.feature", index = 1)]
fn incompatible_etchants_are_excluded(
    material: RefCell<Option<Material>>,
    candidates: RefCell<Vec<Etchant>>,
    filters: RefCell<Filters>,
    results: RefCell<Vec<Ranked>>,
) {
    let _ = (material, candidates, filters, results);
}

#[scenario(path = "tests/features/etchant_matching.feature", index = 2)]
fn featured_etchants_earn_bonus(
    material: RefCell<Option<Material>>,
    candidates: RefCell<Vec<Etchant>>,
    filters: RefCell<Filters>,
    results: RefCell<Vec<Ranked>>,
) {
    let _ = (material, candidates, filters, results);
}

#[scenario(path = "tests/features/etchant_matching.feature", index = 3)]
fn failure_analysis_proposes_sequence(
    material: RefCell<Option<Material>>,
    candidates: RefCell<Vec<Etchant>>,
    filters: RefCell<Filters>,
    results: RefCell<Vec<Ranked>>,
) {
    let _ = (material, candidates, filters, results);
}

#[scenario(path = "tests/features/etchant_matching.feature", index = 4)]
fn quality_control_penalises_missing_standard(
    material: RefCell<Option<Material>>,
    candidates: RefCell<Vec<Etchant>>,
    filters: RefCell<Filters>,
    results: RefCell<Vec<Ranked>>,
) {
    let _ = (material, candidates, filters, results);
}
