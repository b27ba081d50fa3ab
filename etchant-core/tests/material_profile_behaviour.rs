//! Behaviour tests for material attribute extraction.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

use etchant_core::{CarbonContent, Material, MaterialCategory, MaterialProfile};

#[fixture]
fn material() -> RefCell<Option<Material>> {
    RefCell::new(None)
}

#[fixture]
fn profile() -> RefCell<Option<MaterialProfile>> {
    RefCell::new(None)
}

fn set_material(cell: &RefCell<Option<Material>>, name: &str, category: &str, composition: &str) {
    let built = Material::new("m-1", name)
        .expect("fixture id is non-empty")
        .with_category(category)
        .with_composition(composition);
    cell.replace(Some(built));
}

fn derived(cell: &RefCell<Option<MaterialProfile>>) -> MaterialProfile {
    cell.borrow().clone().expect("profile should be derived")
}

#[given("an AISI 4140 carbon steel")]
fn given_alloy_steel(#[from(material)] material: &RefCell<Option<Material>>) {
    set_material(material, "AISI 4140", "Carbon Steel", "Fe, 0.40 C, Cr, Mo");
}

#[given("a zirconium alloy with no recognised family")]
fn given_zirconium(#[from(material)] material: &RefCell<Option<Material>>) {
    set_material(material, "Zircaloy-4", "Zirconium Alloys", "Zr, Sn");
}

#[given("an uncategorised material named Aluminium 7075")]
fn given_aluminium_by_name(#[from(material)] material: &RefCell<Option<Material>>) {
    set_material(material, "Aluminium 7075", "", "Zn, Mg, Cu");
}

#[when("I derive the material profile")]
fn when_derive(
    #[from(material)] material: &RefCell<Option<Material>>,
    #[from(profile)] profile: &RefCell<Option<MaterialProfile>>,
) {
    let borrowed = material.borrow();
    let selected = borrowed.as_ref().expect("material should be set");
    profile.replace(Some(MaterialProfile::derive(selected)));
}

#[then("the material category is carbon-steel")]
fn then_carbon_steel(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert_eq!(derived(profile).category, MaterialCategory::CarbonSteel);
}

#[then("the material category is the raw lowercased category")]
fn then_raw_category(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert_eq!(derived(profile).category.as_str(), "zirconium alloys");
}

#[then("the material category is aluminum")]
fn then_aluminum(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert_eq!(derived(profile).category, MaterialCategory::Aluminum);
}

#[then("the carbon content is medium")]
fn then_medium_carbon(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert_eq!(derived(profile).composition.carbon, CarbonContent::Medium);
}

#[then("the carbon content is unknown")]
fn then_unknown_carbon(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert_eq!(derived(profile).composition.carbon, CarbonContent::Unknown);
}

#[then("chromium is detected")]
fn then_chromium(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert!(derived(profile).composition.chromium);
}

#[then("copper is detected")]
fn then_copper(#[from(profile)] profile: &RefCell<Option<MaterialProfile>>) {
    assert!(derived(profile).composition.copper);
}

#[scenario(path = "tests/features/material_profile.feature", index = 0)]
fn alloy_steel_category(
    material: RefCell<Option<Material>>,
    profile: RefCell<Option<MaterialProfile>>,
) {
    let _ = (material, profile);
}

#[scenario(path = "tests/features/material_profile.feature", index = 1)]
fn unknown_family_category(
    material: RefCell<Option<Material>>,
    profile: RefCell<Option<MaterialProfile>>,
) {
    let _ = (material, profile);
}

#[scenario(path = "tests/features/material_profile.feature", index = 2)]
fn name_based_category(
    material: RefCell<Option<Material>>,
    profile: RefCell<Option<MaterialProfile>>,
) {
    let _ = (material, profile);
}
