//! Canned materials and etchants used by unit and behaviour tests.
//!
//! The fixtures mirror common laboratory pairings so scenario tests read
//! like real selections.

use crate::{Etchant, EtchantCategory, HardnessCategory, Material};

fn material(id: &str, name: &str) -> Material {
    match Material::new(id, name) {
        Ok(material) => material,
        Err(err) => panic!("fixture material '{id}' is invalid: {err}"),
    }
}

fn etchant(id: &str, name: &str) -> Etchant {
    match Etchant::new(Some(id), None, name) {
        Ok(etchant) => etchant,
        Err(err) => panic!("fixture etchant '{id}' is invalid: {err}"),
    }
}

/// AISI 4140: a hard, medium-carbon chromium-molybdenum steel.
#[must_use]
pub fn aisi_4140() -> Material {
    material("aisi-4140", "AISI 4140")
        .with_category("Carbon Steel")
        .with_composition("Fe, 0.40 C, Cr, Mo")
        .with_hardness(HardnessCategory::Hard)
}

/// Aluminium 6061 in the T6 condition.
#[must_use]
pub fn aluminum_6061() -> Material {
    material("al-6061", "6061-T6")
        .with_category("Aluminum 6061")
        .with_heat_treatment("Solution treated and artificially aged")
        .with_hardness(HardnessCategory::Soft)
}

/// Annealed 304 austenitic stainless steel.
#[must_use]
pub fn stainless_304() -> Material {
    material("ss-304", "304 Stainless Steel")
        .with_category("Stainless Steel")
        .with_composition("Fe, 18 Cr, 8 Ni")
        .with_microstructure("Austenitic")
        .with_heat_treatment("Annealed")
        .with_hardness(HardnessCategory::Medium)
}

/// Ductile cast iron.
#[must_use]
pub fn ductile_iron() -> Material {
    material("di-65-45-12", "Ductile Iron 65-45-12")
        .with_category("Cast Iron")
        .with_microstructure("Ferrite with spheroidal graphite")
        .with_common_etchants(["Nital 2%", "Stead's Reagent"])
}

/// Nital at 2%: the general-purpose steel etchant.
#[must_use]
pub fn nital_2() -> Etchant {
    etchant("nital-2", "Nital 2%")
        .with_category(EtchantCategory::GeneralPurpose)
        .with_reveals("grain boundaries, ferrite, martensite")
        .with_compatible_materials(["carbon-steel", "cast-iron"])
        .with_astm_references(["E407"])
        .with_hazards(["flammable", "corrosive"])
        .featured(true)
        .with_typical_time(10)
}

/// Picral at 4%.
#[must_use]
pub fn picral_4() -> Etchant {
    etchant("picral-4", "Picral 4%")
        .with_category(EtchantCategory::GeneralPurpose)
        .with_reveals("pearlite, cementite, martensite")
        .with_compatible_materials(["carbon-steel"])
        .with_astm_references(["E407"])
        .with_hazards(["toxic", "explosive"])
}

/// Keller's reagent for aluminium.
#[must_use]
pub fn kellers() -> Etchant {
    etchant("kellers", "Keller's Reagent")
        .with_category(EtchantCategory::MaterialSpecific)
        .with_reveals("grain boundaries, precipitates")
        .with_compatible_materials(["aluminum"])
        .with_astm_references(["E407"])
        .with_hazards(["corrosive", "toxic"])
        .featured(true)
}

/// Kalling's No. 2 for stainless steels.
#[must_use]
pub fn kallings() -> Etchant {
    etchant("kallings-2", "Kalling's No. 2")
        .with_category(EtchantCategory::MaterialSpecific)
        .with_reveals("grain boundaries, austenite, ferrite")
        .with_compatible_materials(["stainless-steel", "nickel-alloys"])
        .with_hazards(["corrosive"])
}

/// A hot caustic reagent that attacks aluminium.
#[must_use]
pub fn caustic_etch() -> Etchant {
    etchant("caustic", "Hot Caustic Macro Etch")
        .with_category(EtchantCategory::MaterialSpecific)
        .with_reveals("grain boundaries, flow lines, grain structure")
        .with_compatible_materials(["aluminum", "carbon-steel"])
        .with_incompatible_materials(["aluminum"])
        .featured(true)
}

/// A bland general-purpose reagent with no specific affinity.
#[must_use]
pub fn generic_reagent() -> Etchant {
    etchant("generic", "Universal Reagent")
        .with_category(EtchantCategory::GeneralPurpose)
        .with_compatible_materials(["carbon-steel", "stainless-steel", "aluminum"])
}

/// Stead's reagent for cast iron.
#[must_use]
pub fn steads() -> Etchant {
    etchant("steads", "Stead's Reagent")
        .with_category(EtchantCategory::Specialty)
        .with_reveals("phosphorus segregation, graphite")
        .with_compatible_materials(["cast-iron"])
}

/// Every canned etchant in catalog order.
#[must_use]
pub fn etchant_catalog() -> Vec<Etchant> {
    vec![
        nital_2(),
        picral_4(),
        kellers(),
        kallings(),
        caustic_etch(),
        generic_reagent(),
        steads(),
    ]
}

/// Every canned material in catalog order.
#[must_use]
pub fn material_catalog() -> Vec<Material> {
    vec![aisi_4140(), aluminum_6061(), stainless_304(), ductile_iron()]
}
