//! The standard rule table, in evaluation order.

use etchant_core::{
    ApplicationContext, CarbonContent, EtchantCategory, HardnessCategory, HeatTreatmentState,
    MaterialCategory, Microstructure, Purpose,
};

use super::concentration::{is_aggressive, is_dilute, is_strong};
use super::{Arm, Rule, Tier};
use crate::input::RuleInput;

fn always(_: &RuleInput<'_>) -> bool {
    true
}

fn has_astm(input: &RuleInput<'_>) -> bool {
    input.etchant().has_astm_reference()
}

fn is_multi_feature(input: &RuleInput<'_>) -> bool {
    input.etchant().reveal_count() > 2
}

fn is_specialty(input: &RuleInput<'_>) -> bool {
    input.etchant().category == EtchantCategory::Specialty
}

fn is_nital_or_picral(input: &RuleInput<'_>) -> bool {
    input.name_has(&["nital", "picral"])
}

fn has_structure(input: &RuleInput<'_>, kind: Microstructure) -> bool {
    input.profile().has_microstructure(kind)
}

fn is_solution_treated(input: &RuleInput<'_>) -> bool {
    input
        .profile()
        .has_heat_treatment(HeatTreatmentState::SolutionTreated)
}

fn suits_solution_treated(input: &RuleInput<'_>) -> bool {
    input.name_has(&["keller", "weck"]) || input.is_electrolytic()
}

fn is_hard(input: &RuleInput<'_>) -> bool {
    input.hardness().is_some_and(HardnessCategory::is_hard)
}

fn is_soft(input: &RuleInput<'_>) -> bool {
    input.hardness().is_some_and(HardnessCategory::is_soft)
}

fn typical_seconds(input: &RuleInput<'_>) -> Option<u32> {
    input.etchant().typical_time_seconds.filter(|secs| *secs > 0)
}

fn is_stainless(input: &RuleInput<'_>) -> bool {
    input.profile().composition.chromium && input.category_is(&MaterialCategory::StainlessSteel)
}

fn compatibility() -> Vec<Rule> {
    vec![
        Rule::new("compatibility", Tier::Compatibility, |i| i.is_compatible())
            .arm(
                Arm::new("material-specific", 200, |i| {
                    i.etchant().category == EtchantCategory::MaterialSpecific
                })
                .reason("✓ Material-specific etchant"),
            )
            .arm(Arm::new("specialty", 150, is_specialty).reason("✓ Specialty etchant"))
            .arm(Arm::new("general", 100, always).reason("✓ Compatible")),
        Rule::new("proven-pairing", Tier::ProvenPairing, always).arm(
            Arm::new("common-etchant", 120, |i| i.is_proven_pairing())
                .reason("✓ Material-specific recommendation")
                .tip("This is a documented, proven etchant for this material"),
        ),
        Rule::new("direct-link", Tier::DirectLink, always).arm(
            Arm::new("related-material", 90, |i| i.is_directly_linked())
                .reason("✓ Direct database link"),
        ),
    ]
}

fn purpose() -> Vec<Rule> {
    vec![
        Rule::new("purpose", Tier::Purpose, |i| i.purpose().is_some())
            .arm(
                Arm::new("reveals", 150, |i| {
                    i.purpose().is_some_and(|p| i.reveals_has(p.keywords()))
                })
                .reason("✓ Specifically reveals {purpose}")
                .tip("This etchant is specifically designed to reveal {purpose}"),
            )
            .arm(
                Arm::new("mentions", 100, |i| {
                    i.purpose().is_some_and(|p| i.purpose_text_has(p.keywords()))
                })
                .reason("✓ Reveals {purpose}"),
            ),
        Rule::new("nodularity-steads", Tier::PurposeSpecialCase, |i| {
            i.purpose_is(Purpose::Nodularity)
        })
        .arm(
            Arm::new("steads", 80, |i| i.name_has(&["stead"]))
                .reason("✓ Stead's reagent - specifically for graphite/nodularity")
                .tip(
                    "Stead's reagent is the standard etchant for revealing graphite shape and nodularity in cast iron",
                ),
        ),
        Rule::new("nodularity-cast-iron", Tier::PurposeSpecialCase, |i| {
            i.purpose_is(Purpose::Nodularity)
                && (i.category_is(&MaterialCategory::CastIron)
                    || i.material_name_has(&["cast iron", "ductile", "nodular"]))
        })
        .arm(
            Arm::new("graphite", 60, |i| {
                i.reveals_has(&["graphite"]) || i.name_has(&["stead", "picral"])
            })
            .reason("✓ Good for cast iron nodularity analysis"),
        ),
    ]
}

fn composition() -> Vec<Rule> {
    vec![
        Rule::new("stainless-reagent", Tier::Composition, is_stainless)
            .arm(
                Arm::new("kallings", 80, |i| i.name_has(&["kallings", "kalling"]))
                    .reason("✓ Kalling's - standard for austenitic stainless"),
            )
            .arm(
                Arm::new("glyceregia", 80, |i| i.name_has(&["glyceregia"]))
                    .reason("✓ Glyceregia - excellent for stainless and nickel alloys"),
            )
            .arm(
                Arm::new("vilella", 75, |i| i.name_has(&["vilella"]))
                    .reason("✓ Vilella's - excellent for tool steels and carbides"),
            )
            .arm(
                Arm::new("aqua-regia", 70, |i| i.name_has(&["aqua regia"]))
                    .reason("✓ Aqua Regia - very aggressive for difficult materials"),
            ),
        Rule::new("stainless-electrolytic", Tier::Composition, is_stainless).arm(
            Arm::new("electrolytic", 70, |i| i.is_electrolytic())
                .reason("✓ Electrolytic - preferred method for stainless")
                .tip("Electrolytic etching provides superior control and reproducibility for stainless steels"),
        ),
        Rule::new("nickel-reagent", Tier::Composition, |i| {
            i.profile().composition.nickel || i.category_is(&MaterialCategory::NickelAlloys)
        })
        .arm(
            Arm::new("kallings", 75, |i| i.name_has(&["kallings", "kalling"]))
                .reason("✓ Kalling's - standard for nickel alloys"),
        )
        .arm(
            Arm::new("glyceregia", 80, |i| i.name_has(&["glyceregia"]))
                .reason("✓ Glyceregia - excellent for nickel superalloys"),
        )
        .arm(
            Arm::new("inconel", 75, |i| i.name_has(&["inconel"]))
                .reason("✓ Inconel-specific etchant"),
        ),
        Rule::new("titanium-reagent", Tier::Composition, |i| {
            i.profile().composition.titanium || i.category_is(&MaterialCategory::Titanium)
        })
        .arm(
            Arm::new("kroll", 90, |i| i.name_has(&["kroll"]))
                .reason("✓ Kroll's - standard etchant for titanium")
                .tip("Kroll's reagent is the industry standard for titanium alloys"),
        )
        .arm(
            Arm::new("ap-16", 75, |i| i.name_has(&["ti-ap-16", "ap-16"]))
                .reason("✓ Alternative titanium etchant"),
        ),
        Rule::new("aluminum-reagent", Tier::Composition, |i| {
            i.profile().composition.aluminum || i.category_is(&MaterialCategory::Aluminum)
        })
        .arm(
            Arm::new("keller", 90, |i| i.name_has(&["keller"]))
                .reason("✓ Keller's - standard etchant for aluminum")
                .tip("Keller's reagent is the most common etchant for aluminum alloys"),
        )
        .arm(
            Arm::new("tucker", 75, |i| i.name_has(&["tucker"]))
                .reason("✓ Tucker's - good for heat-treated aluminum"),
        )
        .arm(
            Arm::new("barker", 80, |i| i.name_has(&["barker"]) && i.is_electrolytic())
                .reason("✓ Barker's electrolytic - excellent for aluminum")
                .tip("Barker's electrolytic produces beautiful interference colors for phase identification"),
        ),
        Rule::new("copper-reagent", Tier::Composition, |i| {
            i.profile().composition.copper || i.category_is(&MaterialCategory::CopperBrass)
        })
        .arm(
            Arm::new("persulfate", 85, |i| {
                i.name_has(&["ammonium persulfate", "persulfate"])
            })
            .reason("✓ Ammonium Persulfate - standard for copper/brass"),
        )
        .arm(
            Arm::new("ferric-chloride", 70, |i| i.name_has(&["ferric chloride", "fecl"]))
                .reason("✓ Ferric Chloride - good for copper alloys"),
        )
        .arm(
            Arm::new("marble", 70, |i| i.name_has(&["marble"]))
                .reason("✓ Marble's - excellent for revealing twins"),
        ),
    ]
}

fn microstructure() -> Vec<Rule> {
    vec![
        Rule::new("martensitic", Tier::Microstructure, |i| {
            has_structure(i, Microstructure::Martensitic)
        })
        .arm(
            Arm::new("reveals", 60, |i| i.reveals_has(&["martensite", "martensitic"]))
                .reason("✓ Specifically for martensitic structures"),
        )
        .arm(
            Arm::new("reagent", 50, |i| i.name_has(&["nital", "picral", "vilella"]))
                .reason("✓ Good for martensitic structures"),
        ),
        Rule::new("austenitic", Tier::Microstructure, |i| {
            has_structure(i, Microstructure::Austenitic)
        })
        .arm(
            Arm::new("reveals", 60, |i| i.reveals_has(&["austenite", "austenitic"]))
                .reason("✓ Specifically for austenitic structures"),
        )
        .arm(
            Arm::new("reagent", 50, |i| {
                i.is_electrolytic() || i.name_has(&["kallings", "glyceregia"])
            })
            .reason("✓ Good for austenitic structures"),
        ),
        Rule::new("ferritic", Tier::Microstructure, |i| {
            has_structure(i, Microstructure::Ferritic)
        })
        .arm(
            Arm::new("reveals", 55, |i| i.reveals_has(&["ferrite", "ferritic"]))
                .reason("✓ Specifically for ferritic structures"),
        )
        .arm(Arm::new("reagent", 45, is_nital_or_picral).reason("✓ Good for ferritic structures")),
        Rule::new("pearlitic", Tier::Microstructure, |i| {
            has_structure(i, Microstructure::Pearlitic)
        })
        .arm(
            Arm::new("reveals", 60, |i| i.reveals_has(&["pearlite", "pearlitic"]))
                .reason("✓ Specifically for pearlitic structures"),
        )
        .arm(Arm::new("reagent", 45, is_nital_or_picral).reason("✓ Good for pearlitic structures")),
        Rule::new("pearlitic-picral", Tier::Microstructure, |i| {
            has_structure(i, Microstructure::Pearlitic) && i.reveals_has(&["pearlite", "pearlitic"])
        })
        .arm(
            Arm::new("picral", 20, |i| i.name_has(&["picral"]))
                .tip("Picral is specifically designed to reveal pearlite structure"),
        ),
        Rule::new("duplex", Tier::Microstructure, |i| {
            has_structure(i, Microstructure::Duplex)
        })
        .arm(
            Arm::new("colour-etchant", 70, |i| i.name_has(&["weck", "klemm", "beraha"]))
                .reason("✓ Color etchant for duplex structures")
                .tip("Color etchants are excellent for distinguishing phases in duplex stainless"),
        ),
    ]
}

fn heat_treatment_awareness() -> Vec<Rule> {
    vec![
        Rule::new("heat-treated", Tier::HeatTreatmentAwareness, |i| {
            i.profile().is_quenched_or_tempered()
        })
        .arm(
            Arm::new("nital-picral", 30, is_nital_or_picral)
                .reason("✓ For heat-treated materials")
                .tip("For quenched/tempered materials, start with shorter etch times"),
        ),
        Rule::new("solution-treated", Tier::HeatTreatmentAwareness, is_solution_treated).arm(
            Arm::new("reagent", 25, |i| i.name_has(&["keller", "weck", "electrolytic"]))
                .reason("✓ For solution-treated materials"),
        ),
    ]
}

fn application_context() -> Vec<Rule> {
    use ApplicationContext as Ctx;
    vec![
        Rule::new("quality-control-astm", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::QualityControl)
        })
        .arm(
            Arm::new("astm", 100, has_astm)
                .reason("✓ ASTM standard - ideal for QC")
                .tip_unless(
                    "ASTM-referenced etchants ensure reproducibility and compliance with standards",
                    "ASTM",
                ),
        )
        .arm(Arm::new("no-astm", -30, always)),
        Rule::new("quality-control-featured", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::QualityControl)
        })
        .arm(Arm::new("featured", 50, |i| i.etchant().featured).reason("✓ Featured - proven reliability")),
        Rule::new("failure-analysis-multi-feature", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::FailureAnalysis)
        })
        .arm(
            Arm::new("multi-feature", 80, is_multi_feature)
                .reason("✓ Multi-feature reveal")
                .tip_unless(
                    "For failure analysis, consider progressive etching with multiple etchants",
                    "progressive etching",
                ),
        ),
        Rule::new("failure-analysis-specialty", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::FailureAnalysis)
        })
        .arm(Arm::new("specialty", 50, is_specialty).reason("✓ Specialty etchant for detailed analysis")),
        Rule::new("heat-treatment-verification", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::HeatTreatmentVerification)
        })
        .arm(
            Arm::new("structure", 90, |i| {
                i.reveals_has(&["martensite", "bainite", "prior austenite"])
                    || i.name_has(&["sodium metabisulfite"])
            })
            .reason("✓ Reveals heat treatment structure")
            .tip("This etchant is specifically effective for revealing heat treatment effects"),
        )
        .arm(
            Arm::new("reagent", 60, is_nital_or_picral)
                .reason("✓ Good for heat treatment verification"),
        ),
        Rule::new("welding-analysis", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::WeldingAnalysis)
        })
        .arm(
            Arm::new("reagent", 70, |i| i.name_has(&["nital", "vilella"]) || i.is_electrolytic())
                .reason("✓ Suitable for weld analysis")
                .tip("For weld analysis, consider etching base metal, HAZ, and fusion zone separately"),
        ),
        Rule::new("research-astm", Tier::ApplicationContext, |i| i.context_is(Ctx::Research))
            .arm(Arm::new("astm", 40, has_astm).reason("✓ ASTM standard - well documented")),
        Rule::new("research-multi-feature", Tier::ApplicationContext, |i| {
            i.context_is(Ctx::Research)
        })
        .arm(
            Arm::new("multi-feature", 50, is_multi_feature)
                .reason("✓ Multi-feature reveal - versatile for research"),
        ),
    ]
}

fn hardness_awareness() -> Vec<Rule> {
    vec![
        Rule::new("hard-concentration-named", Tier::HardnessAwareness, is_hard)
            .arm(
                Arm::new("strong", 30, |i| {
                    i.name_has(&["nital-5", "nital-8", "5% nital", "8% nital"])
                })
                .reason("✓ For hard materials")
                .tip("Harder materials may require longer etch times or higher concentrations"),
            )
            .arm(
                Arm::new("dilute", 0, |i| i.name_has(&["nital-2", "2% nital"]))
                    .warning("2% nital may be too weak for very hard materials - consider 5% or higher"),
            ),
        Rule::new("soft-concentration-named", Tier::HardnessAwareness, is_soft)
            .arm(
                Arm::new("dilute", 20, |i| {
                    i.name_has(&["nital-2", "nital-3", "2% nital", "3% nital"])
                })
                .reason("✓ For softer materials")
                .tip("Softer materials require shorter etch times to prevent over-etching"),
            )
            .arm(
                Arm::new("aggressive", 0, |i| i.name_has(&["nital-8", "8% nital"]))
                    .warning("8% nital may be too aggressive for soft materials - start with 2-3%"),
            ),
    ]
}

fn carbon_awareness() -> Vec<Rule> {
    vec![
        Rule::new("high-carbon-expert", Tier::CarbonAwareness, |i| {
            i.profile().composition.carbon == CarbonContent::High
        })
        .arm(
            Arm::new("nital-picral", 25, is_nital_or_picral)
                .reason("✓ For high-carbon steels")
                .tip("High-carbon steels: Picral is excellent for revealing cementite networks"),
        ),
        Rule::new("low-carbon-expert", Tier::CarbonAwareness, |i| {
            i.profile().composition.carbon == CarbonContent::Low
        })
        .arm(Arm::new("nital", 20, |i| i.name_has(&["nital"])).reason("✓ For low-carbon steels")),
    ]
}

fn hardness() -> Vec<Rule> {
    vec![
        Rule::new("hard-concentration", Tier::Hardness, is_hard)
            .arm(
                Arm::new("strong", 40, |i| is_strong(i.etchant_name()))
                    .reason("✓ Higher concentration for hard materials")
                    .tip("Harder materials require higher concentrations or longer etch times"),
            )
            .arm(
                Arm::new("dilute", 0, |i| is_dilute(i.etchant_name()))
                    .warning("Lower concentration Nital may be insufficient for very hard materials"),
            ),
        Rule::new("soft-concentration", Tier::Hardness, is_soft)
            .arm(
                Arm::new("dilute", 35, |i| is_dilute(i.etchant_name()))
                    .reason("✓ Appropriate concentration for softer materials")
                    .tip("Softer materials require shorter etch times to prevent over-etching"),
            )
            .arm(
                Arm::new("aggressive", 0, |i| is_aggressive(i.etchant_name()))
                    .warning("Higher concentration Nital may be too aggressive - start with 2-3%"),
            ),
    ]
}

fn carbon_content() -> Vec<Rule> {
    vec![
        Rule::new("high-carbon", Tier::CarbonContent, |i| {
            i.profile().composition.carbon == CarbonContent::High
        })
        .arm(
            Arm::new("picral", 35, |i| i.name_has(&["picral"]))
                .reason("✓ Picral excellent for high-carbon steels")
                .tip("Picral is specifically excellent for revealing cementite networks in high-carbon steels"),
        )
        .arm(Arm::new("nital", 25, |i| i.name_has(&["nital"])).reason("✓ Nital good for high-carbon steels")),
        Rule::new("low-carbon", Tier::CarbonContent, |i| {
            i.profile().composition.carbon == CarbonContent::Low
        })
        .arm(Arm::new("nital", 30, |i| i.name_has(&["nital"])).reason("✓ Nital standard for low-carbon steels")),
    ]
}

fn heat_treatment_state() -> Vec<Rule> {
    vec![
        Rule::new("quenched-tempered-state", Tier::HeatTreatmentState, |i| {
            i.profile().is_quenched_or_tempered()
        })
        .arm(
            Arm::new("reagent", 30, |i| {
                i.name_has(&["nital", "picral", "sodium metabisulfite"])
            })
            .reason("✓ Suitable for quenched/tempered materials")
            .tip("For quenched/tempered materials, start with shorter etch times and monitor closely"),
        ),
        Rule::new("solution-treated-state", Tier::HeatTreatmentState, is_solution_treated).arm(
            Arm::new("reagent", 25, suits_solution_treated)
                .reason("✓ Good for solution-treated materials"),
        ),
    ]
}

fn quality_indicators() -> Vec<Rule> {
    vec![
        Rule::new("astm-reference", Tier::QualityIndicator, always)
            .arm(Arm::new("reference", 25, has_astm).reason("✓ ASTM {astm}")),
        Rule::new("astm-compliance", Tier::QualityIndicator, |i| {
            i.context_is(ApplicationContext::QualityControl)
        })
        .arm(Arm::new("tip", 0, has_astm).tip_unless(
            "ASTM {astm} compliance ensures reproducibility for quality control",
            "ASTM",
        )),
        Rule::new("featured", Tier::QualityIndicator, always).arm(
            Arm::new("featured", 20, |i| i.etchant().featured)
                .reason("✓ Featured - most commonly used")
                .tip("Featured etchants are industry-standard choices with proven reliability"),
        ),
        Rule::new("premixed-product", Tier::QualityIndicator, always).arm(
            Arm::new("available", 10, |i| i.etchant().pace_product_available)
                .reason("✓ Pre-mixed available"),
        ),
    ]
}

fn safety() -> Vec<Rule> {
    vec![
        Rule::new("corrosive-aluminum", Tier::Safety, |i| {
            i.category_is(&MaterialCategory::Aluminum)
        })
        .arm(Arm::new("warning", 0, |i| i.etchant().has_hazard("corrosive")).warning(
            "Corrosive etchants on aluminum require careful handling - ensure proper ventilation",
        )),
        Rule::new("toxic-quality-control", Tier::Safety, |i| {
            i.context_is(ApplicationContext::QualityControl)
        })
        .arm(Arm::new("warning", 0, |i| i.etchant().has_hazard("toxic")).warning(
            "Toxic etchant - ensure proper PPE and disposal procedures for production use",
        )),
    ]
}

fn timing() -> Vec<Rule> {
    vec![
        Rule::new("very-hard-short-etch", Tier::Timing, |i| {
            i.hardness() == Some(HardnessCategory::VeryHard)
        })
        .arm(
            Arm::new("tip", 0, |i| typical_seconds(i).is_some_and(|secs| secs < 10))
                .tip("Very hard materials may require longer than {seconds}s - monitor visually"),
        ),
        Rule::new("soft-long-etch", Tier::Timing, |i| {
            i.hardness() == Some(HardnessCategory::Soft)
        })
        .arm(
            Arm::new("tip", 0, |i| typical_seconds(i).is_some_and(|secs| secs > 30))
                .tip("Soft materials may over-etch in {seconds}s - start with shorter times"),
        ),
    ]
}

/// Build the standard rule table.
///
/// Rules appear in tier order; reasons are emitted in this order.
#[must_use]
pub fn standard_rules() -> Vec<Rule> {
    [
        compatibility(),
        purpose(),
        composition(),
        microstructure(),
        heat_treatment_awareness(),
        application_context(),
        hardness_awareness(),
        carbon_awareness(),
        hardness(),
        carbon_content(),
        heat_treatment_state(),
        quality_indicators(),
        safety(),
        timing(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
