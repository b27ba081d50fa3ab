//! Lowercased views of the material and candidate handed to each rule.
//!
//! [`Subject`] is derived once per invocation; [`Candidate`] once per
//! etchant. Rules only ever see the pair through [`RuleInput`].

use etchant_core::{
    ApplicationContext, Etchant, HardnessCategory, Material, MaterialCategory, MaterialProfile,
    Purpose,
};

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

/// The material under examination plus its derived attributes.
#[derive(Debug, Clone)]
pub struct Subject<'a> {
    material: &'a Material,
    profile: MaterialProfile,
    name: String,
    common_etchants: Vec<String>,
}

impl<'a> Subject<'a> {
    /// Derive every attribute of `material`.
    #[must_use]
    pub fn new(material: &'a Material) -> Self {
        Self {
            material,
            profile: MaterialProfile::derive(material),
            name: material.name.to_lowercase(),
            common_etchants: lowercase_all(&material.common_etchants),
        }
    }

    /// The underlying material.
    #[must_use]
    pub const fn material(&self) -> &'a Material {
        self.material
    }

    /// Derived attributes.
    #[must_use]
    pub const fn profile(&self) -> &MaterialProfile {
        &self.profile
    }
}

/// One etchant with its text fields lowercased.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    etchant: &'a Etchant,
    name: String,
    reveals: String,
    alternative_names: Vec<String>,
    purpose_text: String,
}

impl<'a> Candidate<'a> {
    /// Prepare `etchant` for rule evaluation.
    #[must_use]
    pub fn new(etchant: &'a Etchant) -> Self {
        let name = etchant.name.to_lowercase();
        let reveals = etchant.reveals.to_lowercase();
        let alternative_names = lowercase_all(&etchant.alternative_names);
        let all_names = std::iter::once(name.as_str())
            .chain(alternative_names.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        let purpose_text = format!(
            "{reveals} {} {all_names}",
            etchant.typical_results.to_lowercase()
        );
        Self {
            etchant,
            name,
            reveals,
            alternative_names,
            purpose_text,
        }
    }

    /// The underlying etchant.
    #[must_use]
    pub const fn etchant(&self) -> &'a Etchant {
        self.etchant
    }

    fn is_named_like(&self, common: &str) -> bool {
        let by_name =
            !self.name.is_empty() && (self.name.contains(common) || common.contains(&self.name));
        by_name
            || self
                .alternative_names
                .iter()
                .any(|alt| alt.contains(common) || common.contains(alt.as_str()))
    }
}

/// Everything a rule predicate may inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    subject: &'a Subject<'a>,
    candidate: &'a Candidate<'a>,
    purpose: Option<Purpose>,
    context: Option<ApplicationContext>,
}

impl<'a> RuleInput<'a> {
    /// Bundle a subject and candidate with the active filters.
    ///
    /// `general` filters must already be mapped to `None`.
    #[must_use]
    pub const fn new(
        subject: &'a Subject<'a>,
        candidate: &'a Candidate<'a>,
        purpose: Option<Purpose>,
        context: Option<ApplicationContext>,
    ) -> Self {
        Self {
            subject,
            candidate,
            purpose,
            context,
        }
    }

    /// The material under examination.
    #[must_use]
    pub const fn material(&self) -> &'a Material {
        self.subject.material
    }

    /// Derived material attributes.
    #[must_use]
    pub const fn profile(&self) -> &'a MaterialProfile {
        &self.subject.profile
    }

    /// The candidate etchant.
    #[must_use]
    pub const fn etchant(&self) -> &'a Etchant {
        self.candidate.etchant
    }

    /// Active purpose filter.
    #[must_use]
    pub const fn purpose(&self) -> Option<Purpose> {
        self.purpose
    }

    /// Active application context.
    #[must_use]
    pub const fn context(&self) -> Option<ApplicationContext> {
        self.context
    }

    /// Report whether the active purpose is `purpose`.
    #[must_use]
    pub fn purpose_is(&self, purpose: Purpose) -> bool {
        self.purpose == Some(purpose)
    }

    /// Report whether the active context is `context`.
    #[must_use]
    pub fn context_is(&self, context: ApplicationContext) -> bool {
        self.context == Some(context)
    }

    /// Report whether the material belongs to `category`.
    #[must_use]
    pub fn category_is(&self, category: &MaterialCategory) -> bool {
        self.subject.profile.category == *category
    }

    /// Material hardness, if known.
    #[must_use]
    pub const fn hardness(&self) -> Option<HardnessCategory> {
        self.subject.material.hardness_category
    }

    /// Report whether the lowercased material name contains any needle.
    #[must_use]
    pub fn material_name_has(&self, needles: &[&str]) -> bool {
        contains_any(&self.subject.name, needles)
    }

    /// Lowercased etchant name.
    #[must_use]
    pub fn etchant_name(&self) -> &'a str {
        &self.candidate.name
    }

    /// Report whether the lowercased etchant name contains any needle.
    #[must_use]
    pub fn name_has(&self, needles: &[&str]) -> bool {
        contains_any(&self.candidate.name, needles)
    }

    /// Report whether the lowercased `reveals` text contains any needle.
    #[must_use]
    pub fn reveals_has(&self, needles: &[&str]) -> bool {
        contains_any(&self.candidate.reveals, needles)
    }

    /// Report whether reveals, typical results or any name contains a needle.
    #[must_use]
    pub fn purpose_text_has(&self, needles: &[&str]) -> bool {
        contains_any(&self.candidate.purpose_text, needles)
    }

    /// Report whether the candidate is applied electrolytically.
    #[must_use]
    pub fn is_electrolytic(&self) -> bool {
        self.candidate.etchant.is_electrolytic()
    }

    /// Report whether the candidate lists the material's category as compatible.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.candidate
            .etchant
            .is_compatible_with(self.subject.profile.category.as_str())
    }

    /// Report whether any documented common etchant names this candidate.
    #[must_use]
    pub fn is_proven_pairing(&self) -> bool {
        self.subject
            .common_etchants
            .iter()
            .any(|common| self.candidate.is_named_like(common))
    }

    /// Report whether the candidate links directly to the material id.
    #[must_use]
    pub fn is_directly_linked(&self) -> bool {
        let id = self.subject.material.id.as_str();
        self.candidate
            .etchant
            .related_material_ids
            .iter()
            .any(|related| related == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etchant_core::test_support::{ductile_iron, nital_2, steads};
    use rstest::rstest;

    #[rstest]
    fn proven_pairing_matches_either_direction() {
        let material = ductile_iron();
        let subject = Subject::new(&material);
        let nital = nital_2();
        let candidate = Candidate::new(&nital);
        let input = RuleInput::new(&subject, &candidate, None, None);
        assert!(input.is_proven_pairing());
    }

    #[rstest]
    fn alternative_names_feed_purpose_text() {
        let material = ductile_iron();
        let subject = Subject::new(&material);
        let etchant = steads().with_alternative_names(["Phosphide Etch"]);
        let candidate = Candidate::new(&etchant);
        let input = RuleInput::new(&subject, &candidate, None, None);
        assert!(input.purpose_text_has(&["phosphide etch"]));
        assert!(input.reveals_has(&["graphite"]));
    }

    #[rstest]
    fn blank_names_never_pair() {
        let material = ductile_iron();
        let subject = Subject::new(&material);
        let etchant = Etchant::new(Some("blank"), None, "").expect("id present");
        let candidate = Candidate::new(&etchant);
        let input = RuleInput::new(&subject, &candidate, None, None);
        assert!(!input.is_proven_pairing());
    }
}
