//! Rule-driven etchant matching.
//!
//! [`EtchantMatcher`] implements [`Recommender`](etchant_core::Recommender).
//! Every candidate is checked for hard incompatibility with the material,
//! then scored by each rule of a [`RuleCatalog`] in tier order. Candidates
//! with a positive score are ranked, truncated to the result limit and,
//! for failure analysis, annotated as a progressive treatment sequence.
//!
//! Rules are data: each [`Rule`] pairs a gate predicate with mutually
//! exclusive [`Arm`]s carrying a weight and reason, tip and warning
//! templates. Weights are addressable as `<rule-id>.<arm-key>` and may be
//! overridden through [`RuleCatalog::set_weight`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod engine;
mod error;
pub mod input;
mod matcher;
mod rank;
pub mod rules;
mod sequence;

pub use catalog::{CatalogVersion, RuleCatalog, STANDARD_CATALOG_VERSION};
pub use engine::{ScoreSheet, score_candidate};
pub use error::RuleCatalogError;
pub use input::{Candidate, RuleInput, Subject};
pub use matcher::{EtchantMatcher, match_etchants};
pub use rank::rank;
pub use rules::{Arm, Predicate, Rule, Template, Tier, standard_rules};
pub use sequence::{assign_sequence, progressive_plan};
