#![cfg_attr(docsrs, feature(doc_cfg))]
//! Core domain types for the etchant engine.
//!
//! Materials and etchants arrive as loosely shaped catalog records; the
//! constructors here normalise them and reject records without identity.
//! Everything else (empty fields, unparsable arrays) degrades to empty
//! values so a single bad record never aborts a match.

pub mod etchant;
pub mod field;
pub mod filters;
pub mod material;
pub mod profile;
pub mod recommendation;
pub mod recommender;
pub mod unique;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use etchant::{ELECTROLYTIC_METHOD, Etchant, EtchantCategory, EtchantError};
pub use field::{PUBLISHED_STATUS, Record};
pub use filters::{ApplicationContext, MatchRequest, Purpose, UnknownFilter};
pub use material::{HardnessCategory, Material, MaterialError, UnknownHardness};
pub use profile::{
    CarbonContent, CompositionFlags, HeatTreatmentState, MaterialCategory, MaterialProfile,
    Microstructure,
};
pub use recommendation::{
    EtchantMatch, MAX_SCORE_REFERENCE, RESULT_LIMIT, SEQUENCE_LENGTH, ScoreTier, score_percentage,
};
pub use recommender::Recommender;
pub use unique::UniqueList;
