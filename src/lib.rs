//! Facade crate for the etchant recommendation engine.
//!
//! This crate re-exports the core domain types and the rule-based matcher,
//! and exposes catalog loading behind the `data` feature.
//!
//! ```
//! use etchant_engine::{Etchant, EtchantMatcher, MatchRequest, Material, Recommender};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let material = Material::new("1018", "AISI 1018")?.with_category("Carbon Steel");
//! let nital = Etchant::new(Some("nital"), None, "Nital 2%")?
//!     .with_compatible_materials(["carbon-steel"]);
//! let candidates = [nital];
//! let request = MatchRequest::for_material(&material);
//! let matches = EtchantMatcher::new().recommend(&request, &candidates);
//! assert_eq!(matches.first().map(|m| m.etchant.key()), Some("nital"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use etchant_core::{
    ApplicationContext, Etchant, EtchantCategory, EtchantError, EtchantMatch, HardnessCategory,
    MatchRequest, Material, MaterialCategory, MaterialError, MaterialProfile, Purpose,
    RESULT_LIMIT, Record, Recommender, SEQUENCE_LENGTH, ScoreTier, UniqueList, UnknownFilter,
    UnknownHardness,
};

pub use etchant_matcher::{
    CatalogVersion, EtchantMatcher, RuleCatalog, RuleCatalogError, STANDARD_CATALOG_VERSION,
    match_etchants, progressive_plan,
};

#[cfg(feature = "data")]
pub use etchant_data::{Catalog, CatalogError, CatalogSource, FileSource, MemoryCatalog};
