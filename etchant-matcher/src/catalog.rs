//! The ordered rule catalog and its weight configuration.
//!
//! Every arm has a dotted weight key `<rule-id>.<arm-key>`. Weights are
//! policy: the standard table is versioned and any override marks the
//! catalog as customised.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RuleCatalogError;
use crate::rules::{Arm, Rule, Tier, standard_rules};

/// Version of the standard weight table.
pub const STANDARD_CATALOG_VERSION: u32 = 1;

/// Identifies the weight table a ranking was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogVersion {
    /// Standard table version.
    pub standard: u32,
    /// Whether any weight was overridden.
    pub customised: bool,
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.standard)?;
        if self.customised {
            f.write_str("+custom")?;
        }
        Ok(())
    }
}

/// Ordered rules evaluated for every candidate.
///
/// # Examples
/// ```
/// use etchant_matcher::RuleCatalog;
///
/// let mut catalog = RuleCatalog::standard();
/// assert_eq!(catalog.weight("featured.featured"), Some(20));
/// catalog.set_weight("featured.featured", 30).unwrap();
/// assert_eq!(catalog.version().to_string(), "v1+custom");
/// assert!(catalog.set_weight("featured.missing", 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    customised: bool,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleCatalog {
    /// Catalog holding the standard rule table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
            customised: false,
        }
    }

    /// Build a catalog from custom rules.
    ///
    /// Such catalogs always report themselves as customised.
    #[must_use]
    pub const fn from_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            customised: true,
        }
    }

    /// Keep only rules belonging to `tiers`, for isolated evaluation.
    #[must_use]
    pub fn restricted_to(mut self, tiers: &[Tier]) -> Self {
        self.rules.retain(|rule| tiers.contains(&rule.tier()));
        self.customised = true;
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Version of the weight table in use.
    #[must_use]
    pub const fn version(&self) -> CatalogVersion {
        CatalogVersion {
            standard: STANDARD_CATALOG_VERSION,
            customised: self.customised,
        }
    }

    /// Every weight key with its current value, in evaluation order.
    #[must_use]
    pub fn weights(&self) -> Vec<(String, i32)> {
        self.rules
            .iter()
            .flat_map(|rule| {
                rule.arms()
                    .iter()
                    .map(move |arm| (format!("{}.{}", rule.id(), arm.key()), arm.weight()))
            })
            .collect()
    }

    /// Current weight for `key`.
    #[must_use]
    pub fn weight(&self, key: &str) -> Option<i32> {
        let (rule_id, arm_key) = key.split_once('.')?;
        self.rules
            .iter()
            .filter(|rule| rule.id() == rule_id)
            .flat_map(Rule::arms)
            .find(|arm| arm.key() == arm_key)
            .map(Arm::weight)
    }

    /// Override the weight of a single arm.
    ///
    /// # Errors
    /// Returns [`RuleCatalogError::MalformedKey`] when `key` has no dot and
    /// [`RuleCatalogError::UnknownWeight`] when it names no arm.
    pub fn set_weight(&mut self, key: &str, weight: i32) -> Result<(), RuleCatalogError> {
        let (rule_id, arm_key) = key
            .split_once('.')
            .ok_or_else(|| RuleCatalogError::MalformedKey {
                key: key.to_owned(),
            })?;
        let arm = self
            .rules
            .iter_mut()
            .filter(|rule| rule.id() == rule_id)
            .find_map(|rule| rule.arm_mut(arm_key))
            .ok_or_else(|| RuleCatalogError::UnknownWeight {
                key: key.to_owned(),
            })?;
        arm.set_weight(weight);
        self.customised = true;
        Ok(())
    }

    /// Apply several overrides at once.
    ///
    /// Every key is validated before any weight changes, so a rejected map
    /// leaves the catalog untouched.
    ///
    /// # Errors
    /// Returns the first key error encountered, as for
    /// [`RuleCatalog::set_weight`].
    pub fn apply_overrides(
        &mut self,
        overrides: &BTreeMap<String, i32>,
    ) -> Result<(), RuleCatalogError> {
        if let Some(unknown) = overrides.keys().find(|key| self.weight(key).is_none()) {
            return Err(if unknown.contains('.') {
                RuleCatalogError::UnknownWeight {
                    key: unknown.clone(),
                }
            } else {
                RuleCatalogError::MalformedKey {
                    key: unknown.clone(),
                }
            });
        }
        for (key, weight) in overrides {
            self.set_weight(key, *weight)?;
        }
        Ok(())
    }
}
