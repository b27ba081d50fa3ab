//! Recommend command implementation for the etchant CLI.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use etchant_core::{ApplicationContext, EtchantMatch, MatchRequest, Purpose, Recommender};
use etchant_data::{Catalog, FileSource};
use etchant_matcher::{EtchantMatcher, RuleCatalog};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::materials::MaterialSummary;
use crate::{
    ARG_CONTEXT, ARG_ETCHANTS, ARG_MATERIAL, ARG_MATERIALS, ARG_PURPOSE, ARG_WEIGHTS, CliError,
    ENV_RECOMMEND_ETCHANTS, ENV_RECOMMEND_MATERIAL, ENV_RECOMMEND_MATERIALS, require_existing,
    write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank etchants for one material. Catalogs are read from \
                 CSV, JSON or SQLite files chosen by extension; the \
                 material is resolved by id, slug or name. Rule weights \
                 can be overridden with a JSON object keyed by \
                 '<rule-id>.<arm-key>'.",
    about = "Recommend etchants for a material"
)]
#[ortho_config(prefix = "ETCHANT")]
pub(crate) struct RecommendArgs {
    /// Path to the material catalog.
    #[arg(long = ARG_MATERIALS, value_name = "path")]
    #[serde(default)]
    pub(crate) materials: Option<Utf8PathBuf>,
    /// Path to the etchant catalog; may be the same SQLite database.
    #[arg(long = ARG_ETCHANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) etchants: Option<Utf8PathBuf>,
    /// Material id, slug or name.
    #[arg(long = ARG_MATERIAL, value_name = "key")]
    #[serde(default)]
    pub(crate) material: Option<String>,
    /// Microstructural feature to reveal, e.g. "grain-boundaries".
    #[arg(long = ARG_PURPOSE, value_name = "purpose")]
    #[serde(default)]
    pub(crate) purpose: Option<String>,
    /// Application context, e.g. "failure-analysis".
    #[arg(long = ARG_CONTEXT, value_name = "context")]
    #[serde(default)]
    pub(crate) context: Option<String>,
    /// JSON file of rule weight overrides.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) materials: Utf8PathBuf,
    pub(crate) etchants: Utf8PathBuf,
    pub(crate) material: String,
    pub(crate) purpose: Option<Purpose>,
    pub(crate) context: Option<ApplicationContext>,
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.materials, ARG_MATERIALS)?;
        require_existing(&self.etchants, ARG_ETCHANTS)?;
        if let Some(weights) = &self.weights {
            require_existing(weights, ARG_WEIGHTS)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let materials = args.materials.ok_or(CliError::MissingArgument {
            field: ARG_MATERIALS,
            env: ENV_RECOMMEND_MATERIALS,
        })?;
        let etchants = args.etchants.ok_or(CliError::MissingArgument {
            field: ARG_ETCHANTS,
            env: ENV_RECOMMEND_ETCHANTS,
        })?;
        let material = args.material.ok_or(CliError::MissingArgument {
            field: ARG_MATERIAL,
            env: ENV_RECOMMEND_MATERIAL,
        })?;
        let purpose = args
            .purpose
            .as_deref()
            .map(str::parse::<Purpose>)
            .transpose()?;
        let context = args
            .context
            .as_deref()
            .map(str::parse::<ApplicationContext>)
            .transpose()?;
        Ok(Self {
            materials,
            etchants,
            material,
            purpose,
            context,
            weights: args.weights,
        })
    }
}

/// JSON document printed by `recommend`.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendResponse<'a> {
    pub(crate) material: MaterialSummary,
    pub(crate) rule_catalog: String,
    pub(crate) matches: Vec<EtchantMatch<'a>>,
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalog = load_catalog(&config)?;
    let matcher = EtchantMatcher::with_catalog(load_rule_catalog(config.weights.as_deref())?);
    let response = execute_recommend(&config, &catalog, &matcher)?;
    write_json(writer, &response)
}

fn load_catalog(config: &RecommendConfig) -> Result<Catalog, CliError> {
    let source = FileSource::new(config.materials.clone(), config.etchants.clone());
    Ok(Catalog::load(&source)?)
}

/// Build the rule catalog, applying overrides from `weights` when given.
pub(crate) fn load_rule_catalog(weights: Option<&Utf8Path>) -> Result<RuleCatalog, CliError> {
    let mut rules = RuleCatalog::standard();
    let Some(path) = weights else {
        return Ok(rules);
    };
    let text = etchant_data::fs::read_text(path).map_err(|source| CliError::ReadWeights {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides: BTreeMap<String, i32> =
        serde_json::from_str(&text).map_err(|source| CliError::ParseWeights {
            path: path.to_path_buf(),
            source,
        })?;
    rules.apply_overrides(&overrides)?;
    info!(
        "applied {} rule weight overrides from {path}",
        overrides.len()
    );
    Ok(rules)
}

pub(crate) fn execute_recommend<'c>(
    config: &RecommendConfig,
    catalog: &'c Catalog,
    matcher: &EtchantMatcher,
) -> Result<RecommendResponse<'c>, CliError> {
    let material = catalog
        .find_material(&config.material)
        .ok_or_else(|| CliError::UnknownMaterial {
            key: config.material.clone(),
        })?;
    let request = MatchRequest {
        material: Some(material),
        purpose: config.purpose,
        context: config.context,
    };
    Ok(RecommendResponse {
        material: MaterialSummary::from(material),
        rule_catalog: matcher.catalog().version().to_string(),
        matches: matcher.recommend(&request, catalog.etchants()),
    })
}
