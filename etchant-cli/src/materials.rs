//! `materials` command: search the material catalog.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use etchant_core::{Material, MaterialCategory};
use etchant_data::{Catalog, DEFAULT_SEARCH_LIMIT, FileSource};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_LIMIT, ARG_MATERIALS, ARG_QUERY, CliError, ENV_MATERIALS_MATERIALS, require_existing,
    write_json,
};

/// CLI arguments for the `materials` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search the material catalog by name, category, \
                 composition, alternative names and tags. An empty query \
                 lists featured materials first.",
    about = "Search the material catalog"
)]
#[ortho_config(prefix = "ETCHANT")]
pub(crate) struct MaterialsArgs {
    /// Path to the material catalog (.csv, .json, .db or .sqlite).
    #[arg(long = ARG_MATERIALS, value_name = "path")]
    #[serde(default)]
    pub(crate) materials: Option<Utf8PathBuf>,
    /// Case-insensitive search text.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Maximum number of materials to print.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl MaterialsArgs {
    fn into_config(self) -> Result<MaterialsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MaterialsConfig::try_from(merged)
    }
}

/// Resolved `materials` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MaterialsConfig {
    pub(crate) materials: Utf8PathBuf,
    pub(crate) query: String,
    pub(crate) limit: usize,
}

impl TryFrom<MaterialsArgs> for MaterialsConfig {
    type Error = CliError;

    fn try_from(args: MaterialsArgs) -> Result<Self, Self::Error> {
        let materials = args.materials.ok_or(CliError::MissingArgument {
            field: ARG_MATERIALS,
            env: ENV_MATERIALS_MATERIALS,
        })?;
        Ok(Self {
            materials,
            query: args.query.unwrap_or_default(),
            limit: args.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        })
    }
}

/// One line of the material listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct MaterialSummary {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) category: MaterialCategory,
}

impl From<&Material> for MaterialSummary {
    fn from(material: &Material) -> Self {
        Self {
            id: material.id.clone(),
            name: material.name.clone(),
            category: MaterialCategory::derive(material),
        }
    }
}

pub(crate) fn run_materials(args: MaterialsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let listing = execute_materials(&config)?;
    write_json(writer, &listing)
}

pub(crate) fn execute_materials(
    config: &MaterialsConfig,
) -> Result<Vec<MaterialSummary>, CliError> {
    require_existing(&config.materials, ARG_MATERIALS)?;
    let catalog = Catalog::load(&FileSource::materials_only(config.materials.clone()))?;
    Ok(catalog
        .search_materials(&config.query, config.limit)
        .into_iter()
        .map(MaterialSummary::from)
        .collect())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<MaterialsConfig, CliError> {
    let merged = MaterialsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    MaterialsConfig::try_from(merged)
}
