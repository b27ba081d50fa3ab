//! Error types emitted by the etchant CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use etchant_core::UnknownFilter;
use etchant_data::CatalogError;
use etchant_matcher::RuleCatalogError;
use thiserror::Error;

/// Errors emitted by the etchant CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A purpose or application context was not recognised.
    #[error(transparent)]
    InvalidFilter(#[from] UnknownFilter),
    /// Loading a catalog file failed.
    #[error("failed to load catalog: {0}")]
    LoadCatalog(#[from] CatalogError),
    /// The requested material is not in the catalog.
    #[error("no published material matches '{key}'")]
    UnknownMaterial { key: String },
    /// Reading the weight override file failed.
    #[error("failed to read rule weights at {path:?}: {source}")]
    ReadWeights {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The weight override file is not a JSON object of integers.
    #[error("failed to parse rule weights JSON at {path:?}: {source}")]
    ParseWeights {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A weight override named an unknown or malformed rule key.
    #[error("invalid rule weights: {0}")]
    InvalidWeights(#[from] RuleCatalogError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
