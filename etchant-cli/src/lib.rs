//! Command-line interface for the etchant recommendation engine.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod filters;
mod materials;
mod recommend;

pub use error::CliError;

use materials::MaterialsArgs;
use recommend::RecommendArgs;

pub(crate) const ARG_MATERIALS: &str = "materials";
pub(crate) const ARG_ETCHANTS: &str = "etchants";
pub(crate) const ARG_MATERIAL: &str = "material";
pub(crate) const ARG_PURPOSE: &str = "purpose";
pub(crate) const ARG_CONTEXT: &str = "context";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ENV_RECOMMEND_MATERIALS: &str = "ETCHANT_CMDS_RECOMMEND_MATERIALS";
pub(crate) const ENV_RECOMMEND_ETCHANTS: &str = "ETCHANT_CMDS_RECOMMEND_ETCHANTS";
pub(crate) const ENV_RECOMMEND_MATERIAL: &str = "ETCHANT_CMDS_RECOMMEND_MATERIAL";
pub(crate) const ENV_MATERIALS_MATERIALS: &str = "ETCHANT_CMDS_MATERIALS_MATERIALS";

/// Run the etchant CLI with the current process arguments and environment,
/// writing results to standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, catalogs or output
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

/// Parse `args` (including the binary name) and write the result to
/// `writer`.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, catalogs or output
/// fail.
pub fn run_from<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    run_command(cli.command, writer)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => recommend::run_recommend(args, writer),
        Command::Materials(args) => materials::run_materials(args, writer),
        Command::Filters => filters::run_filters(writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "etchant",
    about = "Recommend metallographic etchants for a material",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank etchants for a material from catalog files.
    Recommend(RecommendArgs),
    /// Search the material catalog.
    Materials(MaterialsArgs),
    /// List the purpose and application context filters.
    Filters,
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match etchant_data::fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `payload` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    payload: &T,
) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(payload).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(text.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
