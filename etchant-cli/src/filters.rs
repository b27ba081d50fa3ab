//! `filters` command: list the purposes and application contexts.

use std::io::Write;

use etchant_core::{ApplicationContext, Purpose};
use serde::Serialize;

use crate::{CliError, write_json};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct FilterEntry {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct FilterListing {
    pub(crate) purposes: Vec<FilterEntry>,
    pub(crate) contexts: Vec<FilterEntry>,
}

pub(crate) fn filter_listing() -> FilterListing {
    FilterListing {
        purposes: Purpose::ALL
            .into_iter()
            .map(|purpose| FilterEntry {
                key: purpose.as_str(),
                label: purpose.label(),
                description: purpose.description(),
            })
            .collect(),
        contexts: ApplicationContext::ALL
            .into_iter()
            .map(|context| FilterEntry {
                key: context.as_str(),
                label: context.label(),
                description: context.description(),
            })
            .collect(),
    }
}

pub(crate) fn run_filters(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &filter_listing())
}
