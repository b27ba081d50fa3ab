//! JSON catalogs: a top-level array of objects.

use camino::Utf8Path;
use etchant_core::Record;
use log::warn;
use serde_json::Value;

use crate::error::CatalogError;

/// Parse a JSON catalog into records.
///
/// Array entries that are not objects are skipped with a warning.
///
/// # Errors
/// Returns [`CatalogError::Json`] for invalid JSON and
/// [`CatalogError::NotAnArray`] when the document is not an array.
pub fn parse_records(path: &Utf8Path, text: &str) -> Result<Vec<Record>, CatalogError> {
    let document: Value = serde_json::from_str(text).map_err(|source| CatalogError::Json {
        path: path.to_owned(),
        source,
    })?;
    let Value::Array(entries) = document else {
        return Err(CatalogError::NotAnArray {
            path: path.to_owned(),
        });
    };
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(fields) => Some(Record::from(fields)),
            other => {
                warn!("skipping entry {index} in {path}: expected an object, found {other}");
                None
            }
        })
        .collect())
}
