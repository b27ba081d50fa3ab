//! Errors raised while loading catalogs.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure to read or decode a catalog file.
///
/// Individual malformed records never produce an error; they are skipped
/// with a warning. Only unreadable or structurally invalid files fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the file failed.
    #[error("failed to read catalog at {path}: {source}")]
    Io {
        /// Location of the catalog file.
        path: Utf8PathBuf,
        /// Source error returned by the filesystem.
        #[source]
        source: io::Error,
    },
    /// The file was not valid JSON.
    #[error("failed to parse JSON catalog at {path}: {source}")]
    Json {
        /// Location of the catalog file.
        path: Utf8PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A JSON catalog was not a top-level array of objects.
    #[error("JSON catalog at {path} must be an array of objects")]
    NotAnArray {
        /// Location of the catalog file.
        path: Utf8PathBuf,
    },
    /// The file extension names no supported format.
    #[error("unsupported catalog format for {path}: expected .csv, .json, .db or .sqlite")]
    UnsupportedFormat {
        /// Location of the catalog file.
        path: Utf8PathBuf,
    },
    /// Opening or querying the SQLite database failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to read table {table} from SQLite database at {path}: {source}")]
    Sqlite {
        /// Location of the SQLite database on disk.
        path: Utf8PathBuf,
        /// Table being read.
        table: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}
