//! Catalog loading for the etchant engine.
//!
//! Responsibilities:
//! - Read material and etchant datasets from CSV, JSON, SQLite or memory.
//! - Gate records on publication status and identity.
//! - Offer material lookup and search over the loaded snapshot.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `etchant-matcher`).
//! - Malformed rows are skipped with a warning; only unreadable files fail.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
pub mod csv;
mod error;
pub mod fs;
pub mod json;
mod source;
#[cfg(feature = "store-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "store-sqlite")))]
pub mod sqlite;

pub use catalog::{Catalog, DEFAULT_SEARCH_LIMIT};
pub use error::CatalogError;
pub use source::{CatalogSource, FileFormat, FileSource, MemoryCatalog, RecordKind, read_records};
