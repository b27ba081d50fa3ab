//! Catalog sources: where raw material and etchant records come from.

use camino::{Utf8Path, Utf8PathBuf};
use etchant_core::{Etchant, Material, Record};
use log::{debug, warn};

use crate::error::CatalogError;

/// Which of the two datasets a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Material rows.
    Materials,
    /// Etchant rows.
    Etchants,
}

impl RecordKind {
    /// Table name used by database-backed sources.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Materials => "materials",
            Self::Etchants => "etchants",
        }
    }
}

/// Bulk read access to the two catalog datasets.
///
/// Implementors return raw records; the provided methods convert them to
/// domain values, skipping unpublished rows and rows without identity.
///
/// # Examples
/// ```
/// use etchant_core::Record;
/// use etchant_data::{CatalogError, CatalogSource, RecordKind};
///
/// struct Fixed;
///
/// impl CatalogSource for Fixed {
///     fn fetch_records(&self, kind: RecordKind) -> Result<Vec<Record>, CatalogError> {
///         Ok(match kind {
///             RecordKind::Materials => vec![
///                 Record::new().with_field("id", "m1").with_field("name", "AISI 1018"),
///                 Record::new().with_field("id", "m2").with_field("status", "draft"),
///             ],
///             RecordKind::Etchants => vec![Record::new().with_field("name", "anonymous")],
///         })
///     }
/// }
///
/// assert_eq!(Fixed.fetch_materials().unwrap().len(), 1);
/// assert!(Fixed.fetch_candidates().unwrap().is_empty());
/// ```
pub trait CatalogSource {
    /// Return every raw record of `kind`, published or not.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the underlying storage cannot be read.
    fn fetch_records(&self, kind: RecordKind) -> Result<Vec<Record>, CatalogError>;

    /// Published materials in source order.
    ///
    /// # Errors
    /// Propagates [`CatalogSource::fetch_records`] failures.
    fn fetch_materials(&self) -> Result<Vec<Material>, CatalogError> {
        Ok(published(self.fetch_records(RecordKind::Materials)?)
            .filter_map(|record| match Material::from_record(&record) {
                Ok(material) => Some(material),
                Err(err) => {
                    warn!("skipping material record: {err}");
                    None
                }
            })
            .collect())
    }

    /// Published etchants in source order.
    ///
    /// # Errors
    /// Propagates [`CatalogSource::fetch_records`] failures.
    fn fetch_candidates(&self) -> Result<Vec<Etchant>, CatalogError> {
        Ok(published(self.fetch_records(RecordKind::Etchants)?)
            .filter_map(|record| match Etchant::from_record(&record) {
                Ok(etchant) => Some(etchant),
                Err(err) => {
                    warn!("skipping etchant record '{}': {err}", record.text("name"));
                    None
                }
            })
            .collect())
    }
}

fn published(records: Vec<Record>) -> impl Iterator<Item = Record> {
    records.into_iter().filter(|record| {
        let admitted = record.is_published();
        if !admitted {
            debug!(
                "skipping unpublished record '{}' with status '{}'",
                record.text("id"),
                record.text("status")
            );
        }
        admitted
    })
}

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON array of objects.
    Json,
    /// A SQLite database with `materials` and `etchants` tables.
    #[cfg(feature = "store-sqlite")]
    Sqlite,
}

impl FileFormat {
    /// Detect the format of `path` from its extension.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnsupportedFormat`] for unknown extensions.
    pub fn detect(path: &Utf8Path) -> Result<Self, CatalogError> {
        let extension = path.extension().map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            #[cfg(feature = "store-sqlite")]
            Some("db" | "sqlite" | "sqlite3") => Ok(Self::Sqlite),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_owned(),
            }),
        }
    }
}

/// Read all records of `kind` from `path`.
///
/// # Errors
/// Returns [`CatalogError`] for unreadable or structurally invalid files.
pub fn read_records(path: &Utf8Path, kind: RecordKind) -> Result<Vec<Record>, CatalogError> {
    #[cfg(not(feature = "store-sqlite"))]
    let _ = kind;
    let read = || {
        crate::fs::read_text(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })
    };
    match FileFormat::detect(path)? {
        FileFormat::Csv => Ok(crate::csv::parse_records(&read()?)),
        FileFormat::Json => crate::json::parse_records(path, &read()?),
        #[cfg(feature = "store-sqlite")]
        FileFormat::Sqlite => {
            let exists = crate::fs::is_file(path).map_err(|source| CatalogError::Io {
                path: path.to_owned(),
                source,
            })?;
            if !exists {
                return Err(CatalogError::Io {
                    path: path.to_owned(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            crate::sqlite::read_records(path, kind)
        }
    }
}

/// Catalog files on disk, one per dataset.
///
/// Both paths may name the same SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    materials: Utf8PathBuf,
    etchants: Utf8PathBuf,
}

impl FileSource {
    /// Read materials and etchants from the given files.
    #[must_use]
    pub fn new(materials: impl Into<Utf8PathBuf>, etchants: impl Into<Utf8PathBuf>) -> Self {
        Self {
            materials: materials.into(),
            etchants: etchants.into(),
        }
    }

    /// Read only materials; the etchant dataset is empty.
    #[must_use]
    pub fn materials_only(materials: impl Into<Utf8PathBuf>) -> Self {
        Self {
            materials: materials.into(),
            etchants: Utf8PathBuf::new(),
        }
    }

    fn path_for(&self, kind: RecordKind) -> &Utf8Path {
        match kind {
            RecordKind::Materials => &self.materials,
            RecordKind::Etchants => &self.etchants,
        }
    }
}

impl CatalogSource for FileSource {
    fn fetch_records(&self, kind: RecordKind) -> Result<Vec<Record>, CatalogError> {
        let path = self.path_for(kind);
        if path.as_str().is_empty() {
            return Ok(Vec::new());
        }
        read_records(path, kind)
    }
}

/// Records held in memory, for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCatalog {
    materials: Vec<Record>,
    etchants: Vec<Record>,
}

impl MemoryCatalog {
    /// Construct an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material record.
    #[must_use]
    pub fn with_material(mut self, record: Record) -> Self {
        self.materials.push(record);
        self
    }

    /// Add an etchant record.
    #[must_use]
    pub fn with_etchant(mut self, record: Record) -> Self {
        self.etchants.push(record);
        self
    }
}

impl CatalogSource for MemoryCatalog {
    fn fetch_records(&self, kind: RecordKind) -> Result<Vec<Record>, CatalogError> {
        Ok(match kind {
            RecordKind::Materials => self.materials.clone(),
            RecordKind::Etchants => self.etchants.clone(),
        })
    }
}
