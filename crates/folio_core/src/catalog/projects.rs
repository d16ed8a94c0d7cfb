//! Project catalog loading and the loaded-catalog type.
//!
//! # Responsibility
//! - Parse a JSON sequence of project entries into an ordered [`Catalog`].
//! - Enforce the record presence invariants entry by entry.
//!
//! # Invariants
//! - Catalog order equals source order; no implicit sort is applied.
//! - Category-set membership and title uniqueness are advisory: unlisted
//!   categories load fine (with a warn diagnostic), duplicates load fine.

use crate::model::project::{ProjectRecord, ProjectValidationError};
use log::{error, info, warn};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json_str(include_str!("defaults/projects.json"))
        .expect("bundled project catalog is valid")
});

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors. Fatal to the Projects render: callers surface
/// these instead of showing an empty or partial list.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading the source file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Source is not a well-formed sequence of project entries (wrong JSON
    /// shape, missing required attribute, wrong attribute type).
    Malformed { detail: String },
    /// An entry parsed but violates a record invariant.
    InvalidRecord {
        index: usize,
        source: ProjectValidationError,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(
                    f,
                    "failed to read project catalog `{}`: {source}",
                    path.display()
                )
            }
            Self::Malformed { detail } => write!(f, "project catalog is malformed: {detail}"),
            Self::InvalidRecord { index, source } => {
                write!(f, "project catalog entry {index} is invalid: {source}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { .. } => None,
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed {
            detail: value.to_string(),
        }
    }
}

/// Ordered, validated project catalog for one render.
///
/// Held immutably for the duration of a render; filtering derives new views
/// and never mutates it, so a loaded catalog may be reused across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Wraps already-parsed records, enforcing record invariants in order.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidRecord`] with the index of the first
    /// failing entry; no partial catalog is produced.
    pub fn new(projects: Vec<ProjectRecord>) -> CatalogResult<Self> {
        for (index, record) in projects.iter().enumerate() {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord { index, source })?;
            if !record.category.is_listed() {
                warn!(
                    "event=catalog_load module=catalog status=warn reason=unlisted_category index={} label={}",
                    index,
                    record.category.as_str()
                );
            }
        }
        Ok(Self { projects })
    }

    /// Parses a catalog from raw JSON text.
    ///
    /// # Errors
    /// - [`CatalogError::Malformed`] when the text is not a JSON sequence of
    ///   project entries.
    /// - [`CatalogError::InvalidRecord`] when an entry has a blank title or
    ///   category label.
    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Side effects
    /// - Reads the source once.
    /// - Emits `catalog_load` log events with duration and record count.
    pub fn load_from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!("event=catalog_load module=catalog status=start source=file");

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) => {
                error!(
                    "event=catalog_load module=catalog status=error duration_ms={} error_code=catalog_read_failed error={}",
                    started_at.elapsed().as_millis(),
                    source
                );
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match Self::from_json_str(&raw) {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=catalog status=ok duration_ms={} records={}",
                    started_at.elapsed().as_millis(),
                    catalog.len()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=catalog status=error duration_ms={} error_code=catalog_parse_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// The catalog compiled into the binary, so the generator renders out of
    /// the box without any data files.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// Records in canonical display order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
