//! Error types for table generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for table generation.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while reading a catalog or producing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The particle catalog could not be opened.
    #[error("Couldn't load particle catalog at {path}. {hint}")]
    CatalogUnavailable { path: PathBuf, hint: String },

    /// The catalog exists but is not valid particle JSON.
    #[error("Failed to parse particle catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field every particle must carry is absent.
    #[error("Particle {pdgid} has no {field}")]
    MissingRequiredField { pdgid: i64, field: &'static str },

    /// A particle name is empty.
    #[error("Particle {pdgid} has an empty name")]
    EmptyName { pdgid: i64 },

    /// A particle name holds a newline or another control character.
    #[error("Particle {pdgid} has a control character in its name")]
    ControlCharacterInName { pdgid: i64 },

    /// The identifier does not fit in the ten PDG digit slots.
    #[error("PDG id {pdgid} has more than 10 digits")]
    IdentifierTooLong { pdgid: i64 },

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// IO error while writing the table.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Create a catalog error carrying the default install hint.
    pub fn catalog_unavailable(path: impl Into<PathBuf>) -> Self {
        Self::CatalogUnavailable {
            path: path.into(),
            hint: "Point to one with '--catalog <path>' or the PDG_CATALOG environment variable."
                .to_string(),
        }
    }

    /// Whether this error means the data source itself is missing.
    pub fn is_catalog_unavailable(&self) -> bool {
        matches!(self, Self::CatalogUnavailable { .. })
    }
}
