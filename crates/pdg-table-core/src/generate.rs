//! Generation driver: read a source, render a table, write it out.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TableResult;
use crate::format::Dialect;
use crate::source::ParticleSource;
use crate::table::{render_table, CppLayout};

/// Request to generate one table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Output dialect.
    pub dialect: Dialect,

    /// Destination file.
    pub output: PathBuf,

    /// Layout of the C++ source (ignored by the text dialect).
    #[serde(default)]
    pub layout: CppLayout,
}

impl GenerateRequest {
    /// Request a table at `output` with the default C++ layout.
    pub fn new(dialect: Dialect, output: impl Into<PathBuf>) -> Self {
        Self {
            dialect,
            output: output.into(),
            layout: CppLayout::default(),
        }
    }

    /// Request a table at the dialect's default file name.
    pub fn with_default_output(dialect: Dialect) -> Self {
        Self::new(dialect, dialect.default_file_name())
    }

    /// Use a custom C++ layout.
    pub fn with_layout(mut self, layout: CppLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReport {
    /// Path that was written.
    pub output: PathBuf,

    /// Number of particle rows in the table.
    pub particles: usize,

    /// Size of the written file.
    pub bytes: usize,
}

/// Generate the table described by `request` from `source`.
///
/// The file is written in a single call once the whole table has rendered,
/// so a formatting failure leaves no output behind.
pub fn generate(
    source: &dyn ParticleSource,
    request: &GenerateRequest,
) -> TableResult<GenerateReport> {
    let records = source.find_all()?;
    let table = render_table(&records, request.dialect, &request.layout)?;

    if let Some(parent) = request.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&request.output, &table)?;

    info!(
        output = %request.output.display(),
        dialect = %request.dialect,
        particles = records.len(),
        "Wrote particle table"
    );

    Ok(GenerateReport {
        output: request.output.clone(),
        particles: records.len(),
        bytes: table.len(),
    })
}
