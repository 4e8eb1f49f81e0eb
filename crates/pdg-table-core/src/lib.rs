//! PDG table generation core.
//!
//! This crate turns a particle catalog into generated tables. It can be
//! consumed by the CLI or programmatically, with any [`ParticleSource`].
//!
//! ## Architecture
//!
//! - **Records**: [`ParticleRecord`] with explicit optional measurements
//! - **Formatting**: one pure line formatter per [`Dialect`]
//! - **Tables**: row joining and boilerplate via askama templates
//! - **Sources**: injected, read-only particle catalogs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdg_table_core::{generate, Dialect, GenerateRequest, JsonCatalog, TableResult};
//!
//! fn main() -> TableResult<()> {
//!     let catalog = JsonCatalog::new("particles.json");
//!     let request = GenerateRequest::with_default_output(Dialect::Cpp);
//!     let report = generate(&catalog, &request)?;
//!
//!     println!("Wrote {} particles", report.particles);
//!     Ok(())
//! }
//! ```

mod error;
mod format;
mod generate;
mod record;
mod source;
mod table;

// Re-export public API
pub use error::{TableError, TableResult};
pub use format::{format_digits, format_optional, format_real, format_record, quote_name, Dialect};
pub use generate::{generate, GenerateReport, GenerateRequest};
pub use record::{digits_of, Digits, ParticleRecord, MAX_DIGITS, UNSET_DIGIT};
pub use source::{JsonCatalog, ParticleSource, StaticSource};
pub use table::{format_rows, render_table, CppLayout, TEXT_HEADER};
