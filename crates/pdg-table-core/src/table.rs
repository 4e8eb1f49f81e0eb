//! Whole-table assembly.
//!
//! Rows are produced by [`format_record`] in input order and embedded in the
//! dialect boilerplate through askama templates.

use askama::Template;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TableResult;
use crate::format::{format_record, Dialect};
use crate::record::ParticleRecord;

/// Header line of the text dialect.
pub const TEXT_HEADER: &str =
    "# pdg, mass, mass upper, mass lower, width, width upper, width lower, I, G, C, name";

/// Shape of the generated C++ source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppLayout {
    /// Header declaring `ParticleData`, included first.
    pub helper_header: String,
    /// Enclosing namespaces, outermost first.
    pub namespaces: Vec<String>,
    /// Name of the generated `std::vector<ParticleData>`.
    pub container: String,
}

impl Default for CppLayout {
    fn default() -> Self {
        Self {
            helper_header: "LCAnalysisTools/PDGHelper.h".to_string(),
            namespaces: vec!["lc_analysis".to_string(), "pdg".to_string()],
            container: "pdgTable".to_string(),
        }
    }
}

#[derive(Template)]
#[template(
    source = "{{ header }}\n{% for row in rows %}{{ row }}\n{% endfor %}",
    ext = "txt",
    escape = "none"
)]
struct TextTableTemplate<'a> {
    header: &'a str,
    rows: &'a Vec<String>,
}

#[derive(Template)]
#[template(
    source = r#"#include <{{ helper_header }}>
#include <vector>
{%- if !namespaces.is_empty() %}
{% for ns in namespaces %}
namespace {{ ns }} {
{%- endfor %}
{%- endif %}

const std::vector<ParticleData> {{ container }} = {
{%- for row in rows %}
{{ row }}{% if !loop.last %},{% endif %}
{%- endfor %}
};
{%- if !closing.is_empty() %}
{% for ns in closing %}
}  // namespace {{ ns }}
{%- endfor %}
{%- endif %}
"#,
    ext = "txt",
    escape = "none"
)]
struct CppTableTemplate<'a> {
    helper_header: &'a str,
    namespaces: &'a Vec<String>,
    closing: Vec<&'a str>,
    container: &'a str,
    rows: &'a Vec<String>,
}

/// Format every record in the given dialect, preserving input order.
pub fn format_rows(records: &[ParticleRecord], dialect: Dialect) -> TableResult<Vec<String>> {
    records
        .iter()
        .map(|record| format_record(record, dialect))
        .collect()
}

/// Render the complete table file for `records`.
///
/// `layout` only affects the cpp dialect.
pub fn render_table(
    records: &[ParticleRecord],
    dialect: Dialect,
    layout: &CppLayout,
) -> TableResult<String> {
    let rows = format_rows(records, dialect)?;
    debug!(rows = rows.len(), %dialect, "Formatted particle rows");

    let mut rendered = match dialect {
        Dialect::Text => TextTableTemplate {
            header: TEXT_HEADER,
            rows: &rows,
        }
        .render()?,
        Dialect::Cpp => CppTableTemplate {
            helper_header: &layout.helper_header,
            namespaces: &layout.namespaces,
            closing: layout.namespaces.iter().rev().map(String::as_str).collect(),
            container: &layout.container,
            rows: &rows,
        }
        .render()?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
