//! Record formatting for the two output dialects.
//!
//! Each dialect maps a [`ParticleRecord`] to exactly one line. Absent
//! measurements render as a dialect-specific token and never as a
//! placeholder word.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::record::{Digits, ParticleRecord};

/// Output dialect of a generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain comma-separated rows under a header comment.
    Text,
    /// `ParticleData( { ... } )` expressions inside a C++ source file.
    Cpp,
}

impl Dialect {
    /// Token written for an absent measurement.
    pub fn none_token(&self) -> &'static str {
        match self {
            Dialect::Text => "",
            Dialect::Cpp => "std::nullopt",
        }
    }

    /// Text placed between two fields of a row.
    pub fn field_separator(&self) -> &'static str {
        match self {
            Dialect::Text => ",",
            Dialect::Cpp => ", ",
        }
    }

    /// Text placed between two rows of the table.
    pub fn row_separator(&self) -> &'static str {
        match self {
            Dialect::Text => "\n",
            Dialect::Cpp => ",\n",
        }
    }

    /// File name used when no destination is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Dialect::Text => "pdg-table.txt",
            Dialect::Cpp => "PDGTable.cc",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Text => write!(f, "text"),
            Dialect::Cpp => write!(f, "cpp"),
        }
    }
}

/// Shortest round-tripping decimal text of `value`.
///
/// Magnitudes in `[1e-4, 1e16)` use fixed notation with a fractional part;
/// anything else uses scientific notation with a signed, two-digit minimum
/// exponent (`1e-05`).
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let fixed = value.to_string();
        return if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        };
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => scientific,
        },
        None => scientific,
    }
}

/// Render one optional measurement in the given dialect.
pub fn format_optional(value: Option<f64>, dialect: Dialect) -> String {
    match value {
        Some(v) => format_real(v),
        None => dialect.none_token().to_string(),
    }
}

/// Render the digit slots as a brace-delimited aggregate.
pub fn format_digits(digits: &Digits) -> String {
    let slots: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
    format!("{{ {} }}", slots.join(", "))
}

/// Quote a particle name for the given dialect.
pub fn quote_name(name: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Text => format!("\"{}\"", name),
        Dialect::Cpp => {
            let mut quoted = String::with_capacity(name.len() + 2);
            quoted.push('"');
            for c in name.chars() {
                match c {
                    '"' => quoted.push_str("\\\""),
                    '\\' => quoted.push_str("\\\\"),
                    '\n' => quoted.push_str("\\n"),
                    '\r' => quoted.push_str("\\r"),
                    '\t' => quoted.push_str("\\t"),
                    c if c.is_control() => quoted.push_str(&format!("\\{:03o}", c as u32)),
                    c => quoted.push(c),
                }
            }
            quoted.push('"');
            quoted
        }
    }
}

/// Format one record as a single line in the given dialect.
///
/// The text dialect has no escape syntax, so a name holding control
/// characters is rejected there.
pub fn format_record(record: &ParticleRecord, dialect: Dialect) -> TableResult<String> {
    let digits = record.digits()?;
    if dialect == Dialect::Text && record.name.chars().any(char::is_control) {
        return Err(TableError::ControlCharacterInName {
            pdgid: record.pdgid,
        });
    }

    let mut fields = Vec::with_capacity(12);
    fields.push(record.pdgid.to_string());
    fields.extend(
        record
            .measurements()
            .iter()
            .map(|value| format_optional(*value, dialect)),
    );
    fields.push(record.g_parity.to_string());
    fields.push(record.c_parity.to_string());
    if dialect == Dialect::Cpp {
        fields.push(format_digits(&digits));
    }
    fields.push(quote_name(&record.name, dialect));

    let row = fields.join(dialect.field_separator());
    Ok(match dialect {
        Dialect::Text => row,
        Dialect::Cpp => format!("ParticleData( {{ {} }} )", row),
    })
}
