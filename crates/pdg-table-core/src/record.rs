//! Particle records and their PDG digit representation.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Number of digit slots in a PDG identifier.
pub const MAX_DIGITS: usize = 10;

/// Sentinel for an unused leading digit slot.
pub const UNSET_DIGIT: i8 = -1;

/// Decimal digits of `|pdgid|`, right-aligned and padded with [`UNSET_DIGIT`].
pub type Digits = [i8; MAX_DIGITS];

/// One particle species as provided by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    /// PDG identifier; the sign distinguishes particle and antiparticle.
    pub pdgid: i64,
    pub mass: Option<f64>,
    pub mass_upper: Option<f64>,
    pub mass_lower: Option<f64>,
    pub width: Option<f64>,
    pub width_upper: Option<f64>,
    pub width_lower: Option<f64>,
    /// Isospin (I).
    pub isospin: Option<f64>,
    /// G-parity.
    pub g_parity: i32,
    /// Charge-conjugation parity.
    pub c_parity: i32,
    pub name: String,
}

impl ParticleRecord {
    /// Create a record with only the required fields set.
    pub fn new(pdgid: i64, g_parity: i32, c_parity: i32, name: impl Into<String>) -> Self {
        Self {
            pdgid,
            mass: None,
            mass_upper: None,
            mass_lower: None,
            width: None,
            width_upper: None,
            width_lower: None,
            isospin: None,
            g_parity,
            c_parity,
            name: name.into(),
        }
    }

    /// Set the mass and its uncertainties.
    pub fn with_mass(mut self, mass: f64, upper: f64, lower: f64) -> Self {
        self.mass = Some(mass);
        self.mass_upper = Some(upper);
        self.mass_lower = Some(lower);
        self
    }

    /// Set the width and its uncertainties.
    pub fn with_width(mut self, width: f64, upper: f64, lower: f64) -> Self {
        self.width = Some(width);
        self.width_upper = Some(upper);
        self.width_lower = Some(lower);
        self
    }

    /// Set the isospin.
    pub fn with_isospin(mut self, isospin: f64) -> Self {
        self.isospin = Some(isospin);
        self
    }

    /// The optional numeric fields in table column order.
    pub fn measurements(&self) -> [Option<f64>; 7] {
        [
            self.mass,
            self.mass_upper,
            self.mass_lower,
            self.width,
            self.width_upper,
            self.width_lower,
            self.isospin,
        ]
    }

    /// The padded digit representation of this record's identifier.
    pub fn digits(&self) -> TableResult<Digits> {
        digits_of(self.pdgid)
    }
}

/// Split `|pdgid|` into [`MAX_DIGITS`] slots, left-padded with [`UNSET_DIGIT`].
pub fn digits_of(pdgid: i64) -> TableResult<Digits> {
    let decimal = pdgid.unsigned_abs().to_string();
    if decimal.len() > MAX_DIGITS {
        return Err(TableError::IdentifierTooLong { pdgid });
    }

    let mut digits = [UNSET_DIGIT; MAX_DIGITS];
    let offset = MAX_DIGITS - decimal.len();
    for (slot, byte) in digits[offset..].iter_mut().zip(decimal.bytes()) {
        *slot = (byte - b'0') as i8;
    }
    Ok(digits)
}
