use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// Largest supported key precision; keeps scaled coordinates well inside i64.
pub const MAX_KEY_PRECISION: u32 = 9;

/// Tuning for a `Lattice`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Decimal places kept when keying a vertex. Must absorb centroid rounding
    /// error yet stay finer than half the shortest lattice edge.
    pub key_precision: u32,
    /// Pixel spacing between corridor samples along a drawn segment.
    pub corridor_sample_spacing: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self { key_precision: 3, corridor_sample_spacing: 2. }
    }
}

impl LatticeConfig {
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.key_precision > MAX_KEY_PRECISION {
            return Err(LatticeError::KeyPrecision(self.key_precision));
        }
        if !(self.corridor_sample_spacing.is_finite() && self.corridor_sample_spacing > 0.) {
            return Err(LatticeError::SampleSpacing(self.corridor_sample_spacing));
        }
        Ok(())
    }
}
