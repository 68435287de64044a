//! Fixed-point budget for scans.
//!
//! Policy
//! - Coordinates live in `i32`. Valid intercepts span `[−W, 2W)`, so the
//!   scale leaves one bit above `max_bits` for the doubled range and one for
//!   the sign.
//! - Defaults cover lattices up to `2^24` cells per side with 1/16 cell
//!   precision at the largest size. Adjusting them is rare.

use crate::error::ScanError;

/// Largest admissible `max_bits`; beyond it `2W · 2^bs` no longer fits `i32`.
pub(crate) const MAX_BITS_LIMIT: u32 = 30;

/// Scan configuration (fixed-point precision).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanCfg {
    /// Bits available for `max(W, H)` plus its fractional part.
    pub max_bits: u32,
    /// Minimum fractional bits; fewer yields `ScanError::ScaleTooCoarse`.
    pub min_scale_bits: u32,
}

impl Default for ScanCfg {
    fn default() -> Self {
        Self {
            max_bits: 28,
            min_scale_bits: 4,
        }
    }
}

impl ScanCfg {
    pub(crate) fn validate(&self) -> Result<(), ScanError> {
        if self.max_bits > MAX_BITS_LIMIT {
            return Err(ScanError::config("max_bits must be <= 30"));
        }
        if self.min_scale_bits >= self.max_bits {
            return Err(ScanError::config("min_scale_bits must be < max_bits"));
        }
        Ok(())
    }
}
