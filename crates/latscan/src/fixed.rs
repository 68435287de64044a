//! Fixed-point lattice coordinates with saturating arithmetic.
//!
//! Purpose
//! - Pick a binary scale `2^bs` for a lattice and convert caller floats into
//!   bounded `i32` fixed-point values.
//! - Keep every accumulation on the sweep path explicit about overflow: values
//!   saturate at `Fixed::MIN`/`Fixed::MAX` instead of wrapping, because a
//!   wrapped intercept flips the inside/outside decision for a whole row.
//!
//! Conventions
//! - One lattice cell is `Scale::one()` raw units. Lattice coordinate `c`
//!   maps to `c << bs`.
//! - Cell conversions take `i64` so callers can pass values one past the
//!   `i32` range (e.g. the ceiling of an intercept with a remainder).

use std::fmt;

use crate::cfg::ScanCfg;
use crate::error::ScanError;
use crate::figure::Lattice;

/// Saturating fixed-point scalar (raw `i32` units; the scale lives in `Scale`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i32);

impl Fixed {
    pub const MIN: Fixed = Fixed(i32::MIN);
    pub const MAX: Fixed = Fixed(i32::MAX);
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE_UNIT: Fixed = Fixed(1);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Narrow an `i64`, pinning out-of-range values to the nearest extreme.
    #[inline]
    pub fn saturating_from_i64(v: i64) -> Self {
        Fixed(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub fn is_saturated(self) -> bool {
        self == Fixed::MIN || self == Fixed::MAX
    }

    /// Keep `self` if it lies in `[lo, hi)`, else pin it to the extreme on the
    /// side given by `sign` (the direction the value is travelling). A zero
    /// `sign` picks the side `self` fell off.
    pub fn clamp_span(self, lo: Fixed, hi: Fixed, sign: i64) -> Fixed {
        if self >= lo && self < hi {
            return self;
        }
        match sign.signum() {
            1 => Fixed::MAX,
            -1 => Fixed::MIN,
            _ if self < lo => Fixed::MIN,
            _ => Fixed::MAX,
        }
    }
}

impl From<Fixed> for i64 {
    #[inline]
    fn from(v: Fixed) -> i64 {
        v.0 as i64
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of significant bits in `n` (`0` for `n == 0`).
#[inline]
pub fn bits_needed(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

/// Binary scale chosen for one lattice: one cell is `2^bits` raw units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    bits: u32,
}

impl Scale {
    /// `bs = max_bits − bits_needed(max(W, H))`, rejected below `min_scale_bits`.
    pub fn for_lattice(lattice: Lattice, cfg: &ScanCfg) -> Result<Self, ScanError> {
        cfg.validate()?;
        let side = lattice.width().max(lattice.height()) as u32;
        let bits = cfg.max_bits as i64 - bits_needed(side) as i64;
        if bits < cfg.min_scale_bits as i64 {
            return Err(ScanError::ScaleTooCoarse {
                bits,
                min: cfg.min_scale_bits,
            });
        }
        Ok(Self { bits: bits as u32 })
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// Raw units per lattice cell.
    #[inline]
    pub fn one(self) -> i64 {
        1i64 << self.bits
    }

    /// `round(v · 2^bs)`, saturating (NaN maps to zero).
    #[inline]
    pub fn to_fixed(self, v: f32) -> Fixed {
        let scaled = (v as f64 * self.one() as f64).round();
        Fixed::saturating_from_i64(scaled as i64)
    }

    /// Lattice coordinate `n` in raw units, saturating.
    #[inline]
    pub fn from_cells(self, n: i64) -> Fixed {
        Fixed::saturating_from_i64(n.saturating_mul(self.one()))
    }

    /// Largest lattice coordinate `c` with `c · 2^bs <= v`.
    #[inline]
    pub fn floor_cells(self, v: i64) -> i64 {
        v >> self.bits
    }

    /// Smallest lattice coordinate `c` with `c · 2^bs >= v`.
    #[inline]
    pub fn ceil_cells(self, v: i64) -> i64 {
        -((-v) >> self.bits)
    }

    #[inline]
    pub fn is_on_grid(self, v: Fixed) -> bool {
        i64::from(v) & (self.one() - 1) == 0
    }
}
