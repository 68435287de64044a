//! Errors surfaced while setting up a figure scan.
//!
//! Every variant is detected by `FigureScan::new`; once a scan exists, every
//! `next` call is well defined. Numeric saturation inside the sweep is a
//! clamp, not an error, and never shows up here.

use std::fmt;

/// Errors surfaced by scan construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanError {
    /// Bad lattice dimensions, config, or an undersized workspace.
    Configuration { reason: &'static str },
    /// The figure (or one of its sub-polygons) has fewer than three vertices.
    TooFewVertices { count: usize },
    /// A raw vertex lies outside `x ∈ [−W, 2W)`, `y ∈ [−H, 2H)` or is not finite.
    CoordinateOutOfRange { index: usize, x: f32, y: f32 },
    /// The lattice is too large to leave `min` bits of sub-cell precision.
    ScaleTooCoarse { bits: i64, min: u32 },
}

impl ScanError {
    pub(crate) fn config(reason: &'static str) -> Self {
        Self::Configuration { reason }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Configuration { reason } => write!(f, "invalid scan configuration: {reason}"),
            ScanError::TooFewVertices { count } => write!(
                f,
                "polygon has {count} vertices (each sub-polygon needs at least 3)"
            ),
            ScanError::CoordinateOutOfRange { index, x, y } => write!(
                f,
                "vertex {index} at ({x}, {y}) lies outside the admissible coordinate range"
            ),
            ScanError::ScaleTooCoarse { bits, min } => write!(
                f,
                "lattice leaves {bits} fractional bits, need at least {min}"
            ),
        }
    }
}

impl std::error::Error for ScanError {}
