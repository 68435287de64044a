//! Even-odd scanline enumeration of lattice points covered by polygon figures.
//!
//! A figure is one or more possibly concave, possibly overlapping polygons
//! (holes are just further sub-polygons). A `FigureScan` walks a `W × H`
//! lattice in raster order and yields every point inside the figure, or
//! every point outside it, one point per `next` call.
//!
//! Layout
//! - `fixed`: saturating fixed-point scalar and per-lattice binary scale.
//! - `figure`: tagged vertex streams, `Figure` builder, `Lattice`, `Fill`.
//! - `edges`: edge records, construction and drop rules, partitioned lists.
//! - `scan`: row advance and column sweep (`FigureScan: Iterator`).
//! - `mask`, `shapes`: owned-allocation helpers and reproducible test figures.
//!
//! API Policy
//! - `api` is the curated surface; module paths may move.

pub mod api;
pub mod cfg;
pub mod edges;
pub mod error;
pub mod figure;
pub mod fixed;
pub mod mask;
pub mod scan;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::ScanCfg;
pub use error::ScanError;
pub use figure::{Figure, Fill, Lattice, LatticePoint, Vertex};
pub use scan::FigureScan;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::init;
    pub use crate::edges::Edge;
    pub use crate::figure::{Figure, Fill, Lattice, LatticePoint, Vertex};
    pub use crate::mask::{collect_points, fill_mask, render_ascii};
    pub use crate::scan::FigureScan;
    pub use crate::shapes::{draw_polygon_radial, rectangle, regular_polygon, RadialCfg, ReplayToken};
    pub use crate::{ScanCfg, ScanError};
    pub use nalgebra::Vector2;
}
