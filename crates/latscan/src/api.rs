//! Curated entry points and re-exports.
//!
//! `init` keeps the legacy calling convention (signed vertex count, raw
//! lattice sides) on top of `FigureScan::new`.

pub use crate::cfg::ScanCfg;
pub use crate::edges::Edge;
pub use crate::error::ScanError;
pub use crate::figure::{loops, Figure, Fill, Lattice, LatticePoint, Vertex};
pub use crate::fixed::{Fixed, Scale};
pub use crate::mask::{collect_points, fill_mask, render_ascii};
pub use crate::scan::FigureScan;

/// Start a scan over the first `|signed_vertex_count|` vertices.
///
/// Pre: `workspace` has one slot per counted vertex.
/// Post: a positive count enumerates interior points, a negative one exterior points.
pub fn init<'a>(
    workspace: &'a mut [Edge],
    vertices: &[Vertex],
    width: i32,
    height: i32,
    signed_vertex_count: i64,
) -> Result<FigureScan<'a>, ScanError> {
    let lattice = Lattice::new(width, height)?;
    let (fill, count) = Fill::from_signed_count(signed_vertex_count);
    let Some(counted) = vertices.get(..count) else {
        return Err(ScanError::config("vertex count exceeds the vertex list"));
    };
    FigureScan::new(workspace, counted, lattice, fill)
}
