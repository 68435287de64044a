//! Owned-allocation consumers for callers that want a whole raster at once.
//!
//! The scan itself never allocates; these helpers own the workspace and the
//! output buffers so one-off callers (plots, tests, the CLI) don't have to.

use crate::error::ScanError;
use crate::figure::{Figure, Fill, Lattice, LatticePoint};

/// Every qualifying point of `figure`, in raster order.
pub fn collect_points(
    figure: &Figure,
    lattice: Lattice,
    fill: Fill,
) -> Result<Vec<LatticePoint>, ScanError> {
    let mut workspace = figure.workspace();
    Ok(figure.scan(&mut workspace, lattice, fill)?.collect())
}

/// Row-major cell mask (`offset` indexing), `true` where the scan reports.
pub fn fill_mask(figure: &Figure, lattice: Lattice, fill: Fill) -> Result<Vec<bool>, ScanError> {
    let mut workspace = figure.workspace();
    let mut mask = vec![false; lattice.cells()];
    for p in figure.scan(&mut workspace, lattice, fill)? {
        mask[p.offset] = true;
    }
    Ok(mask)
}

/// Text plot of a mask, highest row first so +y points up.
pub fn render_ascii(mask: &[bool], lattice: Lattice, on: char, off: char) -> String {
    let w = lattice.width() as usize;
    let h = lattice.height() as usize;
    let mut out = String::with_capacity((w + 1) * h);
    for y in (0..h).rev() {
        for x in 0..w {
            let set = mask.get(lattice.offset(x, y)).copied().unwrap_or(false);
            out.push(if set { on } else { off });
        }
        out.push('\n');
    }
    out
}
