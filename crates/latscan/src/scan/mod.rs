//! Even-odd scanline enumeration of lattice points inside (or outside) a figure.
//!
//! Purpose
//! - `FigureScan` is the iterator state: it borrows the caller's edge
//!   workspace, and each `next` call runs the sweep until one qualifying
//!   lattice point is found.
//!
//! Model
//! - Lattice point `(x, y)` is sampled at the integer coordinate itself. The
//!   figure is closed: points exactly on an edge or a vertex are interior.
//! - Parity follows the half-open rule: an edge toggles on rows with
//!   `y_low < row <= y_high`; horizontal edges never toggle but force every
//!   point they cover to be interior.
//! - `advance` brings the active edges up to a new row; `sweep` walks the
//!   columns and is the public state machine.
//!
//! Resources
//! - No allocation after construction. The workspace is borrowed mutably for
//!   the scan's lifetime, so it cannot be touched until the scan is dropped.
//!   Independent scans over independent workspaces may run on separate threads.

mod advance;
mod sweep;

use crate::cfg::ScanCfg;
use crate::edges::{build_edges, Edge, EdgeLists};
use crate::error::ScanError;
use crate::figure::{Fill, Lattice, Vertex};
use crate::fixed::{Fixed, Scale};

/// Parity flag toggled on every counted crossing.
const PARITY: u8 = 0b01;
/// Exterior scans start with the inside/outside sense reversed.
const REVERSED: u8 = 0b10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    AdvanceRow,
    AdvanceColumn,
    Done,
}

/// Incremental scan of one figure over one lattice.
#[derive(Debug)]
pub struct FigureScan<'a> {
    lists: EdgeLists<'a>,
    lattice: Lattice,
    scale: Scale,
    fill: Fill,
    /// Valid intercept range `[−W, 2W)` in raw units.
    span: (Fixed, Fixed),
    row: i64,
    col: i64,
    top: i64,
    bits: u8,
    initial_bits: u8,
    force_interior: bool,
    phase: Phase,
}

impl<'a> FigureScan<'a> {
    /// Scan with the default fixed-point budget.
    pub fn new(
        workspace: &'a mut [Edge],
        vertices: &[Vertex],
        lattice: Lattice,
        fill: Fill,
    ) -> Result<Self, ScanError> {
        Self::with_cfg(workspace, vertices, lattice, fill, ScanCfg::default())
    }

    pub fn with_cfg(
        workspace: &'a mut [Edge],
        vertices: &[Vertex],
        lattice: Lattice,
        fill: Fill,
        cfg: ScanCfg,
    ) -> Result<Self, ScanError> {
        let scale = Scale::for_lattice(lattice, &cfg)?;
        let built = build_edges(workspace, vertices, lattice, scale, fill)?;
        tracing::debug!(
            scale_bits = scale.bits(),
            kept = built.kept,
            dropped = built.dropped,
            start_row = built.start_row,
            top = built.top,
            fill = ?fill,
            "figure scan ready"
        );
        let initial_bits = match fill {
            Fill::Interior => 0,
            Fill::Exterior => REVERSED,
        };
        let span = (
            scale.from_cells(-(lattice.width() as i64)),
            scale.from_cells(2 * lattice.width() as i64),
        );
        Ok(Self {
            lists: EdgeLists::new(workspace, built.kept),
            lattice,
            scale,
            fill,
            span,
            row: built.start_row,
            col: -1,
            top: built.top,
            bits: initial_bits,
            initial_bits,
            force_interior: false,
            phase: Phase::AdvanceRow,
        })
    }

    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    #[inline]
    pub fn fill(&self) -> Fill {
        self.fill
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Number of edges that survived the drop rules.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.lists.len()
    }

    /// True once `next` has returned `None`.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

#[cfg(test)]
mod tests;
