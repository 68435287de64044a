//! Column sweep: parity toggling, force-interior handling, and fast-forward.

use std::iter::FusedIterator;

use crate::figure::LatticePoint;
use crate::fixed::Fixed;

use super::{FigureScan, Phase, PARITY};

/// `REPORT[force_interior][parity_bits]`: does the current column qualify?
///
/// Bits: `PARITY | REVERSED`. Forced columns lie on the figure's boundary,
/// which counts as interior, so exterior scans never report them.
const REPORT: [[bool; 4]; 2] = [[false, true, true, false], [true, true, false, false]];

impl FigureScan<'_> {
    /// Visit the next column of the current row.
    ///
    /// Returns a point when the column qualifies; otherwise fast-forwards
    /// `col` (or ends the row) and returns `None`.
    fn advance_column(&mut self) -> Option<LatticePoint> {
        let width = self.lattice.width() as i64;
        if self.col + 1 >= width {
            self.phase = Phase::AdvanceRow;
            return None;
        }
        self.col += 1;
        let boundary = self.scale.from_cells(self.col);
        let row_y = self.scale.from_cells(self.row);
        let stop = self.cross_edges(boundary, row_y);

        let forced = std::mem::take(&mut self.force_interior);
        if REPORT[forced as usize][self.bits as usize] && self.col >= 0 {
            let (x, y) = (self.col as usize, self.row as usize);
            return Some(LatticePoint {
                y,
                x,
                offset: self.lattice.offset(x, y),
            });
        }
        self.fast_forward(stop, row_y);
        None
    }

    /// Process every active edge at or left of `boundary`.
    ///
    /// Returns the index of the first active edge still to the right.
    fn cross_edges(&mut self, boundary: Fixed, row_y: Fixed) -> usize {
        let mut i = self.lists.active_range().start;
        while i < self.lists.active_range().end {
            let edge = *self.lists.edge(i);
            if !edge.crosses(boundary) {
                break;
            }
            if edge.is_horizontal() && edge.y_low == row_y && boundary <= edge.x_high {
                // Still drawing along the row.
                self.force_interior = true;
            } else {
                self.lists.deactivate(i);
                if edge.y_low != row_y {
                    self.bits ^= PARITY;
                }
                if edge.hits(boundary) {
                    self.force_interior = true;
                }
            }
            i += 1;
        }
        i
    }

    /// Skip columns whose outcome cannot change before the next event.
    fn fast_forward(&mut self, stop: usize, row_y: Fixed) {
        let width = self.lattice.width() as i64;
        let active = self.lists.active_range();
        let next_crossing = (stop < active.end)
            .then(|| self.scale.ceil_cells(self.lists.edge(stop).intercept_ceil()));

        if self.col < 0 {
            self.col = next_crossing.map_or(0, |c| c.min(0)) - 1;
            return;
        }
        if REPORT[0][self.bits as usize] {
            return;
        }
        let mut next = next_crossing;
        if REPORT[1][self.bits as usize] {
            let following = self.scale.from_cells(self.col + 1);
            let drawing = (active.start..stop).any(|k| {
                let e = self.lists.edge(k);
                e.is_horizontal() && e.y_low == row_y && following <= e.x_high
            });
            if drawing {
                next = Some(self.col + 1);
            }
        }
        match next {
            Some(c) if c < width => self.col = self.col.max(c - 1),
            _ => self.phase = Phase::AdvanceRow,
        }
    }
}

impl Iterator for FigureScan<'_> {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<LatticePoint> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::AdvanceRow => {
                    self.phase = if self.advance_row() {
                        Phase::AdvanceColumn
                    } else {
                        Phase::Done
                    };
                }
                Phase::AdvanceColumn => {
                    if let Some(p) = self.advance_column() {
                        return Some(p);
                    }
                }
            }
        }
    }
}

impl FusedIterator for FigureScan<'_> {}
