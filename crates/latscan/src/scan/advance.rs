//! Row transitions: bring the active edge set up to the next scan row.

use crate::figure::Fill;

use super::FigureScan;

impl FigureScan<'_> {
    /// Move to the next row that can yield points.
    ///
    /// Returns `false` once the row counter reaches the top bound. On success
    /// the active list is sorted by intercept and `col` sits one column before
    /// the first column worth visiting.
    pub(super) fn advance_row(&mut self) -> bool {
        loop {
            self.row += 1;
            if self.row >= self.top {
                return false;
            }
            self.bits = self.initial_bits;
            self.force_interior = false;
            let row_y = self.scale.from_cells(self.row);

            self.lists.recombine();
            let mut i = self.lists.active_range().start;
            while i < self.lists.active_range().end {
                if self.lists.edge(i).y_high < row_y {
                    self.lists.retire(i);
                }
                i += 1;
            }

            let span = self.span;
            for edge in self.lists.active_mut() {
                edge.step_row(span);
            }

            while self.lists.peek_pending().is_some_and(|e| e.y_low <= row_y) {
                let Some(idx) = self.lists.take_pending() else {
                    break;
                };
                let edge = self.lists.edge_mut(idx);
                edge.seek(row_y, span);
                if edge.y_high < row_y {
                    self.lists.retire(idx);
                }
            }

            if self.lists.active_slice().is_empty() {
                match self.fill {
                    Fill::Exterior => {
                        // Nothing to cross: the whole row is outside.
                        self.col = -1;
                        return true;
                    }
                    Fill::Interior => {
                        let Some(next) = self.lists.peek_pending() else {
                            self.row = self.top;
                            return false;
                        };
                        let next_row = self.scale.ceil_cells(next.y_low.into());
                        tracing::trace!(from = self.row, to = next_row, "skip empty rows");
                        self.row = next_row.max(self.row + 1) - 1;
                        continue;
                    }
                }
            }

            self.lists.sort_active();
            self.col = match self.fill {
                Fill::Exterior => -1,
                Fill::Interior => {
                    let first = &self.lists.active_slice()[0];
                    let width = self.lattice.width() as i64;
                    (self.scale.ceil_cells(first.intercept_ceil()) - 1).clamp(-width - 1, width)
                }
            };
            return true;
        }
    }
}
