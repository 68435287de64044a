//! Edge construction: validate the vertex stream and fill the pending list.

use crate::error::ScanError;
use crate::figure::{loops, Fill, Lattice, Vertex};
use crate::fixed::{Fixed, Scale};

use super::types::Edge;

/// Summary of a built edge list; edges live in `workspace[..kept]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltEdges {
    pub kept: usize,
    pub dropped: usize,
    /// Row counter before the first advance.
    pub start_row: i64,
    /// Exclusive upper row bound.
    pub top: i64,
}

/// Reject malformed figures before anything is written to the workspace.
pub(crate) fn validate(
    workspace_len: usize,
    vertices: &[Vertex],
    lattice: Lattice,
) -> Result<(), ScanError> {
    if workspace_len < vertices.len() {
        return Err(ScanError::config("workspace needs one edge slot per vertex"));
    }
    if vertices.len() < 3 {
        return Err(ScanError::TooFewVertices {
            count: vertices.len(),
        });
    }
    if let Some(short) = loops(vertices).find(|l| l.len() < 3) {
        return Err(ScanError::TooFewVertices { count: short.len() });
    }
    if let Some((index, v)) = vertices
        .iter()
        .enumerate()
        .find(|(_, v)| !lattice.admits(v.p))
    {
        return Err(ScanError::CoordinateOutOfRange {
            index,
            x: v.p.x,
            y: v.p.y,
        });
    }
    Ok(())
}

/// True if the edge can change the parity or the force flag of any lattice point.
///
/// Edges wholly left of the lattice are kept: they still toggle parity for
/// every column to their right.
pub(crate) fn influences_lattice(edge: &Edge, lattice: Lattice, scale: Scale) -> bool {
    let below = edge.y_high < Fixed::ZERO;
    let above = edge.y_low > scale.from_cells(lattice.height() as i64 - 1);
    let right = edge.x_low.min(edge.x_high) > scale.from_cells(lattice.width() as i64 - 1);
    let no_row = scale.ceil_cells(edge.y_low.into()) > scale.floor_cells(edge.y_high.into());
    !(below || above || right || no_row)
}

/// Validate, convert and store every kept edge, sorted ascending by low y.
pub fn build_edges(
    workspace: &mut [Edge],
    vertices: &[Vertex],
    lattice: Lattice,
    scale: Scale,
    fill: Fill,
) -> Result<BuiltEdges, ScanError> {
    validate(workspace.len(), vertices, lattice)?;

    let fixed = |v: &Vertex| (scale.to_fixed(v.p.x), scale.to_fixed(v.p.y));
    let mut kept = 0usize;
    let mut dropped = 0usize;
    let mut y_top = i64::MIN;
    for ring in loops(vertices) {
        for (k, v) in ring.iter().enumerate() {
            let next = &ring[(k + 1) % ring.len()];
            let edge = Edge::between(fixed(v), fixed(next), scale);
            if influences_lattice(&edge, lattice, scale) {
                y_top = y_top.max(scale.floor_cells(edge.y_high.into()));
                workspace[kept] = edge;
                kept += 1;
            } else {
                dropped += 1;
            }
        }
    }

    let pending = &mut workspace[..kept];
    pending.sort_unstable_by_key(|e| (e.y_low, e.x_low, e.y_high, e.x_high));

    let height = lattice.height() as i64;
    let (start_row, top) = match fill {
        Fill::Exterior => (-1, height),
        Fill::Interior => match pending.first() {
            Some(first) => {
                let first_row = scale.ceil_cells(first.y_low.into()).max(0);
                (first_row - 1, (y_top + 1).min(height))
            }
            None => (-1, 0),
        },
    };
    Ok(BuiltEdges {
        kept,
        dropped,
        start_row,
        top,
    })
}
