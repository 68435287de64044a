//! Edge records, edge construction, and the partitioned edge lists.
//!
//! Purpose
//! - `build` turns a tagged vertex stream into directed fixed-point edges,
//!   dropping edges that cannot influence any lattice row.
//! - `lists` owns the retired/inactive/active/pending partition that the
//!   scan moves edges through; it does no geometry.
//!
//! Code cross-refs: `scan::FigureScan`, `fixed::{Fixed, Scale}`.

mod build;
mod lists;
mod types;

pub use build::{build_edges, BuiltEdges};
pub use lists::EdgeLists;
pub use types::Edge;
