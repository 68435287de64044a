//! Figure input: tagged vertex streams, lattices, fill modes.
//!
//! A figure is a flat list of `Vertex` values. Sub-polygons are delimited by
//! an explicit `closes_loop` tag on their last vertex; the final vertex of the
//! list always closes its sub-polygon. `Figure` is a small owned builder for
//! callers that would rather push polygons than tag vertices by hand.

use nalgebra::Vector2;

use crate::edges::Edge;
use crate::error::ScanError;
use crate::scan::FigureScan;

/// One polygon corner in lattice coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub p: Vector2<f32>,
    /// Last vertex of its sub-polygon; the edge from here returns to the loop start.
    pub closes_loop: bool,
}

impl Vertex {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            p: Vector2::new(x, y),
            closes_loop: false,
        }
    }

    #[inline]
    pub fn closing(x: f32, y: f32) -> Self {
        Self {
            p: Vector2::new(x, y),
            closes_loop: true,
        }
    }
}

/// Which side of the figure a scan reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Interior,
    Exterior,
}

impl Fill {
    /// Legacy signed vertex count: `+n` interior, `−n` exterior.
    pub fn from_signed_count(count: i64) -> (Fill, usize) {
        let fill = if count < 0 {
            Fill::Exterior
        } else {
            Fill::Interior
        };
        (fill, count.unsigned_abs() as usize)
    }
}

/// `W × H` grid of integer cells. Both sides are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    width: i32,
    height: i32,
}

impl Lattice {
    pub fn new(width: i32, height: i32) -> Result<Self, ScanError> {
        if width <= 0 || height <= 0 {
            return Err(ScanError::config("lattice width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Linear offset `y·W + x`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width as usize + x
    }

    /// True if `p` lies in the admissible vertex range `[−W, 2W) × [−H, 2H)`.
    pub fn admits(&self, p: Vector2<f32>) -> bool {
        let (w, h) = (self.width as f32, self.height as f32);
        p.x >= -w && p.x < 2.0 * w && p.y >= -h && p.y < 2.0 * h
    }
}

/// A lattice point produced by a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticePoint {
    pub y: usize,
    pub x: usize,
    pub offset: usize,
}

/// Iterator over the sub-polygons of a tagged vertex stream.
pub struct Loops<'v> {
    rest: &'v [Vertex],
}

impl<'v> Iterator for Loops<'v> {
    type Item = &'v [Vertex];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .iter()
            .position(|v| v.closes_loop)
            .map_or(self.rest.len(), |k| k + 1);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }
}

/// Split a vertex stream into sub-polygons.
pub fn loops(vertices: &[Vertex]) -> Loops<'_> {
    Loops { rest: vertices }
}

/// Owned figure builder.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    vertices: Vec<Vertex>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one closed sub-polygon. Empty input is ignored.
    pub fn polygon<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<f32>>,
    {
        self.push_polygon(points);
        self
    }

    pub fn push_polygon<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vector2<f32>>,
    {
        let start = self.vertices.len();
        self.vertices.extend(points.into_iter().map(|p| Vertex {
            p,
            closes_loop: false,
        }));
        if self.vertices.len() > start {
            if let Some(last) = self.vertices.last_mut() {
                last.closes_loop = true;
            }
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn loop_count(&self) -> usize {
        loops(&self.vertices).count()
    }

    /// A workspace with one edge slot per vertex.
    pub fn workspace(&self) -> Vec<Edge> {
        vec![Edge::default(); self.vertices.len()]
    }

    /// Start a scan of this figure over `workspace`.
    pub fn scan<'a>(
        &self,
        workspace: &'a mut [Edge],
        lattice: Lattice,
        fill: Fill,
    ) -> Result<FigureScan<'a>, ScanError> {
        FigureScan::new(workspace, &self.vertices, lattice, fill)
    }
}
