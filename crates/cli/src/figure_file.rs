//! JSON figure files: `{"polygons": [[[x, y], ...], ...]}`.

use anyhow::{bail, Context, Result};
use latscan::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FigureFile {
    pub polygons: Vec<Vec<[f32; 2]>>,
}

impl FigureFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let file: FigureFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing figure file {}", path.display()))?;
        if file.polygons.is_empty() {
            bail!("figure file {} has no polygons", path.display());
        }
        Ok(file)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    pub fn from_points(points: &[Vector2<f32>]) -> Self {
        Self {
            polygons: vec![points.iter().map(|p| [p.x, p.y]).collect()],
        }
    }

    pub fn to_figure(&self) -> Figure {
        self.polygons.iter().fold(Figure::new(), |fig, ring| {
            fig.polygon(ring.iter().map(|&[x, y]| Vector2::new(x, y)))
        })
    }
}

/// One reported lattice point in a scan output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: usize,
    pub y: usize,
    pub offset: usize,
}

impl From<LatticePoint> for PointRecord {
    fn from(p: LatticePoint) -> Self {
        Self {
            x: p.x,
            y: p.y,
            offset: p.offset,
        }
    }
}
