use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use latscan::prelude::*;
use serde_json::json;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod figure_file;
mod provenance;

use figure_file::{FigureFile, PointRecord};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Enumerate lattice points inside or outside polygon figures")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Figure file, lattice, and side selection shared by `scan` and `plot`.
#[derive(Args)]
struct ScanArgs {
    /// Figure file: {"polygons": [[[x, y], ...], ...]}
    #[arg(long)]
    figure: PathBuf,
    #[arg(long)]
    width: i32,
    #[arg(long)]
    height: i32,
    /// Report points outside the figure instead of inside
    #[arg(long)]
    exterior: bool,
}

impl ScanArgs {
    fn fill(&self) -> Fill {
        if self.exterior {
            Fill::Exterior
        } else {
            Fill::Interior
        }
    }

    fn load(&self) -> Result<(Figure, Lattice)> {
        let figure = FigureFile::read(&self.figure)?.to_figure();
        let lattice = Lattice::new(self.width, self.height)
            .with_context(|| format!("lattice {}x{}", self.width, self.height))?;
        Ok((figure, lattice))
    }
}

#[derive(Subcommand)]
enum Action {
    /// Write the qualifying lattice points as JSON, with a provenance sidecar
    Scan {
        #[command(flatten)]
        args: ScanArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print an ASCII plot of the qualifying points (row 0 at the bottom)
    Plot {
        #[command(flatten)]
        args: ScanArgs,
        #[arg(long, default_value_t = '#')]
        on: char,
        #[arg(long, default_value_t = '.')]
        off: char,
    },
    /// Write a reproducible random star-shaped figure file
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 20)]
        width: i32,
        #[arg(long, default_value_t = 20)]
        height: i32,
        /// Round vertices to integer coordinates
        #[arg(long)]
        snap: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Scan { args, out } => scan(&args, &out),
        Action::Plot { args, on, off } => plot(&args, on, off),
        Action::Random {
            seed,
            index,
            vertices,
            width,
            height,
            snap,
            out,
        } => random(seed, index, vertices, width, height, snap, &out),
        Action::Report => report(),
    }
}

fn scan(args: &ScanArgs, out: &Path) -> Result<()> {
    let (figure, lattice) = args.load()?;
    let fill = args.fill();
    tracing::info!(
        figure = %args.figure.display(),
        width = args.width,
        height = args.height,
        ?fill,
        vertices = figure.len(),
        "scan"
    );
    let points: Vec<PointRecord> = collect_points(&figure, lattice, fill)
        .with_context(|| format!("scanning {}", args.figure.display()))?
        .into_iter()
        .map(PointRecord::from)
        .collect();
    tracing::info!(points = points.len(), cells = lattice.cells(), "scan_done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, serde_json::to_vec(&points)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "width": args.width,
        "height": args.height,
        "fill": format!("{fill:?}").to_lowercase(),
        "points": points.len(),
    }))
    .with_input(&args.figure);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

fn plot(args: &ScanArgs, on: char, off: char) -> Result<()> {
    let (figure, lattice) = args.load()?;
    let mask = fill_mask(&figure, lattice, args.fill())
        .with_context(|| format!("scanning {}", args.figure.display()))?;
    print!("{}", render_ascii(&mask, lattice, on, off));
    Ok(())
}

fn random(
    seed: u64,
    index: u64,
    vertices: usize,
    width: i32,
    height: i32,
    snap: bool,
    out: &Path,
) -> Result<()> {
    let lattice = Lattice::new(width, height)?;
    let half = Vector2::new(width as f32, height as f32) / 2.0;
    let cfg = RadialCfg {
        vertex_count: latscan::shapes::VertexCount::Fixed(vertices),
        // Stays inside the lattice even at the largest radial jitter.
        base_radius: half.x.min(half.y) / 1.25,
        center: half,
        snap,
        ..RadialCfg::default()
    };
    let points = draw_polygon_radial(cfg, ReplayToken { seed, index });
    debug_assert!(points.iter().all(|&p| lattice.admits(p)));
    tracing::info!(seed, index, vertices = points.len(), "random");
    FigureFile::from_points(&points).write(out)?;
    let payload = Payload::new(json!({
        "seed": seed,
        "index": index,
        "vertices": vertices,
        "width": width,
        "height": height,
        "snap": snap,
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({})), &[], Location::caller());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
