//! Plot a square with a diamond-shaped hole, inside and outside.
//!
//! Usage:
//!   cargo run -p latscan --example hole_plot

use latscan::prelude::*;

fn main() {
    let lattice = match Lattice::new(24, 16) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("lattice: {e}");
            return;
        }
    };
    let fig = Figure::new()
        .polygon(rectangle(Vector2::new(2.0, 1.0), Vector2::new(21.0, 14.0)))
        .polygon([
            Vector2::new(11.5, 3.0),
            Vector2::new(6.5, 7.5),
            Vector2::new(11.5, 12.0),
            Vector2::new(16.5, 7.5),
        ]);
    for fill in [Fill::Interior, Fill::Exterior] {
        match fill_mask(&fig, lattice, fill) {
            Ok(mask) => {
                let n = mask.iter().filter(|&&b| b).count();
                println!("{fill:?}: {n} of {} points", lattice.cells());
                print!("{}", render_ascii(&mask, lattice, '#', '.'));
            }
            Err(e) => eprintln!("scan failed: {e}"),
        }
    }
}
