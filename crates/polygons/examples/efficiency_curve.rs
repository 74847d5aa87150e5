//! Efficiency (area / perimeter) of regular polygons against the circle limit.
//!
//! Prints one line per vertex count on a doubling schedule, showing the gap
//! to `R / 2` shrinking roughly like `1/n²`.
//!
//!   cargo run -p polygons --example efficiency_curve

use polygons::{limit_efficiency, PolygonSequence};

fn main() {
    let r = 1.0;
    let seq = PolygonSequence::new(4096, r).expect("valid sequence");
    let limit = limit_efficiency(r);
    println!("{seq} limit={limit:.9}");
    let mut n = 3usize;
    while n <= seq.max_vertices() {
        let p = seq.get(n as isize - 3).expect("index in range");
        let eff = p.efficiency();
        println!("n={n:<5} efficiency={eff:.9} gap={:.3e}", limit - eff);
        n *= 2;
    }
    let best = seq.most_efficient_polygon().expect("non-empty sequence");
    println!("best={best}");
}
