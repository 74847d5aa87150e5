//! Regular polygons inscribed in a circle.
//!
//! Purpose
//! - Closed-form metrics of a regular `n`-gon given its circumradius `R`
//!   (interior angle, side, apothem, area, perimeter).
//! - A read-only, lazily evaluated sequence of such polygons for `n = 3..=m`
//!   sharing one `R`, with Python-style indexing and slicing and an
//!   "most efficient polygon" query (largest area / perimeter).
//!
//! Conventions
//! - All metrics are recomputed on every access; values hold only `(n, R)`.
//! - Circumradius is taken as given. Non-positive or non-finite radii are
//!   accepted but produce degenerate metrics.
//! - Ordering of polygons compares vertex counts, not areas (see `Polygon`).

pub mod cfg;
pub mod error;
pub mod polygon;
pub mod sequence;

pub use error::PolygonError;
pub use polygon::{limit_efficiency, Polygon};
pub use sequence::{Iter, PolygonSequence};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::PolygonError;
    pub use crate::polygon::{limit_efficiency, Polygon};
    pub use crate::sequence::PolygonSequence;
    pub use nalgebra::Vector2 as Vec2;
}
