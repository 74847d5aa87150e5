//! Fixed constants shared by polygons and sequences.
//!
//! Policy
//! - Constants, not runtime configuration. A regular polygon needs at least
//!   three vertices, and tests compare floats with one absolute tolerance.

/// Smallest vertex count of a (non-degenerate) regular polygon.
pub const MIN_VERTICES: usize = 3;

/// Default absolute tolerance for `Polygon::approx_eq`.
pub const APPROX_EPS: f64 = 1e-9;
