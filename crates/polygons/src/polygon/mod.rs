//! Regular polygon inscribed in a circle (value type).
//!
//! Model
//! - A polygon is the pair `(n, R)`: vertex count and circumradius. Every
//!   metric is a pure function of that pair and is recomputed on access.
//! - `side = 2 R sin(π/n)`, `apothem = R cos(π/n)`, `area = n/2 · side · apothem`,
//!   `perimeter = n · side`, `interior angle = (n-2)·180/n` degrees.
//!
//! Comparison semantics
//! - `==` is structural on `(n, R)`.
//! - `<`/`>` compare vertex counts only, not area or size. Two polygons with the
//!   same `n` but different `R` are neither equal nor ordered; `partial_cmp`
//!   returns `None` and `try_cmp` reports `UnsupportedComparison`.

use crate::cfg::MIN_VERTICES;
use crate::error::PolygonError;
use nalgebra::Vector2;
use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

/// Regular `n`-gon with circumradius `R`.
///
/// Invariants:
/// - `vertex_count >= 3` (enforced by `new`).
/// - `circumradius` is not validated; `R <= 0` or NaN yields degenerate metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    vertex_count: usize,
    circumradius: f64,
}

impl Polygon {
    /// Construct from vertex count and circumradius.
    ///
    /// Fails with `InvalidArgument` when `vertex_count < 3`.
    pub fn new(vertex_count: usize, circumradius: f64) -> Result<Self, PolygonError> {
        if vertex_count < MIN_VERTICES {
            return Err(PolygonError::invalid(format!(
                "polygon must have at least {MIN_VERTICES} vertices, got {vertex_count}"
            )));
        }
        Ok(Self {
            vertex_count,
            circumradius,
        })
    }

    #[inline]
    pub fn count_vertices(&self) -> usize {
        self.vertex_count
    }

    /// Edge count; equals the vertex count for any polygon.
    #[inline]
    pub fn count_edges(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Interior angle in degrees.
    pub fn interior_angle(&self) -> f64 {
        let n = self.vertex_count as f64;
        (n - 2.0) * 180.0 / n
    }

    pub fn side_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / self.vertex_count as f64).sin()
    }

    /// Distance from the centre to the midpoint of any edge (the inradius).
    pub fn apothem(&self) -> f64 {
        self.circumradius * (PI / self.vertex_count as f64).cos()
    }

    pub fn area(&self) -> f64 {
        self.vertex_count as f64 / 2.0 * self.side_length() * self.apothem()
    }

    pub fn perimeter(&self) -> f64 {
        self.vertex_count as f64 * self.side_length()
    }

    /// Area-to-perimeter ratio, `area / perimeter` (analytically `apothem / 2`).
    pub fn efficiency(&self) -> f64 {
        self.area() / self.perimeter()
    }

    /// Vertex positions on the circumcircle centred at the origin.
    ///
    /// First vertex at angle 0, then counterclockwise in steps of `2π/n`.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let n = self.vertex_count;
        let step = 2.0 * PI / n as f64;
        (0..n)
            .map(|k| {
                let th = k as f64 * step;
                Vector2::new(self.circumradius * th.cos(), self.circumradius * th.sin())
            })
            .collect()
    }

    /// Same vertex count and circumradii within `eps`.
    pub fn approx_eq(&self, other: &Polygon, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && (self.circumradius - other.circumradius).abs() <= eps
    }

    /// Ordering by vertex count, or `UnsupportedComparison` when the operands
    /// share a vertex count without being equal.
    pub fn try_cmp(&self, other: &Polygon) -> Result<Ordering, PolygonError> {
        self.partial_cmp(other)
            .ok_or(PolygonError::UnsupportedComparison)
    }
}

impl PartialOrd for Polygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.vertex_count.cmp(&other.vertex_count) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon(vertices_number={}, circumradius={})",
            self.vertex_count, self.circumradius
        )
    }
}

/// Area-to-perimeter ratio of the circle of radius `circumradius`, the limit
/// of `Polygon::efficiency` as the vertex count grows.
#[inline]
pub fn limit_efficiency(circumradius: f64) -> f64 {
    circumradius / 2.0
}
