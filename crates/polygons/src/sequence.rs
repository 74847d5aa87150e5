//! Read-only sequence of regular polygons `n = 3..=m` sharing one circumradius.
//!
//! Elements are built on access; the sequence itself stores only `(m, R)`.
//! Index `i` always maps to the polygon with `i + 3` vertices.
//!
//! Indexing follows the usual sequence conventions: negative indices count
//! from the end, `get` rejects out-of-range indices, `slice` clamps its bounds.

use crate::cfg::MIN_VERTICES;
use crate::error::PolygonError;
use crate::polygon::Polygon;
use std::fmt;
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSequence {
    max_vertices: usize,
    circumradius: f64,
}

impl PolygonSequence {
    /// Fails with `InvalidArgument` when `max_vertices < 3` or when it does not
    /// fit in `isize` (indices are signed).
    pub fn new(max_vertices: usize, circumradius: f64) -> Result<Self, PolygonError> {
        if max_vertices < MIN_VERTICES {
            return Err(PolygonError::invalid(format!(
                "max_vertices must be at least {MIN_VERTICES}, got {max_vertices}"
            )));
        }
        if isize::try_from(max_vertices).is_err() {
            return Err(PolygonError::invalid(format!(
                "max_vertices must not exceed {}, got {max_vertices}",
                isize::MAX
            )));
        }
        Ok(Self {
            max_vertices,
            circumradius,
        })
    }

    #[inline]
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Number of polygons, `max_vertices - 2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.max_vertices - (MIN_VERTICES - 1)
    }

    /// Always false for a constructed sequence; kept alongside `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`; negative values count from the end (`-1` is last).
    pub fn get(&self, index: isize) -> Result<Polygon, PolygonError> {
        let len = self.len();
        let pos = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else if (index as usize) < len {
            Some(index as usize)
        } else {
            None
        };
        let pos = pos.ok_or(PolygonError::IndexOutOfRange { index, len })?;
        self.polygon_at(pos)
    }

    /// Elements selected by the half-open range `start..stop` walked with `step`.
    ///
    /// Bounds default to the whole sequence in the direction of `step`
    /// (default 1) and are clamped rather than rejected. A zero step fails
    /// with `InvalidArgument`.
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Vec<Polygon>, PolygonError> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(PolygonError::invalid("slice step cannot be zero"));
        }
        // `new` bounds max_vertices by isize::MAX, so len fits.
        let len = isize::try_from(self.len())
            .map_err(|_| PolygonError::invalid("sequence too long to slice"))?;
        let (start, stop) = slice_bounds(len, start, stop, step);
        let mut out = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            out.push(self.polygon_at(i as usize)?);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(out)
    }

    /// Lazy, restartable iteration in ascending vertex count.
    pub fn iter(&self) -> Iter {
        Iter {
            next_front: MIN_VERTICES,
            next_back: self.max_vertices,
            circumradius: self.circumradius,
        }
    }

    /// Polygon with the largest `area / perimeter`.
    ///
    /// Scans the full range; on ties the smallest vertex count wins.
    pub fn most_efficient_polygon(&self) -> Result<Polygon, PolygonError> {
        let mut best: Option<(Polygon, f64)> = None;
        for p in self.iter() {
            let e = p.efficiency();
            if best.map_or(true, |(_, be)| e > be) {
                best = Some((p, e));
            }
        }
        best.map(|(p, _)| p).ok_or(PolygonError::EmptySequence)
    }

    #[inline]
    fn polygon_at(&self, pos: usize) -> Result<Polygon, PolygonError> {
        Polygon::new(pos + MIN_VERTICES, self.circumradius)
    }
}

/// Normalize optional slice bounds against `len` for the given non-zero `step`.
///
/// Positive steps clamp into `[0, len]`; negative steps clamp into `[-1, len-1]`,
/// where `-1` means "before the first element".
fn slice_bounds(
    len: isize,
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
) -> (isize, isize) {
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
    let clamp = |x: isize| {
        let x = if x < 0 { x + len } else { x };
        x.clamp(lower, upper)
    };
    let start = start.map_or(if step > 0 { lower } else { upper }, clamp);
    let stop = stop.map_or(if step > 0 { upper } else { lower }, clamp);
    (start, stop)
}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygons(m={}, R={})", self.max_vertices, self.circumradius)
    }
}

impl IntoIterator for &PolygonSequence {
    type Item = Polygon;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over a `PolygonSequence`; yields polygons by vertex count.
#[derive(Clone, Debug)]
pub struct Iter {
    next_front: usize,
    next_back: usize,
    circumradius: f64,
}

impl Iterator for Iter {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if self.next_front > self.next_back {
            return None;
        }
        let n = self.next_front;
        self.next_front += 1;
        Polygon::new(n, self.circumradius).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = if self.next_front > self.next_back {
            0
        } else {
            self.next_back - self.next_front + 1
        };
        (rem, Some(rem))
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<Polygon> {
        if self.next_front > self.next_back {
            return None;
        }
        let n = self.next_back;
        self.next_back -= 1;
        Polygon::new(n, self.circumradius).ok()
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::limit_efficiency;
    use proptest::prelude::*;

    fn counts(ps: &[Polygon]) -> Vec<usize> {
        ps.iter().map(Polygon::count_vertices).collect()
    }

    #[test]
    fn length_and_display() {
        let s = PolygonSequence::new(10, 5.0).unwrap();
        assert_eq!(s.len(), 8);
        assert!(!s.is_empty());
        assert_eq!(s.to_string(), "Polygons(m=10, R=5)");
        assert_eq!(PolygonSequence::new(3, 1.0).unwrap().len(), 1);
    }

    #[test]
    fn rejects_small_max_vertices() {
        for m in [0usize, 1, 2] {
            assert!(matches!(
                PolygonSequence::new(m, 1.0),
                Err(PolygonError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn positive_and_negative_indexing() {
        let s = PolygonSequence::new(10, 5.0).unwrap();
        assert_eq!(s.get(0).unwrap().count_vertices(), 3);
        assert_eq!(s.get(3).unwrap(), Polygon::new(6, 5.0).unwrap());
        assert_eq!(s.get(-1).unwrap().count_vertices(), 10);
        assert_eq!(s.get(-8).unwrap().count_vertices(), 3);
    }

    #[test]
    fn out_of_range_index() {
        let s = PolygonSequence::new(10, 5.0).unwrap();
        assert_eq!(
            s.get(8),
            Err(PolygonError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert_eq!(
            s.get(-9),
            Err(PolygonError::IndexOutOfRange { index: -9, len: 8 })
        );
        assert!(s.get(isize::MIN).is_err());
    }

    #[test]
    fn slicing_follows_sequence_conventions() {
        let s = PolygonSequence::new(10, 5.0).unwrap();
        assert_eq!(counts(&s.slice(Some(2), Some(5), None).unwrap()), [5, 6, 7]);
        assert_eq!(counts(&s.slice(None, None, None).unwrap()).len(), 8);
        assert_eq!(counts(&s.slice(Some(-2), None, None).unwrap()), [9, 10]);
        assert_eq!(counts(&s.slice(Some(-100), Some(2), None).unwrap()), [3, 4]);
        assert_eq!(counts(&s.slice(Some(6), Some(100), None).unwrap()), [9, 10]);
        assert!(s.slice(Some(5), Some(2), None).unwrap().is_empty());
        assert!(s.slice(Some(50), None, None).unwrap().is_empty());
        assert_eq!(counts(&s.slice(None, None, Some(3)).unwrap()), [3, 6, 9]);
        assert_eq!(
            counts(&s.slice(None, None, Some(-1)).unwrap()),
            [10, 9, 8, 7, 6, 5, 4, 3]
        );
        assert_eq!(counts(&s.slice(Some(5), Some(1), Some(-2)).unwrap()), [8, 6]);
        assert_eq!(counts(&s.slice(Some(100), Some(-100), Some(-3)).unwrap()), [10, 7, 4]);
        assert!(matches!(
            s.slice(None, None, Some(0)),
            Err(PolygonError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn iteration_is_lazy_and_restartable() {
        let s = PolygonSequence::new(6, 2.0).unwrap();
        let first: Vec<usize> = s.iter().map(|p| p.count_vertices()).collect();
        let second: Vec<usize> = (&s).into_iter().map(|p| p.count_vertices()).collect();
        assert_eq!(first, [3, 4, 5, 6]);
        assert_eq!(first, second);
        let rev: Vec<usize> = s.iter().rev().map(|p| p.count_vertices()).collect();
        assert_eq!(rev, [6, 5, 4, 3]);
        let mut it = s.iter();
        assert_eq!(it.len(), 4);
        it.next();
        it.next_back();
        assert_eq!(it.len(), 2);
        assert!(it.all(|p| p.circumradius() == 2.0));
    }

    #[test]
    fn most_efficient_is_largest_vertex_count() {
        let s = PolygonSequence::new(10, 5.0).unwrap();
        let best = s.most_efficient_polygon().unwrap();
        assert_eq!(best, Polygon::new(10, 5.0).unwrap());
        let single = PolygonSequence::new(3, 1.0).unwrap();
        assert_eq!(single.most_efficient_polygon().unwrap().count_vertices(), 3);
    }

    #[test]
    fn most_efficient_keeps_first_when_nothing_beats_it() {
        // R = 0: every ratio is 0/0, none compares greater than the triangle's.
        let s = PolygonSequence::new(7, 0.0).unwrap();
        assert_eq!(s.most_efficient_polygon().unwrap().count_vertices(), 3);
    }

    #[test]
    fn efficiency_approaches_circle() {
        let r = 3.0;
        let s = PolygonSequence::new(2000, r).unwrap();
        let effs: Vec<f64> = s.iter().map(|p| p.efficiency()).collect();
        assert!(effs.windows(2).all(|w| w[1] >= w[0]));
        let last = *effs.last().unwrap();
        assert!(last < limit_efficiency(r));
        assert!((last - limit_efficiency(r)).abs() < 1e-5);
    }

    #[test]
    fn huge_step_stops_after_first_element() {
        let s = PolygonSequence::new(10, 5.0).unwrap();
        assert_eq!(counts(&s.slice(Some(1), None, Some(isize::MAX)).unwrap()), [4]);
        assert_eq!(counts(&s.slice(Some(-2), None, Some(isize::MIN)).unwrap()), [9]);
        assert_eq!(
            counts(&s.slice(Some(isize::MIN), Some(isize::MAX), Some(isize::MAX)).unwrap()),
            [3]
        );
    }

    #[test]
    fn extreme_max_vertices() {
        assert!(matches!(
            PolygonSequence::new(usize::MAX, 1.0),
            Err(PolygonError::InvalidArgument { .. })
        ));
        assert!(PolygonSequence::new(isize::MAX as usize + 1, 1.0).is_err());

        let s = PolygonSequence::new(isize::MAX as usize, 1.0).unwrap();
        assert_eq!(s.len(), isize::MAX as usize - 2);
        assert_eq!(s.iter().len(), s.len());
        assert_eq!(s.get(-1).unwrap().count_vertices(), isize::MAX as usize);
        assert_eq!(
            counts(&s.slice(Some(-2), None, None).unwrap()),
            [isize::MAX as usize - 1, isize::MAX as usize]
        );
        assert_eq!(counts(&s.slice(None, Some(2), None).unwrap()), [3, 4]);
        let mut it = s.iter();
        assert_eq!(it.next_back().unwrap().count_vertices(), isize::MAX as usize);
        assert_eq!(it.len(), s.len() - 1);
    }

    /// Slice positions computed in `i128` with the usual clamping rules.
    fn slice_positions(
        len: usize,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Vec<usize> {
        let len = len as i128;
        let step = step as i128;
        let norm = |x: isize, lo: i128, hi: i128| {
            let x = x as i128;
            let x = if x < 0 { x + len } else { x };
            x.max(lo).min(hi)
        };
        let (lo, hi) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let mut i = start.map_or(if step > 0 { lo } else { hi }, |x| norm(x, lo, hi));
        let stop = stop.map_or(if step > 0 { hi } else { lo }, |x| norm(x, lo, hi));
        let mut out = Vec::new();
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            out.push(i as usize);
            i += step;
        }
        out
    }

    proptest! {
        #[test]
        fn slice_matches_clamped_model(
            m in 3usize..40,
            start in prop::option::of(any::<isize>()),
            stop in prop::option::of(any::<isize>()),
            step in any::<isize>().prop_filter("non-zero step", |s| *s != 0),
        ) {
            let s = PolygonSequence::new(m, 1.0).unwrap();
            let expected: Vec<usize> = slice_positions(s.len(), start, stop, step)
                .into_iter()
                .map(|i| i + 3)
                .collect();
            prop_assert_eq!(counts(&s.slice(start, stop, Some(step)).unwrap()), expected);
        }

        #[test]
        fn small_slice_bounds_match_model(
            m in 3usize..40,
            start in prop::option::of(-50isize..50),
            stop in prop::option::of(-50isize..50),
            step in prop_oneof![-5isize..0, 1isize..6],
        ) {
            let s = PolygonSequence::new(m, 1.0).unwrap();
            let expected: Vec<usize> = slice_positions(s.len(), start, stop, step)
                .into_iter()
                .map(|i| i + 3)
                .collect();
            prop_assert_eq!(counts(&s.slice(start, stop, Some(step)).unwrap()), expected);
        }

        #[test]
        fn index_maps_to_vertex_count(m in 3usize..500, r in 1e-3f64..1e3, k in any::<prop::sample::Index>()) {
            let s = PolygonSequence::new(m, r).unwrap();
            let i = k.index(s.len());
            prop_assert_eq!(s.get(i as isize).unwrap().count_vertices(), i + 3);
            let neg = i as isize - s.len() as isize;
            prop_assert_eq!(s.get(neg).unwrap(), s.get(i as isize).unwrap());
        }
    }
}
