use core::ops::{BitAnd, BitOr};

/// Closed range `[min, max]` on the real line, or the empty interval.
///
/// The two-endpoint constructor normalizes its arguments, so `min <= max`
/// holds for every non-empty interval.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Interval {
    range: Option<(f32, f32)>,
}

impl Interval {
    #[inline]
    pub const fn empty() -> Self {
        Self { range: None }
    }

    /// Degenerate interval `[u, u]`.
    #[inline]
    pub const fn point(u: f32) -> Self {
        Self { range: Some((u, u)) }
    }

    #[inline]
    pub fn new(u: f32, v: f32) -> Self {
        if u <= v {
            Self { range: Some((u, v)) }
        } else {
            Self { range: Some((v, u)) }
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.range.is_none()
    }

    #[inline]
    pub fn min(self) -> Option<f32> {
        self.range.map(|(a, _)| a)
    }

    #[inline]
    pub fn max(self) -> Option<f32> {
        self.range.map(|(_, b)| b)
    }

    #[inline]
    pub fn bounds(self) -> Option<(f32, f32)> {
        self.range
    }

    /// `true` iff every point of `other` lies in `self`.
    ///
    /// The empty interval is contained in everything and contains nothing
    /// but itself.
    #[inline]
    pub fn contains(self, other: Interval) -> bool {
        match (self.range, other.range) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some((a0, a1)), Some((b0, b1))) => a0 <= b0 && a1 >= b1,
        }
    }
}

impl BitAnd for Interval {
    type Output = Interval;

    fn bitand(self, rhs: Interval) -> Interval {
        let (Some((a0, a1)), Some((b0, b1))) = (self.range, rhs.range) else {
            return Interval::empty();
        };

        let lo = a0.max(b0);
        let hi = a1.min(b1);
        if lo <= hi { Interval { range: Some((lo, hi)) } } else { Interval::empty() }
    }
}

/// Hull of both operands; the empty interval is the identity.
impl BitOr for Interval {
    type Output = Interval;

    fn bitor(self, rhs: Interval) -> Interval {
        match (self.range, rhs.range) {
            (None, _) => rhs,
            (_, None) => self,
            (Some((a0, a1)), Some((b0, b1))) => Interval { range: Some((a0.min(b0), a1.max(b1))) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness() {
        assert!(Interval::empty().is_empty());
        assert!(!Interval::point(10.0).is_empty());
        assert!(!Interval::new(10.0, 12.0).is_empty());
    }

    #[test]
    fn endpoints_are_normalized() {
        let a = Interval::new(10.0, 12.0);
        let b = Interval::new(12.0, 10.0);
        assert_eq!(a.min(), Some(10.0));
        assert_eq!(a.max(), Some(12.0));
        assert_eq!(b.min(), Some(10.0));
        assert_eq!(b.max(), Some(12.0));
        assert_eq!(a, b);
    }

    // ── intersection ──────────────────────────────────────────────────────

    #[test]
    fn disjoint_intersection_is_empty() {
        assert!((Interval::new(10.0, 12.0) & Interval::new(14.0, 15.0)).is_empty());
        assert!((Interval::new(10.0, 15.0) & Interval::new(16.0, 20.0)).is_empty());
    }

    #[test]
    fn nested_intersection_is_inner() {
        let c = Interval::new(10.0, 15.0) & Interval::new(11.0, 14.0);
        assert_eq!(c.bounds(), Some((11.0, 14.0)));
    }

    #[test]
    fn overlapping_intersection() {
        let c = Interval::new(10.0, 15.0) & Interval::new(12.0, 18.0);
        assert_eq!(c.bounds(), Some((12.0, 15.0)));

        let d = Interval::new(14.0, 20.0) & Interval::new(10.0, 15.0);
        assert_eq!(d.bounds(), Some((14.0, 15.0)));
    }

    #[test]
    fn touching_endpoints_give_a_point() {
        // Closed ranges share the endpoint.
        let c = Interval::new(10.0, 15.0) & Interval::new(15.0, 20.0);
        assert_eq!(c, Interval::point(15.0));
    }

    #[test]
    fn intersection_with_empty_is_empty() {
        assert!((Interval::empty() & Interval::new(0.0, 1.0)).is_empty());
        assert!((Interval::new(0.0, 1.0) & Interval::empty()).is_empty());
        assert!((Interval::empty() & Interval::empty()).is_empty());
    }

    #[test]
    fn intersection_commutes() {
        let a = Interval::new(-3.0, 7.0);
        let b = Interval::new(2.0, 9.0);
        assert_eq!(a & b, b & a);
    }

    // ── containment / hull ────────────────────────────────────────────────

    #[test]
    fn contains() {
        let outer = Interval::new(0.0, 10.0);
        assert!(outer.contains(Interval::new(2.0, 3.0)));
        assert!(outer.contains(outer));
        assert!(!outer.contains(Interval::new(0.0, 11.0)));
        assert!(outer.contains(Interval::empty()));
        assert!(!Interval::empty().contains(outer));
    }

    #[test]
    fn hull() {
        let h = Interval::new(1.0, 4.0) | Interval::new(5.0, 8.0);
        assert_eq!(h.bounds(), Some((1.0, 8.0)));
        assert_eq!(Interval::empty() | Interval::point(3.0), Interval::point(3.0));
    }
}
