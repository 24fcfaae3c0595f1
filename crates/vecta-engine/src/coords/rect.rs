use core::ops::{BitAnd, BitOr};

use crate::error::GeometryError;

use super::Interval;

/// Axis-aligned rectangle in device pixels, inclusive on both ends.
///
/// A rect of `width` pixels starting at `x` covers pixel columns
/// `x ..= x + width - 1` (likewise for rows). A rect with a zero width or
/// height is empty, wherever its origin is.
///
/// Intersection, union and containment are all computed through the
/// per-axis [`Interval`]s returned by [`intervals`](Self::intervals).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Fails if either extent is negative (or NaN).
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        if !(width >= 0.0 && height >= 0.0) {
            return Err(GeometryError::InvalidExtent { width, height });
        }
        Ok(Self { x, y, width, height })
    }

    /// The empty rect. Also the "unsupported" answer of optional bounds queries.
    #[inline]
    pub const fn empty() -> Self {
        Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 }
    }

    /// Builds a rect from two inclusive corner pixels, in either order.
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::from_intervals(Interval::new(x0, x1), Interval::new(y0, y1))
    }

    /// Smallest pixel rect covering the continuous box `[left, right] × [top, bottom]`.
    ///
    /// Edges within `epsilon` of a whole pixel snap to it first, so float
    /// noise from transforms cannot grow the result by a pixel. Degenerate or
    /// non-finite boxes give the empty rect.
    pub fn enclosing(left: f32, top: f32, right: f32, bottom: f32, epsilon: f32) -> Self {
        let finite = [left, top, right, bottom].iter().all(|v| v.is_finite());
        if !finite || right < left || bottom < top {
            return Self::empty();
        }

        let snap = |v: f32| {
            let whole = v.round();
            if (v - whole).abs() <= epsilon { whole } else { v }
        };
        let x0 = snap(left).floor();
        let y0 = snap(top).floor();
        let x1 = snap(right).ceil();
        let y1 = snap(bottom).ceil();

        if x1 == x0 || y1 == y0 {
            return Self::empty();
        }
        Self { x: x0, y: y0, width: x1 - x0, height: y1 - y0 }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.height
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y
    }

    /// First column past the rect (`x + width`).
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// First row past the rect (`y + height`).
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Two-corner inclusive form `(x0, y0, x1, y1)`, where `x1` is the last
    /// covered column (`x + width - 1`).
    #[inline]
    pub fn corners(self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.x + self.width - 1.0, self.y + self.height - 1.0)
    }

    /// Pixel columns and rows covered by this rect.
    ///
    /// A zero extent yields an empty interval on that axis.
    pub fn intervals(self) -> (Interval, Interval) {
        (
            Self::axis(self.x, self.width),
            Self::axis(self.y, self.height),
        )
    }

    /// True when every pixel of `other` is covered by `self`.
    ///
    /// An empty `other` covers no pixels and is therefore contained in any
    /// rect, including another empty one.
    pub fn contains(self, other: Rect) -> bool {
        let (ax, ay) = self.intervals();
        let (bx, by) = other.intervals();
        ax.contains(bx) && ay.contains(by)
    }

    #[inline]
    fn axis(origin: f32, extent: f32) -> Interval {
        if extent == 0.0 {
            Interval::empty()
        } else {
            Interval::new(origin, origin + extent - 1.0)
        }
    }

    /// Inverse of [`intervals`](Self::intervals); empty if either axis is.
    fn from_intervals(xs: Interval, ys: Interval) -> Self {
        match (xs.bounds(), ys.bounds()) {
            (Some((x0, x1)), Some((y0, y1))) => Self {
                x: x0,
                y: y0,
                width: x1 - x0 + 1.0,
                height: y1 - y0 + 1.0,
            },
            _ => Self::empty(),
        }
    }
}

impl BitAnd for Rect {
    type Output = Rect;

    fn bitand(self, rhs: Rect) -> Rect {
        let (ax, ay) = self.intervals();
        let (bx, by) = rhs.intervals();
        Rect::from_intervals(ax & bx, ay & by)
    }
}

/// Smallest rect covering both operands. Union with an empty rect returns
/// the other operand unchanged.
impl BitOr for Rect {
    type Output = Rect;

    fn bitor(self, rhs: Rect) -> Rect {
        if self.is_empty() {
            return rhs;
        }
        if rhs.is_empty() {
            return self;
        }
        let (ax, ay) = self.intervals();
        let (bx, by) = rhs.intervals();
        Rect::from_intervals(ax | bx, ay | by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_size_is_empty() {
        assert!(r(0.0, 0.0, 0.0, 0.0).is_empty());
        assert!(r(5.0, 5.0, 0.0, 3.0).is_empty());
        assert!(r(5.0, 5.0, 3.0, 0.0).is_empty());
        assert!(Rect::empty().is_empty());
    }

    #[test]
    fn negative_extent_is_rejected() {
        assert_eq!(
            Rect::new(1.0, 2.0, 4.0, -6.0),
            Err(GeometryError::InvalidExtent { width: 4.0, height: -6.0 })
        );
        assert!(Rect::new(1.0, 2.0, -4.0, 6.0).is_err());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn regular_rect() {
        let rect = r(1.0, 2.0, 4.0, 6.0);
        assert!(!rect.is_empty());
        assert_eq!((rect.x(), rect.y(), rect.width(), rect.height()), (1.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn equality() {
        assert_eq!(r(1.0, 2.0, 4.0, 6.0), r(1.0, 2.0, 4.0, 6.0));
        assert_ne!(r(1.0, 2.0, 4.0, 6.0), r(2.0, 2.0, 4.0, 6.0));
    }

    // ── inclusive-pixel sides ─────────────────────────────────────────────

    #[test]
    fn intervals_are_inclusive() {
        let (xs, ys) = r(1.0, 2.0, 4.0, 6.0).intervals();
        assert_eq!(xs.bounds(), Some((1.0, 4.0)));
        assert_eq!(ys.bounds(), Some((2.0, 7.0)));
    }

    #[test]
    fn sides_and_area() {
        let rect = r(1.0, 2.0, 4.0, 6.0);
        assert_eq!(rect.area(), 24.0);
        assert_eq!(rect.left(), 1.0);
        assert_eq!(rect.top(), 2.0);
        assert_eq!(rect.right(), 5.0);
        assert_eq!(rect.bottom(), 8.0);
        assert_eq!(rect.corners(), (1.0, 2.0, 4.0, 7.0));
    }

    #[test]
    fn corners_agree_with_origin_extent() {
        let rect = r(3.0, -4.0, 10.0, 7.0);
        let (x0, y0, x1, y1) = rect.corners();
        assert_eq!((x0, y0, x1, y1), (3.0, -4.0, 12.0, 2.0));
        assert_eq!(Rect::from_corners(x0, y0, x1, y1), rect);
        assert_eq!(Rect::from_corners(x1, y1, x0, y0), rect);
    }

    #[test]
    fn enclosing_snaps_float_noise() {
        assert_eq!(Rect::enclosing(10.0, 10.0, 110.0, 110.0, 1e-3), r(10.0, 10.0, 100.0, 100.0));
        assert_eq!(
            Rect::enclosing(12.000_005, 13.999_99, 132.000_01, 154.000_02, 1e-3),
            r(12.0, 14.0, 120.0, 140.0)
        );
        assert_eq!(Rect::enclosing(0.5, 0.5, 2.5, 1.5, 1e-3), r(0.0, 0.0, 3.0, 2.0));
    }

    #[test]
    fn enclosing_degenerate_is_empty() {
        assert!(Rect::enclosing(0.0, 5.0, 10.0, 5.0, 1e-3).is_empty());
        assert!(Rect::enclosing(10.0, 0.0, 0.0, 5.0, 1e-3).is_empty());
        assert!(Rect::enclosing(f32::NAN, 0.0, 1.0, 1.0, 1e-3).is_empty());
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn contains() {
        let outer = r(1.0, 2.0, 4.0, 6.0);
        let inner = r(2.0, 3.0, 2.0, 2.0);
        assert!(outer.contains(inner));
        assert!(!inner.contains(outer));
    }

    #[test]
    fn contains_self() {
        let rect = r(1.0, 2.0, 4.0, 6.0);
        assert!(rect.contains(rect));
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(r(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn one_pixel_wider_is_not_contained() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(r(0.0, 0.0, 11.0, 10.0)));
        assert!(!r(10.0, 10.0, 100.0, 100.0).contains(r(10.0, 10.0, 101.0, 100.0)));
    }

    #[test]
    fn empty_rect_is_contained_everywhere() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Rect::empty()));
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(r(50.0, 50.0, 0.0, 3.0)));
        assert!(Rect::empty().contains(Rect::empty()));
        assert!(!Rect::empty().contains(r(0.0, 0.0, 1.0, 1.0)));
    }

    // ── intersection ──────────────────────────────────────────────────────

    #[test]
    fn intersection_with_empty_is_empty() {
        assert!((Rect::empty() & Rect::empty()).is_empty());
        assert!((r(1.0, 1.0, 10.0, 10.0) & Rect::empty()).is_empty());
        assert!((Rect::empty() & r(1.0, 1.0, 10.0, 10.0)).is_empty());
        // An empty rect sitting inside another still intersects to empty.
        assert!((r(-5.0, -5.0, 10.0, 10.0) & Rect::empty()).is_empty());
    }

    #[test]
    fn self_intersection_is_identity() {
        let rect = r(1.0, 1.0, 10.0, 10.0);
        assert_eq!(rect & rect, rect);
    }

    #[test]
    fn intersection_of_nested_rects_is_inner() {
        let a = r(1.0, 2.0, 4.0, 6.0);
        let b = r(2.0, 3.0, 2.0, 2.0);
        let c = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a & b, b);
        assert_eq!(a & c, a);
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        assert!((r(0.0, 0.0, 10.0, 10.0) & r(-10.0, -10.0, 5.0, 5.0)).is_empty());
    }

    #[test]
    fn partial_overlap() {
        let result = r(-10.0, -10.0, 5.0, 5.0) & r(-8.0, -8.0, 5.0, 5.0);
        assert_eq!(result, r(-8.0, -8.0, 3.0, 3.0));
        assert_eq!(result & result, result);
    }

    // ── union ─────────────────────────────────────────────────────────────

    #[test]
    fn union() {
        let a = r(1.0, 1.0, 4.0, 4.0);
        let b = r(5.0, 5.0, 4.0, 4.0);
        assert_eq!(a | b, r(1.0, 1.0, 8.0, 8.0));
        assert!((Rect::empty() | Rect::empty()).is_empty());
        assert_eq!(a | a, a);
        assert_eq!(a | Rect::empty(), a);
        assert_eq!(Rect::empty() | b, b);
    }
}
