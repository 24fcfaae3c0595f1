/// Point in user or device space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_wise_extremes() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, -2.0);
        assert_eq!(a.min(b), Vec2::new(1.0, -2.0));
        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
    }
}
