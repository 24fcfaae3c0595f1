use crate::render::Renderer;

use super::Color;

/// Gradient geometry family.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SpreadMethod {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Mirror-repeat the gradient pattern.
    Reflect,
    /// Repeat the gradient pattern.
    Repeat,
}

/// A single gradient stop.
///
/// `offset` is expected in [0, 1] but is not enforced, and stops are kept in
/// document order. Backends that need sorted or clamped stops do that work.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear or radial gradient paint server.
///
/// Geometry fields are `None` until the document sets them: `x1..y2` apply
/// to linear gradients, `cx, cy, fx, fy, r` to radial ones. The optional
/// `transform` is owned by the gradient and maps gradient space to user
/// space.
pub struct Gradient<R: Renderer> {
    pub kind: GradientKind,
    pub spread: SpreadMethod,
    pub stops: Vec<ColorStop>,
    pub x1: Option<f32>,
    pub y1: Option<f32>,
    pub x2: Option<f32>,
    pub y2: Option<f32>,
    pub cx: Option<f32>,
    pub cy: Option<f32>,
    pub fx: Option<f32>,
    pub fy: Option<f32>,
    pub r: Option<f32>,
    pub transform: Option<R::Transform>,
}

impl<R: Renderer> Gradient<R> {
    fn empty(kind: GradientKind) -> Self {
        Self {
            kind,
            spread: SpreadMethod::Pad,
            stops: Vec::new(),
            x1: None,
            y1: None,
            x2: None,
            y2: None,
            cx: None,
            cy: None,
            fx: None,
            fy: None,
            r: None,
            transform: None,
        }
    }

    pub fn linear(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: Some(x1),
            y1: Some(y1),
            x2: Some(x2),
            y2: Some(y2),
            ..Self::empty(GradientKind::Linear)
        }
    }

    /// Radial gradient without an explicit focal point.
    pub fn radial(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            cx: Some(cx),
            cy: Some(cy),
            r: Some(r),
            ..Self::empty(GradientKind::Radial)
        }
    }

    pub fn with_focal(mut self, fx: f32, fy: f32) -> Self {
        self.fx = Some(fx);
        self.fy = Some(fy);
        self
    }

    pub fn with_spread(mut self, spread: SpreadMethod) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_transform(mut self, transform: R::Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn push_stop(&mut self, offset: f32, color: Color) {
        self.stops.push(ColorStop::new(offset, color));
    }

    /// Focal point, falling back to the center when unset.
    pub fn focal_point(&self) -> Option<(f32, f32)> {
        let cx = self.cx?;
        let cy = self.cy?;
        Some((self.fx.unwrap_or(cx), self.fy.unwrap_or(cy)))
    }

    /// Returns true when every stop is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.stops.iter().all(|s| s.color.a >= 1.0)
    }
}

impl<R: Renderer> std::fmt::Debug for Gradient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gradient")
            .field("kind", &self.kind)
            .field("spread", &self.spread)
            .field("stops", &self.stops)
            .field("has_transform", &self.transform.is_some())
            .finish_non_exhaustive()
    }
}
