use super::{Color, Gradient};
use crate::render::Renderer;

/// Paint source for fills and strokes: a flat color or a gradient.
///
/// Backends match on both variants at every consumption site.
#[derive(Debug)]
pub enum Paint<R: Renderer> {
    Color(Color),
    Gradient(Gradient<R>),
}

impl<R: Renderer> Default for Paint<R> {
    fn default() -> Self {
        Paint::Color(Color::black())
    }
}

impl<R: Renderer> From<Color> for Paint<R> {
    fn from(color: Color) -> Self {
        Paint::Color(color)
    }
}

impl<R: Renderer> From<Gradient<R>> for Paint<R> {
    fn from(gradient: Gradient<R>) -> Self {
        Paint::Gradient(gradient)
    }
}

impl<R: Renderer> Paint<R> {
    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Color(c) => c.a >= 1.0,
            Paint::Gradient(g) => g.is_opaque(),
        }
    }
}
