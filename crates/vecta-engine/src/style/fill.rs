use crate::paint::Paint;
use crate::render::Renderer;

/// Fill rule deciding which regions of a path count as inside.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum WindingRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Fill parameters of a drawn path. Defaults to an opaque black non-zero fill.
#[derive(Debug)]
pub struct FillStyle<R: Renderer> {
    pub has_fill: bool,
    pub fill_rule: WindingRule,
    pub opacity: f32,
    pub paint: Paint<R>,
}

impl<R: Renderer> Default for FillStyle<R> {
    fn default() -> Self {
        Self {
            has_fill: true,
            fill_rule: WindingRule::NonZero,
            opacity: 1.0,
            paint: Paint::default(),
        }
    }
}

impl<R: Renderer> FillStyle<R> {
    pub fn new(paint: impl Into<Paint<R>>) -> Self {
        Self { paint: paint.into(), ..Self::default() }
    }

    /// A style that paints nothing.
    pub fn none() -> Self {
        Self { has_fill: false, ..Self::default() }
    }
}
