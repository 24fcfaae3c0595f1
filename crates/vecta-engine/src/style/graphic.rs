use std::rc::Rc;

use crate::render::Renderer;

use super::ClippingPath;

/// Compositing state pushed and popped as a unit by `Renderer::save`.
pub struct GraphicStyle<R: Renderer> {
    /// Group opacity, the CSS `opacity` property.
    pub opacity: f32,
    pub transform: Option<R::Transform>,
    pub clipping_path: Option<Rc<ClippingPath<R>>>,
}

impl<R: Renderer> Default for GraphicStyle<R> {
    fn default() -> Self {
        Self { opacity: 1.0, transform: None, clipping_path: None }
    }
}

impl<R: Renderer> GraphicStyle<R> {
    pub fn with_transform(transform: R::Transform) -> Self {
        Self { transform: Some(transform), ..Self::default() }
    }

    /// The clip a backend should apply, if any.
    pub fn active_clip(&self) -> Option<&ClippingPath<R>> {
        self.clipping_path.as_deref().filter(|clip| clip.is_active())
    }
}

impl<R: Renderer> std::fmt::Debug for GraphicStyle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicStyle")
            .field("opacity", &self.opacity)
            .field("has_transform", &self.transform.is_some())
            .field("clipping_path", &self.clipping_path)
            .finish()
    }
}
