use std::rc::Rc;

use crate::render::Renderer;

use super::WindingRule;

/// Clip region shared by every graphic style that references it.
///
/// Wrap it in an `Rc` to share; the path is released with the last holder.
/// `has_clip_content` is authoritative: when it is `false` backends must not
/// clip at all, whatever `path` and `transform` hold. That distinguishes
/// "no clip" from a clip whose content is empty, which hides everything.
pub struct ClippingPath<R: Renderer> {
    pub has_clip_content: bool,
    pub clip_rule: WindingRule,
    pub path: Rc<R::Path>,
    pub transform: Option<R::Transform>,
}

impl<R: Renderer> ClippingPath<R> {
    pub fn new(
        has_clip_content: bool,
        clip_rule: WindingRule,
        path: Rc<R::Path>,
        transform: Option<R::Transform>,
    ) -> Self {
        Self { has_clip_content, clip_rule, path, transform }
    }

    /// Whether a backend should apply this clip.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.has_clip_content
    }
}

impl<R: Renderer> std::fmt::Debug for ClippingPath<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClippingPath")
            .field("has_clip_content", &self.has_clip_content)
            .field("clip_rule", &self.clip_rule)
            .field("has_transform", &self.transform.is_some())
            .finish_non_exhaustive()
    }
}
