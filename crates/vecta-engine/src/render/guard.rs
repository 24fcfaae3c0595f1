use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::style::GraphicStyle;

use super::Renderer;

/// Pairs one `save` with one `restore` on a renderer it does not own.
///
/// On construction the guard issues `save(graphic_style)` if the renderer is
/// still alive; when dropped it issues `restore()` if the renderer is still
/// alive. The guard never keeps the renderer alive: whoever owns the
/// `Rc<RefCell<R>>` controls its lifetime.
///
/// If the renderer is gone by the time the guard is created or dropped, the
/// corresponding call is skipped silently. This is intentional and not an
/// error: tearing down the renderer first must not turn into a double
/// teardown or a panic in the guard.
///
/// A renderer that is already borrowed at construction gets no `save`, and
/// the guard then skips the matching `restore` as well.
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct SaveRestoreGuard<R: Renderer> {
    renderer: Weak<RefCell<R>>,
    saved: bool,
}

impl<R: Renderer> SaveRestoreGuard<R> {
    pub fn new(renderer: Weak<RefCell<R>>, graphic_style: &GraphicStyle<R>) -> Self {
        let saved = match renderer.upgrade() {
            Some(live) => match live.try_borrow_mut() {
                Ok(mut live) => {
                    live.save(graphic_style);
                    true
                }
                Err(_) => {
                    log::warn!("renderer busy while opening a save/restore scope; save skipped");
                    false
                }
            },
            None => false,
        };
        Self { renderer, saved }
    }

    /// Convenience for callers that hold the owning handle.
    pub fn from_rc(renderer: &Rc<RefCell<R>>, graphic_style: &GraphicStyle<R>) -> Self {
        Self::new(Rc::downgrade(renderer), graphic_style)
    }
}

impl<R: Renderer> Drop for SaveRestoreGuard<R> {
    fn drop(&mut self) {
        if !self.saved {
            return;
        }
        let Some(renderer) = self.renderer.upgrade() else {
            return;
        };
        match renderer.try_borrow_mut() {
            Ok(mut renderer) => renderer.restore(),
            Err(_) => log::warn!("renderer busy while closing a save/restore scope; restore skipped"),
        }
    }
}
