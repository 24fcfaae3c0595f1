use std::cell::RefCell;
use std::rc::Rc;

use resvg::usvg;
use vecta_engine::coords::{Matrix, Rect};
use vecta_engine::render::{Renderer, Transform};

use crate::walk::{Pass, Walker};
use crate::{DocumentError, DocumentOptions};

/// A parsed SVG document bound to one renderer.
///
/// The document shares ownership of the renderer with its creator. Renderer
/// primitives (paths, transforms, bitmaps) are created from it on every
/// render, so they never outlive the instance that made them.
pub struct Document<R: Renderer> {
    tree: usvg::Tree,
    view_box: Option<Rect>,
    renderer: Rc<RefCell<R>>,
}

impl<R: Renderer> Document<R> {
    pub fn parse(svg: &str, renderer: Rc<RefCell<R>>, options: &DocumentOptions) -> Result<Self, DocumentError> {
        let tree = usvg::Tree::from_str(svg, &options.to_usvg())?;
        let view_box = read_view_box(svg)?;
        let size = tree.size();
        log::debug!("parsed document {}x{}, viewBox {view_box:?}", size.width(), size.height());
        Ok(Self { tree, view_box, renderer })
    }

    pub fn has_view_box(&self) -> bool {
        self.view_box.is_some()
    }

    /// The root `viewBox`, as authored.
    pub fn view_box(&self) -> Option<Rect> {
        self.view_box
    }

    /// Intrinsic size in user units.
    pub fn size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }

    pub fn renderer(&self) -> &Rc<RefCell<R>> {
        &self.renderer
    }

    pub fn render(&self) -> Result<(), DocumentError> {
        self.walk(None, Pass::Render).map(drop)
    }

    /// Renders with `transform` applied on top of the renderer's current state.
    pub fn render_with(&self, transform: &R::Transform) -> Result<(), DocumentError> {
        self.walk(Some(transform.matrix()), Pass::Render).map(drop)
    }

    /// Pixel bounds of everything the document paints under `transform`.
    ///
    /// Empty when nothing is painted or the renderer does not support bounds.
    pub fn bounds(&self, transform: &R::Transform) -> Result<Rect, DocumentError> {
        self.walk(Some(transform.matrix()), Pass::Bounds(Rect::empty()))
    }

    fn walk(&self, transform: Option<Matrix>, pass: Pass) -> Result<Rect, DocumentError> {
        let mut walker = Walker::new(&self.renderer, pass);
        walker.document(self.tree.root(), transform)?;
        Ok(walker.bounds())
    }
}

impl<R: Renderer> std::fmt::Debug for Document<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("size", &self.size())
            .field("view_box", &self.view_box)
            .finish_non_exhaustive()
    }
}

/// `usvg` resolves the viewBox into the root transform, so it is read from
/// the markup directly. A malformed or non-positive viewBox counts as absent.
fn read_view_box(svg: &str) -> Result<Option<Rect>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions { allow_dtd: true, ..roxmltree::ParsingOptions::default() };
    let xml = roxmltree::Document::parse_with_options(svg, options)?;
    let Some(raw) = xml.root_element().attribute("viewBox") else {
        return Ok(None);
    };

    let values: Vec<f32> = raw
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .unwrap_or_default();
    let view_box = match values[..] {
        [x, y, w, h] if w > 0.0 && h > 0.0 => Rect::new(x, y, w, h).ok(),
        _ => None,
    };
    if view_box.is_none() {
        log::debug!("ignoring invalid viewBox {raw:?}");
    }
    Ok(view_box)
}
