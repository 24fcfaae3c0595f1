//! Tree traversal issuing capability calls.

use std::cell::RefCell;
use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use resvg::usvg;
use vecta_engine::coords::{Matrix, Rect};
use vecta_engine::render::{ImageEncoding, Path, Renderer, SaveRestoreGuard};
use vecta_engine::style::{ClippingPath, FillStyle, GraphicStyle, StrokeStyle, WindingRule};

use crate::DocumentError;
use crate::convert;

/// What a traversal does at each painted element.
pub(crate) enum Pass {
    Render,
    /// Union of the pixel bounds measured so far.
    Bounds(Rect),
}

pub(crate) struct Walker<'a, R: Renderer> {
    renderer: &'a Rc<RefCell<R>>,
    pass: Pass,
}

impl<'a, R: Renderer> Walker<'a, R> {
    pub(crate) fn new(renderer: &'a Rc<RefCell<R>>, pass: Pass) -> Self {
        Self { renderer, pass }
    }

    pub(crate) fn bounds(&self) -> Rect {
        match self.pass {
            Pass::Bounds(bounds) => bounds,
            Pass::Render => Rect::empty(),
        }
    }

    /// Walks the whole tree, wrapped in `transform` when given.
    pub(crate) fn document(&mut self, root: &usvg::Group, transform: Option<Matrix>) -> Result<(), DocumentError> {
        let transform = transform.map(|m| self.with(|r| r.create_transform(m))).transpose()?;
        let style = GraphicStyle { transform, ..GraphicStyle::default() };
        self.scoped(&style, |w| w.group(root))
    }

    fn measuring(&self) -> bool {
        matches!(self.pass, Pass::Bounds(_))
    }

    fn accumulate(&mut self, bounds: Rect) {
        if let Pass::Bounds(acc) = &mut self.pass {
            *acc = *acc | bounds;
        }
    }

    fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> Result<T, DocumentError> {
        let mut renderer = self.renderer.try_borrow_mut().map_err(|_| DocumentError::RendererBusy)?;
        Ok(f(&mut renderer))
    }

    /// Runs `body` between one `save(style)` and its `restore`.
    fn scoped(
        &mut self,
        style: &GraphicStyle<R>,
        body: impl FnOnce(&mut Self) -> Result<(), DocumentError>,
    ) -> Result<(), DocumentError> {
        self.with(|_| ())?;
        let _scope = SaveRestoreGuard::from_rc(self.renderer, style);
        body(self)
    }

    fn group(&mut self, group: &usvg::Group) -> Result<(), DocumentError> {
        if group.mask().is_some() || !group.filters().is_empty() {
            log::debug!("group {:?}: masks and filters are not supported; drawing content as is", group.id());
        }
        // Opacity never changes bounds; skip the layer when measuring.
        let opacity = if self.measuring() { 1.0 } else { group.opacity().get() };

        let (style, nested) = self.with(|r| {
            let transform = convert::transform(r, group.transform());
            let (clipping_path, nested) = match group.clip_path() {
                Some(clip) => (Some(Rc::new(clip_path(r, clip))), nested_clips(r, clip)),
                None => (None, Vec::new()),
            };
            (GraphicStyle { opacity, transform, clipping_path }, nested)
        })?;

        self.scoped(&style, |w| w.clipped(&nested, group))
    }

    /// Opens one scope per extra clip, then walks the group's children.
    fn clipped(&mut self, clips: &[GraphicStyle<R>], group: &usvg::Group) -> Result<(), DocumentError> {
        match clips.split_first() {
            Some((first, rest)) => self.scoped(first, |w| w.clipped(rest, group)),
            None => group.children().iter().try_for_each(|child| self.node(child)),
        }
    }

    fn node(&mut self, node: &usvg::Node) -> Result<(), DocumentError> {
        match node {
            usvg::Node::Group(group) => self.group(group),
            usvg::Node::Path(path) => self.path(path),
            usvg::Node::Image(image) => self.image(image),
            usvg::Node::Text(text) => self.group(text.flattened()),
        }
    }

    fn path(&mut self, path: &usvg::Path) -> Result<(), DocumentError> {
        if !path.is_visible() {
            return Ok(());
        }
        let measuring = self.measuring();
        let stroke_first = path.paint_order() == usvg::PaintOrder::StrokeAndFill;

        let bounds = self.with(|r| {
            let mut native = r.create_path();
            convert::append_segments(&mut native, path.data(), &Matrix::IDENTITY);
            let fill = convert::fill_style(r, path.fill());
            let stroke = convert::stroke_style(r, path.stroke());
            let graphic = GraphicStyle::default();

            if measuring {
                return r.path_bounds(&native, &graphic, &fill, &stroke);
            }
            if stroke_first && fill.has_fill && stroke.has_stroke {
                r.draw_path(&native, &graphic, &FillStyle::none(), &stroke);
                r.draw_path(&native, &graphic, &fill, &StrokeStyle::default());
            } else if fill.has_fill || stroke.has_stroke {
                r.draw_path(&native, &graphic, &fill, &stroke);
            }
            Rect::empty()
        })?;

        self.accumulate(bounds);
        Ok(())
    }

    fn image(&mut self, image: &usvg::Image) -> Result<(), DocumentError> {
        if !image.is_visible() {
            return Ok(());
        }
        let (encoding, data) = match image.kind() {
            usvg::ImageKind::PNG(data) => (ImageEncoding::Png, data),
            usvg::ImageKind::JPEG(data) => (ImageEncoding::Jpeg, data),
            _ => {
                log::debug!("image {:?}: only PNG and JPEG are supported; skipped", image.id());
                return Ok(());
            }
        };
        let size = image.size();
        let Ok(area) = Rect::new(0.0, 0.0, size.width(), size.height()) else {
            return Ok(());
        };

        if self.measuring() {
            let bounds = self.with(|r| {
                let mut outline = r.create_path();
                outline.rect(0.0, 0.0, size.width(), size.height());
                r.path_bounds(&outline, &GraphicStyle::default(), &FillStyle::default(), &StrokeStyle::default())
            })?;
            self.accumulate(bounds);
            return Ok(());
        }

        let payload = STANDARD.encode(data.as_slice());
        self.with(|r| match r.create_image_data(&payload, encoding) {
            Ok(bitmap) => r.draw_image(&bitmap, &GraphicStyle::default(), area, area),
            Err(err) => log::warn!("image {:?} skipped: {:#}", image.id(), anyhow::Error::from(err)),
        })
    }
}

/// Flattens the clip content into one path in the clip's own space.
fn clip_path<R: Renderer>(renderer: &mut R, clip: &usvg::ClipPath) -> ClippingPath<R> {
    let mut path = renderer.create_path();
    let mut rule = None;
    collect_clip(&mut path, clip.root(), &Matrix::IDENTITY, &mut rule);
    let transform = convert::transform(renderer, clip.transform());
    ClippingPath::new(true, rule.unwrap_or_default(), Rc::new(path), transform)
}

/// Clip paths applied to `clip` itself, outermost first.
fn nested_clips<R: Renderer>(renderer: &mut R, clip: &usvg::ClipPath) -> Vec<GraphicStyle<R>> {
    let mut styles = Vec::new();
    let mut next = clip.clip_path();
    while let Some(inner) = next {
        let clipping_path = Some(Rc::new(clip_path(renderer, inner)));
        styles.push(GraphicStyle { clipping_path, ..GraphicStyle::default() });
        next = inner.clip_path();
    }
    styles
}

/// The first child's clip rule applies to the whole flattened clip.
fn collect_clip<P: Path>(path: &mut P, group: &usvg::Group, parent: &Matrix, rule: &mut Option<WindingRule>) {
    let m = parent.pre_concat(&convert::matrix(group.transform()));
    for child in group.children() {
        match child {
            usvg::Node::Path(p) if p.is_visible() => {
                convert::append_segments(path, p.data(), &m);
                if let Some(fill) = p.fill() {
                    rule.get_or_insert(convert::winding_rule(fill.rule()));
                }
            }
            usvg::Node::Group(g) => collect_clip(path, g, &m, rule),
            usvg::Node::Text(t) => collect_clip(path, t.flattened(), &m, rule),
            usvg::Node::Path(_) | usvg::Node::Image(_) => {}
        }
    }
}
