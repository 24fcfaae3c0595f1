use std::rc::Rc;

use tiny_skia::{FillRule, FilterQuality, Mask, PathStroker, Pixmap, PixmapPaint, Stroke, StrokeDash};
use vecta_engine::RenderError;
use vecta_engine::coords::{Matrix, Rect};
use vecta_engine::render::{ImageData, ImageEncoding, Path, Renderer, StateStack, Transform};
use vecta_engine::style::{
    ClippingPath, FillStyle, GraphicStyle, LineCap, LineJoin, StrokeStyle, WindingRule,
};

use crate::paint::shader;
use crate::transform::to_skia;
use crate::{SkiaConfig, SkiaImageData, SkiaPath, SkiaTransform};

/// State pushed by one `save`.
#[derive(Clone, Default)]
struct CanvasState {
    transform: Matrix,
    /// Coverage mask in surface pixels; `None` means unclipped.
    clip: Option<Mask>,
    /// Pixel bounds of the clip; tracked even without a surface.
    clip_bounds: Option<Rect>,
    opens_layer: bool,
}

/// Offscreen target for a group with opacity below one.
struct Layer {
    pixmap: Pixmap,
    opacity: f32,
}

/// CPU renderer drawing into an installed premultiplied RGBA surface.
///
/// Without a surface the renderer still tracks state and answers
/// `path_bounds`; draw calls are logged and ignored.
pub struct SkiaRenderer {
    config: SkiaConfig,
    surface: Option<Pixmap>,
    states: StateStack<CanvasState>,
    layers: Vec<Layer>,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SkiaRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkiaRenderer")
            .field("config", &self.config)
            .field("surface", &self.surface_size())
            .field("depth", &self.states.depth())
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self::with_config(SkiaConfig::default())
    }

    pub fn with_config(config: SkiaConfig) -> Self {
        Self {
            config,
            surface: None,
            states: StateStack::new(CanvasState::default()),
            layers: Vec::new(),
        }
    }

    pub fn config(&self) -> &SkiaConfig {
        &self.config
    }

    /// Installs the drawing surface and returns the previous one.
    ///
    /// Masks and layers are sized to the surface, so any open state is
    /// discarded.
    pub fn set_surface(&mut self, surface: Pixmap) -> Option<Pixmap> {
        self.discard_open_state("set_surface");
        log::debug!("surface installed: {}x{}", surface.width(), surface.height());
        self.surface.replace(surface)
    }

    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    /// Removes and returns the surface. Open state is discarded.
    pub fn take_surface(&mut self) -> Option<Pixmap> {
        self.discard_open_state("take_surface");
        self.surface.take()
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.states.depth()
    }

    fn discard_open_state(&mut self, during: &str) {
        if !self.states.is_top_level() {
            log::warn!("{during} with {} unmatched save(s); state discarded", self.states.depth());
        }
        self.states.reset(CanvasState::default());
        self.layers.clear();
    }

    fn surface_size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    /// Innermost draw target with the state that applies to it.
    fn canvas(&mut self) -> Option<(&mut Pixmap, &CanvasState)> {
        let state = self.states.current();
        let target = match self.layers.last_mut() {
            Some(layer) => &mut layer.pixmap,
            None => self.surface.as_mut()?,
        };
        Some((target, state))
    }

    fn apply_clip(&self, state: &mut CanvasState, clip: &ClippingPath<Self>) {
        let matrix = clip_matrix(&state.transform, clip);
        let bounds = device_bounds(&clip.path, &matrix, self.config.snap_epsilon);
        state.clip_bounds = Some(state.clip_bounds.map_or(bounds, |b| b & bounds));

        let Some((width, height)) = self.surface_size() else {
            return;
        };
        // Empty clip content leaves an all-zero mask, hiding everything.
        let Some(mut mask) = Mask::new(width, height) else {
            return;
        };
        if let Some(path) = clip.path.to_skia() {
            mask.fill_path(&path, fill_rule(clip.clip_rule), self.config.anti_alias, to_skia(&matrix));
        }
        if let Some(outer) = &state.clip {
            intersect(&mut mask, outer);
        }
        state.clip = Some(mask);
    }

    fn open_layer(&mut self, opacity: f32) -> bool {
        let Some((width, height)) = self.surface_size() else {
            return false;
        };
        match Pixmap::new(width, height) {
            Some(pixmap) => {
                self.layers.push(Layer { pixmap, opacity: opacity.clamp(0.0, 1.0) });
                true
            }
            None => false,
        }
    }

    fn composite(&mut self, layer: Layer) {
        let paint = PixmapPaint { opacity: layer.opacity, ..PixmapPaint::default() };
        let target = match self.layers.last_mut() {
            Some(parent) => &mut parent.pixmap,
            None => match self.surface.as_mut() {
                Some(surface) => surface,
                None => return,
            },
        };
        target.draw_pixmap(0, 0, layer.pixmap.as_ref(), &paint, tiny_skia::Transform::identity(), None);
    }

    /// Clip bounds that would be in effect inside `save(graphic_style)`.
    fn effective_clip_bounds(&self, matrix: &Matrix, graphic_style: &GraphicStyle<Self>) -> Option<Rect> {
        let parent = self.states.current().clip_bounds;
        match graphic_style.active_clip() {
            Some(clip) => {
                let own = device_bounds(&clip.path, &clip_matrix(matrix, clip), self.config.snap_epsilon);
                Some(parent.map_or(own, |b| b & own))
            }
            None => parent,
        }
    }
}

impl Renderer for SkiaRenderer {
    type Path = SkiaPath;
    type Transform = SkiaTransform;
    type ImageData = SkiaImageData;

    fn create_image_data(
        &mut self,
        base64: &str,
        encoding: ImageEncoding,
    ) -> Result<SkiaImageData, RenderError> {
        SkiaImageData::decode(base64, encoding).map_err(RenderError::ImageDecode)
    }

    fn create_path(&mut self) -> SkiaPath {
        SkiaPath::new()
    }

    fn create_transform(&mut self, matrix: Matrix) -> SkiaTransform {
        SkiaTransform::new(matrix)
    }

    fn save(&mut self, graphic_style: &GraphicStyle<Self>) {
        let parent = self.states.current();
        let mut next = CanvasState {
            transform: local_matrix(&parent.transform, graphic_style),
            clip: parent.clip.clone(),
            clip_bounds: parent.clip_bounds,
            opens_layer: false,
        };

        if let Some(clip) = graphic_style.active_clip() {
            self.apply_clip(&mut next, clip);
        }
        if graphic_style.opacity < 1.0 {
            next.opens_layer = self.open_layer(graphic_style.opacity);
        }

        self.states.push(next);
        log::trace!("save: depth {}", self.states.depth());
    }

    fn restore(&mut self) {
        let Some(state) = self.states.pop() else {
            return;
        };
        if state.opens_layer {
            if let Some(layer) = self.layers.pop() {
                self.composite(layer);
            }
        }
        log::trace!("restore: depth {}", self.states.depth());
    }

    fn reset(&mut self) {
        self.discard_open_state("reset");
    }

    fn draw_path(
        &mut self,
        path: &SkiaPath,
        graphic_style: &GraphicStyle<Self>,
        fill_style: &FillStyle<Self>,
        stroke_style: &StrokeStyle<Self>,
    ) {
        if self.surface.is_none() {
            log::warn!("draw_path without a surface; ignored");
            return;
        }
        let Some(native) = path.to_skia() else {
            return;
        };
        let anti_alias = self.config.anti_alias;

        self.save(graphic_style);
        if let Some((target, state)) = self.canvas() {
            let ts = to_skia(&state.transform);
            let mask = state.clip.as_ref();

            if fill_style.has_fill {
                if let Some(shader) = shader(&fill_style.paint, fill_style.opacity) {
                    let paint = tiny_skia::Paint { shader, anti_alias, ..tiny_skia::Paint::default() };
                    target.fill_path(&native, &paint, fill_rule(fill_style.fill_rule), ts, mask);
                }
            }
            if stroke_style.has_stroke {
                let stroke = skia_stroke(stroke_style);
                if let (Some(shader), Some(stroke)) = (shader(&stroke_style.paint, stroke_style.opacity), stroke) {
                    let paint = tiny_skia::Paint { shader, anti_alias, ..tiny_skia::Paint::default() };
                    target.stroke_path(&native, &paint, &stroke, ts, mask);
                }
            }
        }
        self.restore();
    }

    fn draw_image(
        &mut self,
        image: &SkiaImageData,
        graphic_style: &GraphicStyle<Self>,
        clip_area: Rect,
        fill_area: Rect,
    ) {
        if self.surface.is_none() {
            log::warn!("draw_image without a surface; ignored");
            return;
        }
        if clip_area.is_empty() || fill_area.is_empty() {
            log::debug!("draw_image with an empty area; nothing to draw");
            return;
        }

        let mut area = self.create_path();
        area.rect(clip_area.x(), clip_area.y(), clip_area.width(), clip_area.height());
        let area_clip = ClippingPath::new(true, WindingRule::NonZero, Rc::new(area), None);
        let area_style = GraphicStyle { clipping_path: Some(Rc::new(area_clip)), ..GraphicStyle::default() };

        let placement = Matrix::from_translate(fill_area.x(), fill_area.y()).pre_concat(&Matrix::from_scale(
            fill_area.width() / image.width(),
            fill_area.height() / image.height(),
        ));
        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };

        self.save(graphic_style);
        self.save(&area_style);
        if let Some((target, state)) = self.canvas() {
            let ts = to_skia(&state.transform.pre_concat(&placement));
            target.draw_pixmap(0, 0, image.pixmap().as_ref(), &paint, ts, state.clip.as_ref());
        }
        self.restore();
        self.restore();
    }

    fn path_bounds(
        &self,
        path: &SkiaPath,
        graphic_style: &GraphicStyle<Self>,
        fill_style: &FillStyle<Self>,
        stroke_style: &StrokeStyle<Self>,
    ) -> Rect {
        if !fill_style.has_fill && !stroke_style.has_stroke {
            return Rect::empty();
        }
        let Some(native) = path.to_skia() else {
            return Rect::empty();
        };

        let matrix = local_matrix(&self.states.current().transform, graphic_style);
        let ts = to_skia(&matrix);
        let mut painted: Option<Edges> = None;

        if fill_style.has_fill {
            if let Some(filled) = native.clone().transform(ts) {
                painted = join(painted, &filled);
            }
        }
        if stroke_style.has_stroke {
            if let Some(stroke) = skia_stroke(stroke_style) {
                let res_scale = PathStroker::compute_resolution_scale(&ts);
                let dashed = match &stroke.dash {
                    Some(dash) => native.dash(dash, res_scale),
                    None => Some(native.clone()),
                };
                let outline = dashed
                    .and_then(|p| p.stroke(&stroke, res_scale))
                    .and_then(|p| p.transform(ts));
                if let Some(outline) = outline {
                    painted = join(painted, &outline);
                }
            }
        }

        let Some((left, top, right, bottom)) = painted else {
            return Rect::empty();
        };
        let bounds = Rect::enclosing(left, top, right, bottom, self.config.snap_epsilon);
        match self.effective_clip_bounds(&matrix, graphic_style) {
            Some(clip) => bounds & clip,
            None => bounds,
        }
    }
}

/// Continuous `(left, top, right, bottom)` in surface space.
type Edges = (f32, f32, f32, f32);

fn join(acc: Option<Edges>, path: &tiny_skia::Path) -> Option<Edges> {
    let b = path.compute_tight_bounds().unwrap_or_else(|| path.bounds());
    let edges = (b.left(), b.top(), b.right(), b.bottom());
    Some(match acc {
        Some((l, t, r, bt)) => (l.min(edges.0), t.min(edges.1), r.max(edges.2), bt.max(edges.3)),
        None => edges,
    })
}

fn local_matrix(parent: &Matrix, graphic_style: &GraphicStyle<SkiaRenderer>) -> Matrix {
    match &graphic_style.transform {
        Some(t) => parent.pre_concat(&t.matrix()),
        None => *parent,
    }
}

fn clip_matrix(matrix: &Matrix, clip: &ClippingPath<SkiaRenderer>) -> Matrix {
    match &clip.transform {
        Some(t) => matrix.pre_concat(&t.matrix()),
        None => *matrix,
    }
}

/// Pixel bounds of the area `path` covers under `matrix`.
fn device_bounds(path: &SkiaPath, matrix: &Matrix, epsilon: f32) -> Rect {
    path.to_skia()
        .and_then(|p| p.transform(to_skia(matrix)))
        .and_then(|p| join(None, &p))
        .map_or(Rect::empty(), |(l, t, r, b)| Rect::enclosing(l, t, r, b, epsilon))
}

/// Multiplies `outer` coverage into `mask`.
fn intersect(mask: &mut Mask, outer: &Mask) {
    for (a, &b) in mask.data_mut().iter_mut().zip(outer.data()) {
        *a = ((*a as u16 * b as u16 + 127) / 255) as u8;
    }
}

fn fill_rule(rule: WindingRule) -> FillRule {
    match rule {
        WindingRule::NonZero => FillRule::Winding,
        WindingRule::EvenOdd => FillRule::EvenOdd,
    }
}

/// `None` for strokes that paint nothing (zero or invalid width).
fn skia_stroke(style: &StrokeStyle<SkiaRenderer>) -> Option<Stroke> {
    if !(style.line_width > 0.0 && style.line_width.is_finite()) {
        return None;
    }

    let dash = if style.is_dashed() {
        let mut array = style.dash_array.clone();
        if array.len() % 2 == 1 {
            array.extend_from_within(..);
        }
        let dash = StrokeDash::new(array, style.dash_offset);
        if dash.is_none() {
            log::debug!("invalid dash array {:?}; stroking solid", style.dash_array);
        }
        dash
    } else {
        None
    };

    Some(Stroke {
        width: style.line_width,
        miter_limit: style.miter_limit,
        line_cap: match style.line_cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        line_join: match style.line_join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        },
        dash,
    })
}
