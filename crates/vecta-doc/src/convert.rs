//! usvg tree values to Vecta styles and primitives.

use resvg::usvg;
use resvg::usvg::tiny_skia_path::PathSegment;
use vecta_engine::coords::{Matrix, Vec2};
use vecta_engine::paint::{Color, Gradient, Paint, SpreadMethod};
use vecta_engine::render::{Path, Renderer};
use vecta_engine::style::{FillStyle, LineCap, LineJoin, StrokeStyle, WindingRule};

pub(crate) fn matrix(ts: usvg::Transform) -> Matrix {
    Matrix::new(ts.sx, ts.ky, ts.kx, ts.sy, ts.tx, ts.ty)
}

/// Renderer transform for `ts`, or `None` for the identity.
pub(crate) fn transform<R: Renderer>(renderer: &mut R, ts: usvg::Transform) -> Option<R::Transform> {
    (!ts.is_identity()).then(|| renderer.create_transform(matrix(ts)))
}

/// Appends every segment of `data`, mapped through `m`, to `path`.
pub(crate) fn append_segments<P: Path>(path: &mut P, data: &usvg::tiny_skia_path::Path, m: &Matrix) {
    let map = |p: usvg::tiny_skia_path::Point| m.map_point(Vec2::new(p.x, p.y));
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                let p = map(p);
                path.move_to(p.x, p.y);
            }
            PathSegment::LineTo(p) => {
                let p = map(p);
                path.line_to(p.x, p.y);
            }
            PathSegment::QuadTo(c, p) => {
                let (c, p) = (map(c), map(p));
                path.curve_to_v(c.x, c.y, p.x, p.y);
            }
            PathSegment::CubicTo(c1, c2, p) => {
                let (c1, c2, p) = (map(c1), map(c2), map(p));
                path.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
            }
            PathSegment::Close => path.close_path(),
        }
    }
}

pub(crate) fn winding_rule(rule: usvg::FillRule) -> WindingRule {
    match rule {
        usvg::FillRule::NonZero => WindingRule::NonZero,
        usvg::FillRule::EvenOdd => WindingRule::EvenOdd,
    }
}

pub(crate) fn fill_style<R: Renderer>(renderer: &mut R, fill: Option<&usvg::Fill>) -> FillStyle<R> {
    let Some(fill) = fill else {
        return FillStyle::none();
    };
    let Some(paint) = paint(renderer, fill.paint()) else {
        return FillStyle::none();
    };
    FillStyle {
        has_fill: true,
        fill_rule: winding_rule(fill.rule()),
        opacity: fill.opacity().get(),
        paint,
    }
}

pub(crate) fn stroke_style<R: Renderer>(renderer: &mut R, stroke: Option<&usvg::Stroke>) -> StrokeStyle<R> {
    let Some(stroke) = stroke else {
        return StrokeStyle::default();
    };
    let Some(paint) = paint(renderer, stroke.paint()) else {
        return StrokeStyle::default();
    };
    StrokeStyle {
        has_stroke: true,
        opacity: stroke.opacity().get(),
        line_width: stroke.width().get(),
        line_cap: match stroke.linecap() {
            usvg::LineCap::Butt => LineCap::Butt,
            usvg::LineCap::Round => LineCap::Round,
            usvg::LineCap::Square => LineCap::Square,
        },
        line_join: match stroke.linejoin() {
            usvg::LineJoin::Miter | usvg::LineJoin::MiterClip => LineJoin::Miter,
            usvg::LineJoin::Round => LineJoin::Round,
            usvg::LineJoin::Bevel => LineJoin::Bevel,
        },
        miter_limit: stroke.miterlimit().get(),
        dash_array: stroke.dasharray().map(<[f32]>::to_vec).unwrap_or_default(),
        dash_offset: stroke.dashoffset(),
        paint,
    }
}

/// `None` for paint servers the capability interface cannot express.
fn paint<R: Renderer>(renderer: &mut R, paint: &usvg::Paint) -> Option<Paint<R>> {
    match paint {
        usvg::Paint::Color(c) => Some(Paint::Color(Color::from_rgba8(c.red, c.green, c.blue, 255))),
        usvg::Paint::LinearGradient(lg) => {
            let gradient = Gradient::linear(lg.x1(), lg.y1(), lg.x2(), lg.y2());
            Some(Paint::Gradient(finish_gradient(renderer, gradient, lg)))
        }
        usvg::Paint::RadialGradient(rg) => {
            let gradient =
                Gradient::radial(rg.cx(), rg.cy(), rg.r().get()).with_focal(rg.fx(), rg.fy());
            Some(Paint::Gradient(finish_gradient(renderer, gradient, rg)))
        }
        usvg::Paint::Pattern(_) => {
            log::debug!("pattern paint is not supported; painting nothing");
            None
        }
    }
}

fn finish_gradient<R: Renderer>(
    renderer: &mut R,
    mut gradient: Gradient<R>,
    base: &usvg::BaseGradient,
) -> Gradient<R> {
    gradient.spread = match base.spread_method() {
        usvg::SpreadMethod::Pad => SpreadMethod::Pad,
        usvg::SpreadMethod::Reflect => SpreadMethod::Reflect,
        usvg::SpreadMethod::Repeat => SpreadMethod::Repeat,
    };
    gradient.transform = transform(renderer, base.transform());
    for stop in base.stops() {
        let c = stop.color();
        let color = Color::from_rgba8(c.red, c.green, c.blue, 255).with_opacity(stop.opacity().get());
        gradient.push_stop(stop.offset().get(), color);
    }
    gradient
}
