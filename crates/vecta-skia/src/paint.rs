use tiny_skia::{GradientStop, LinearGradient, Point, RadialGradient, Shader, SpreadMode};
use vecta_engine::paint::{Color, ColorStop, Gradient, GradientKind, Paint, SpreadMethod};

use crate::SkiaRenderer;

/// Shader for `paint` with its alpha scaled by `opacity`.
///
/// `None` means the paint draws nothing (no stops, degenerate geometry).
pub(crate) fn shader(paint: &Paint<SkiaRenderer>, opacity: f32) -> Option<Shader<'static>> {
    match paint {
        Paint::Color(color) => Some(Shader::SolidColor(skia_color(color.with_opacity(opacity)))),
        Paint::Gradient(gradient) => gradient_shader(gradient, opacity),
    }
}

pub(crate) fn skia_color(color: Color) -> tiny_skia::Color {
    let c = color.clamped();
    tiny_skia::Color::from_rgba(c.r, c.g, c.b, c.a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn gradient_shader(gradient: &Gradient<SkiaRenderer>, opacity: f32) -> Option<Shader<'static>> {
    let stops = stops(gradient, opacity);
    if stops.is_empty() {
        log::debug!("gradient without stops paints nothing");
        return None;
    }

    let mode = match gradient.spread {
        SpreadMethod::Pad => SpreadMode::Pad,
        SpreadMethod::Reflect => SpreadMode::Reflect,
        SpreadMethod::Repeat => SpreadMode::Repeat,
    };
    let ts = gradient.transform.map(|t| t.to_skia()).unwrap_or_default();

    let shader = match gradient.kind {
        GradientKind::Linear => LinearGradient::new(
            Point::from_xy(gradient.x1.unwrap_or(0.0), gradient.y1.unwrap_or(0.0)),
            Point::from_xy(gradient.x2.unwrap_or(1.0), gradient.y2.unwrap_or(0.0)),
            stops,
            mode,
            ts,
        ),
        GradientKind::Radial => {
            let (cx, cy) = (gradient.cx.unwrap_or(0.5), gradient.cy.unwrap_or(0.5));
            let (fx, fy) = gradient.focal_point().unwrap_or((cx, cy));
            RadialGradient::new(
                Point::from_xy(fx, fy),
                Point::from_xy(cx, cy),
                gradient.r.unwrap_or(0.5),
                stops,
                mode,
                ts,
            )
        }
    };
    if shader.is_none() {
        log::debug!("degenerate {:?} gradient paints nothing", gradient.kind);
    }
    shader
}

fn stops(gradient: &Gradient<SkiaRenderer>, opacity: f32) -> Vec<GradientStop> {
    monotonic_offsets(&gradient.stops)
        .into_iter()
        .zip(&gradient.stops)
        .map(|(offset, stop)| GradientStop::new(offset, skia_color(stop.color.with_opacity(opacity))))
        .collect()
}

/// Offsets in document order, clamped to [0, 1] and made non-decreasing as
/// SVG requires.
fn monotonic_offsets(stops: &[ColorStop]) -> Vec<f32> {
    let mut last = 0.0f32;
    stops
        .iter()
        .map(|stop| {
            let offset = if stop.offset.is_finite() { stop.offset.clamp(0.0, 1.0) } else { 0.0 };
            last = last.max(offset);
            last
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_color_carries_opacity() {
        let paint = Paint::Color(Color::new(1.0, 0.0, 0.0, 1.0));
        let Some(Shader::SolidColor(c)) = shader(&paint, 0.5) else {
            panic!("expected a solid color");
        };
        assert_eq!((c.red(), c.alpha()), (1.0, 0.5));
    }

    #[test]
    fn gradient_without_stops_paints_nothing() {
        let paint = Paint::Gradient(Gradient::linear(0.0, 0.0, 10.0, 0.0));
        assert!(shader(&paint, 1.0).is_none());
    }

    #[test]
    fn gradients_build_shaders() {
        let mut linear = Gradient::linear(0.0, 0.0, 10.0, 0.0);
        linear.push_stop(0.0, Color::black());
        linear.push_stop(1.0, Color::new(1.0, 1.0, 1.0, 1.0));
        assert!(shader(&Paint::Gradient(linear), 1.0).is_some());

        let mut radial = Gradient::radial(5.0, 5.0, 5.0).with_focal(4.0, 4.0);
        radial.push_stop(0.0, Color::black());
        radial.push_stop(1.0, Color::transparent());
        assert!(shader(&Paint::Gradient(radial), 1.0).is_some());
    }

    #[test]
    fn offsets_are_clamped_and_monotonic() {
        let stops = [
            ColorStop::new(0.6, Color::black()),
            ColorStop::new(0.2, Color::black()),
            ColorStop::new(1.5, Color::black()),
            ColorStop::new(f32::NAN, Color::black()),
        ];
        assert_eq!(monotonic_offsets(&stops), vec![0.6, 0.6, 1.0, 1.0]);
    }
}
