use tiny_skia::PathBuilder;
use vecta_engine::render::{Path, PathCommand, PathData};

/// Bézier handle length for a quarter ellipse arc.
const KAPPA: f32 = 0.552_284_8;

/// Path handed out by [`SkiaRenderer`](crate::SkiaRenderer).
///
/// Commands are recorded as-is and converted into a [`tiny_skia::Path`] when
/// the renderer needs one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkiaPath {
    data: PathData,
}

impl SkiaPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &PathData {
        &self.data
    }

    /// Native path, or `None` when nothing drawable was appended.
    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for cmd in self.data.commands() {
            match *cmd {
                PathCommand::Rect { x, y, width, height } => {
                    if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) {
                        pb.push_rect(rect);
                    }
                }
                PathCommand::RoundedRect { x, y, width, height, rx, ry } => {
                    push_rounded_rect(&mut pb, x, y, width, height, rx, ry);
                }
                PathCommand::Ellipse { cx, cy, rx, ry } => {
                    if let Some(oval) =
                        tiny_skia::Rect::from_xywh(cx - rx, cy - ry, rx * 2.0, ry * 2.0)
                    {
                        pb.push_oval(oval);
                    }
                }
                PathCommand::MoveTo { x, y } => pb.move_to(x, y),
                PathCommand::LineTo { x, y } => pb.line_to(x, y),
                PathCommand::CurveTo { x1, y1, x2, y2, x3, y3 } => {
                    pb.cubic_to(x1, y1, x2, y2, x3, y3)
                }
                PathCommand::CurveToV { x2, y2, x3, y3, .. } => pb.quad_to(x2, y2, x3, y3),
                PathCommand::ClosePath => pb.close(),
            }
        }
        pb.finish()
    }
}

impl Path for SkiaPath {
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.data.rect(x, y, width, height);
    }

    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rx: f32, ry: f32) {
        self.data.rounded_rect(x, y, width, height, rx, ry);
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.data.ellipse(cx, cy, rx, ry);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.data.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.data.line_to(x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.data.curve_to(x1, y1, x2, y2, x3, y3);
    }

    fn curve_to_v(&mut self, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.data.curve_to_v(x2, y2, x3, y3);
    }

    fn close_path(&mut self) {
        self.data.close_path();
    }
}

/// Radii are clamped to half the side they sit on, as in SVG `<rect>`.
fn push_rounded_rect(pb: &mut PathBuilder, x: f32, y: f32, w: f32, h: f32, rx: f32, ry: f32) {
    let rx = rx.clamp(0.0, w / 2.0);
    let ry = ry.clamp(0.0, h / 2.0);
    if rx == 0.0 || ry == 0.0 {
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) {
            pb.push_rect(rect);
        }
        return;
    }

    let (kx, ky) = (rx * KAPPA, ry * KAPPA);
    let (r, b) = (x + w, y + h);

    pb.move_to(x + rx, y);
    pb.line_to(r - rx, y);
    pb.cubic_to(r - rx + kx, y, r, y + ry - ky, r, y + ry);
    pb.line_to(r, b - ry);
    pb.cubic_to(r, b - ry + ky, r - rx + kx, b, r - rx, b);
    pb.line_to(x + rx, b);
    pb.cubic_to(x + rx - kx, b, x, b - ry + ky, x, b - ry);
    pb.line_to(x, y + ry);
    pb.cubic_to(x, y + ry - ky, x + rx - kx, y, x + rx, y);
    pb.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(path: &SkiaPath) -> (f32, f32, f32, f32) {
        let b = path.to_skia().unwrap().bounds();
        (b.left(), b.top(), b.right(), b.bottom())
    }

    #[test]
    fn empty_path_has_no_native_form() {
        assert!(SkiaPath::new().to_skia().is_none());
    }

    #[test]
    fn rect_converts() {
        let mut p = SkiaPath::new();
        p.rect(10.0, 10.0, 100.0, 100.0);
        assert_eq!(bounds(&p), (10.0, 10.0, 110.0, 110.0));
    }

    #[test]
    fn rounded_rect_stays_inside_its_box() {
        let mut p = SkiaPath::new();
        p.rounded_rect(0.0, 0.0, 20.0, 10.0, 50.0, 50.0);
        assert_eq!(bounds(&p), (0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn ellipse_and_segments_convert() {
        let mut p = SkiaPath::new();
        p.ellipse(5.0, 5.0, 5.0, 2.0);
        p.move_to(0.0, 0.0);
        p.curve_to_v(10.0, 0.0, 10.0, 10.0);
        p.curve_to(10.0, 12.0, 8.0, 14.0, 6.0, 14.0);
        p.close_path();
        assert_eq!(bounds(&p), (0.0, 0.0, 10.0, 14.0));
    }
}
