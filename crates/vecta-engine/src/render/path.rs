use crate::coords::{Matrix, Vec2};

/// Append-only path builder bound to the renderer that created it.
///
/// Every call extends the current subpath or starts a new one; nothing
/// already appended is ever edited. Backends must be able to replay the
/// appended commands into identical geometry.
pub trait Path {
    /// Closed axis-aligned rectangle subpath.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Closed rectangle subpath with elliptical corners.
    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rx: f32, ry: f32);

    /// Closed ellipse subpath centered on `(cx, cy)`.
    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Cubic Bézier segment with two explicit control points.
    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32);

    /// Shorthand curve with a single control point `(x2, y2)`.
    ///
    /// The other control point is derived from the current point, so the
    /// segment is the quadratic Bézier `current → (x2, y2) → (x3, y3)`.
    fn curve_to_v(&mut self, x2: f32, y2: f32, x3: f32, y3: f32);

    fn close_path(&mut self);
}

/// One recorded path operation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    Rect { x: f32, y: f32, width: f32, height: f32 },
    RoundedRect { x: f32, y: f32, width: f32, height: f32, rx: f32, ry: f32 },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    CurveTo { x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32 },
    /// `from` is the current point at the time the segment was appended.
    CurveToV { from: Vec2, x2: f32, y2: f32, x3: f32, y3: f32 },
    ClosePath,
}

/// Backend-neutral recording of [`Path`] calls.
///
/// Backends embed this to get replayable geometry and current-point
/// tracking for free, then translate [`commands`](Self::commands) into
/// their native path type when drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
    current: Vec2,
    subpath_start: Vec2,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current point after the last appended command.
    #[inline]
    pub fn current_point(&self) -> Vec2 {
        self.current
    }

    /// Bounding box of every anchor and control point mapped through `matrix`.
    ///
    /// Curves never leave their control polygon, so this encloses the
    /// geometry; it is exact for straight edges and axis-aligned shapes.
    pub fn control_box(&self, matrix: &Matrix) -> Option<(Vec2, Vec2)> {
        let mut points: Vec<Vec2> = Vec::with_capacity(self.commands.len() * 4);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::Rect { x, y, width: w, height: h }
                | PathCommand::RoundedRect { x, y, width: w, height: h, .. } => {
                    points.extend([
                        Vec2::new(x, y),
                        Vec2::new(x + w, y),
                        Vec2::new(x + w, y + h),
                        Vec2::new(x, y + h),
                    ]);
                }
                PathCommand::Ellipse { cx, cy, rx, ry } => {
                    points.extend([
                        Vec2::new(cx - rx, cy - ry),
                        Vec2::new(cx + rx, cy - ry),
                        Vec2::new(cx + rx, cy + ry),
                        Vec2::new(cx - rx, cy + ry),
                    ]);
                }
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    points.push(Vec2::new(x, y));
                }
                PathCommand::CurveTo { x1, y1, x2, y2, x3, y3 } => {
                    points.extend([Vec2::new(x1, y1), Vec2::new(x2, y2), Vec2::new(x3, y3)]);
                }
                PathCommand::CurveToV { x2, y2, x3, y3, .. } => {
                    points.extend([Vec2::new(x2, y2), Vec2::new(x3, y3)]);
                }
                PathCommand::ClosePath => {}
            }
        }

        let mut mapped = points.into_iter().map(|p| matrix.map_point(p));
        let first = mapped.next()?;
        Some(mapped.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Replays every recorded command into another path.
    pub fn replay_into<P: Path + ?Sized>(&self, target: &mut P) {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::Rect { x, y, width, height } => target.rect(x, y, width, height),
                PathCommand::RoundedRect { x, y, width, height, rx, ry } => {
                    target.rounded_rect(x, y, width, height, rx, ry)
                }
                PathCommand::Ellipse { cx, cy, rx, ry } => target.ellipse(cx, cy, rx, ry),
                PathCommand::MoveTo { x, y } => target.move_to(x, y),
                PathCommand::LineTo { x, y } => target.line_to(x, y),
                PathCommand::CurveTo { x1, y1, x2, y2, x3, y3 } => {
                    target.curve_to(x1, y1, x2, y2, x3, y3)
                }
                PathCommand::CurveToV { x2, y2, x3, y3, .. } => target.curve_to_v(x2, y2, x3, y3),
                PathCommand::ClosePath => target.close_path(),
            }
        }
    }

    fn start_subpath(&mut self, at: Vec2) {
        self.current = at;
        self.subpath_start = at;
    }
}

impl Path for PathData {
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(PathCommand::Rect { x, y, width, height });
        self.start_subpath(Vec2::new(x, y));
    }

    fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rx: f32, ry: f32) {
        self.commands.push(PathCommand::RoundedRect { x, y, width, height, rx, ry });
        self.start_subpath(Vec2::new(x, y));
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.commands.push(PathCommand::Ellipse { cx, cy, rx, ry });
        self.start_subpath(Vec2::new(cx + rx, cy));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo { x, y });
        self.start_subpath(Vec2::new(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo { x, y });
        self.current = Vec2::new(x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.commands.push(PathCommand::CurveTo { x1, y1, x2, y2, x3, y3 });
        self.current = Vec2::new(x3, y3);
    }

    fn curve_to_v(&mut self, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.commands.push(PathCommand::CurveToV { from: self.current, x2, y2, x3, y3 });
        self.current = Vec2::new(x3, y3);
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
        self.current = self.subpath_start;
    }
}
