use vecta_engine::coords::Matrix;
use vecta_engine::render::Transform;

/// Affine transform handed out by [`SkiaRenderer`](crate::SkiaRenderer).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SkiaTransform {
    matrix: Matrix,
}

impl SkiaTransform {
    pub fn new(matrix: Matrix) -> Self {
        Self { matrix }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Transform {
        to_skia(&self.matrix)
    }
}

impl Transform for SkiaTransform {
    fn matrix(&self) -> Matrix {
        self.matrix
    }

    fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }
}

pub(crate) fn to_skia(m: &Matrix) -> tiny_skia::Transform {
    tiny_skia::Transform::from_row(m.a, m.b, m.c, m.d, m.tx, m.ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_like_the_engine_matrix() {
        let mut t = SkiaTransform::default();
        t.translate(10.0, 20.0);
        t.scale(2.0, 3.0);

        let mut p = [tiny_skia::Point::from_xy(1.0, 1.0)];
        t.to_skia().map_points(&mut p);
        assert_eq!((p[0].x, p[0].y), (12.0, 23.0));
    }
}
