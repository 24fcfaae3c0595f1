use crate::coords::Matrix;

/// 2D affine transform bound to the renderer that created it.
///
/// Backends supply [`matrix`](Self::matrix) and [`set_matrix`](Self::set_matrix);
/// the composing operations are provided here so every backend composes in
/// the same order: the new operation is pre-multiplied, i.e. applied first
/// in the local coordinate space of the current matrix.
pub trait Transform {
    fn matrix(&self) -> Matrix;

    fn set_matrix(&mut self, matrix: Matrix);

    /// Replaces the matrix with `[a b c d tx ty]`.
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) {
        self.set_matrix(Matrix::new(a, b, c, d, tx, ty));
    }

    /// Composes a rotation by `degrees`.
    fn rotate(&mut self, degrees: f32) {
        self.concat_matrix(&Matrix::from_rotate(degrees));
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.concat_matrix(&Matrix::from_translate(tx, ty));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.concat_matrix(&Matrix::from_scale(sx, sy));
    }

    fn concat(&mut self, a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) {
        self.concat_matrix(&Matrix::new(a, b, c, d, tx, ty));
    }

    fn concat_matrix(&mut self, other: &Matrix) {
        let composed = self.matrix().pre_concat(other);
        self.set_matrix(composed);
    }
}

/// A bare matrix is a complete transform; backends without a native matrix
/// type can use it directly.
impl Transform for Matrix {
    fn matrix(&self) -> Matrix {
        *self
    }

    fn set_matrix(&mut self, matrix: Matrix) {
        *self = matrix;
    }
}
