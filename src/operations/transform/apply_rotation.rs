use crate::math::{Matrix3, Point3};

/// Applies a 3x3 linear transform to a sequence of points.
///
/// Output order and length match the input.
pub struct ApplyRotation<'a> {
    matrix: Matrix3,
    points: &'a [Point3],
}

impl<'a> ApplyRotation<'a> {
    /// Creates a new `ApplyRotation` operation.
    #[must_use]
    pub fn new(matrix: Matrix3, points: &'a [Point3]) -> Self {
        Self { matrix, points }
    }

    /// Executes the transform, returning the rotated points.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        self.points.iter().map(|p| self.matrix * p).collect()
    }
}
