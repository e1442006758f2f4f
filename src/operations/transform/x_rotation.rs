use crate::math::Matrix3;

/// Builds the rotation that tilts a great circle about the X axis.
///
/// The X component is left unchanged; Y and Z are rotated right-handedly:
///
/// ```text
/// | 1  0       0      |
/// | 0  cos(a)  -sin(a) |
/// | 0  sin(a)  cos(a)  |
/// ```
///
/// Any real angle is accepted. Only `angle mod 360` affects the result.
pub struct XRotation {
    angle_degrees: f64,
}

impl XRotation {
    /// Creates a new `XRotation` operation.
    ///
    /// * `angle_degrees` - Tilt angle in degrees.
    #[must_use]
    pub fn new(angle_degrees: f64) -> Self {
        Self { angle_degrees }
    }

    /// Returns the tilt angle in radians.
    #[must_use]
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// Executes the operation, returning the 3x3 rotation matrix.
    #[must_use]
    pub fn execute(&self) -> Matrix3 {
        let (s, c) = self.angle_radians().sin_cos();
        Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c,   -s,
            0.0, s,   c,
        )
    }
}
