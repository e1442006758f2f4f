/// A point in spherical coordinates.
///
/// - `rho` = distance from the origin
/// - `theta` = polar angle from the +Z pole, in `[0, pi]`
/// - `phi` = azimuth around the Z axis measured from +X, in `(-pi, pi]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPoint {
    /// Euclidean norm of the source point.
    pub rho: f64,
    /// Polar angle in radians.
    pub theta: f64,
    /// Azimuth in radians.
    pub phi: f64,
}

impl SphericalPoint {
    /// Creates a new spherical point.
    #[must_use]
    pub fn new(rho: f64, theta: f64, phi: f64) -> Self {
        Self { rho, theta, phi }
    }
}
