use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::geometry::SphericalPoint;
use crate::math::{Point3, TOLERANCE};

/// Converts Cartesian points to spherical coordinates with +Z as the pole.
///
/// Output order and length match the input.
pub struct ToSpherical<'a> {
    points: &'a [Point3],
}

impl<'a> ToSpherical<'a> {
    /// Creates a new `ToSpherical` operation.
    #[must_use]
    pub fn new(points: &'a [Point3]) -> Self {
        Self { points }
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if any point is non-finite or lies at the origin.
    /// Nothing is returned for the remaining points in that case.
    pub fn execute(&self) -> Result<Vec<SphericalPoint>> {
        self.points.iter().map(cartesian_to_spherical).collect()
    }
}

/// Converts a single Cartesian point to `(rho, theta, phi)`.
///
/// - `theta = acos(z / rho)`, with the ratio clamped to `[-1, 1]`
/// - `phi = atan2(y, x)`, folded into `(-pi, pi]`
///
/// A point on the Z axis has no defined azimuth; its `phi` is 0.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] for NaN or infinite coordinates and
/// [`GeometryError::DegenerateRadius`] when `rho` is zero, including norms
/// that underflow to zero.
pub fn cartesian_to_spherical(point: &Point3) -> Result<SphericalPoint> {
    let (x, y, z) = (point.x, point.y, point.z);
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(GeometryError::NonFinite { x, y, z }.into());
    }

    let rho = point.coords.norm();
    if rho == 0.0 {
        return Err(GeometryError::DegenerateRadius { x, y, z }.into());
    }

    let theta = (z / rho).clamp(-1.0, 1.0).acos();
    let phi = if x.hypot(y) <= TOLERANCE * rho {
        0.0
    } else {
        let phi = y.atan2(x);
        // atan2 reports -pi for y = -0.0 or rounding below zero.
        if phi <= -PI {
            phi + TAU
        } else {
            phi
        }
    };

    Ok(SphericalPoint::new(rho, theta, phi))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GreatCircleError;

    fn sph(x: f64, y: f64, z: f64) -> SphericalPoint {
        cartesian_to_spherical(&Point3::new(x, y, z)).unwrap()
    }

    #[test]
    fn axis_points() {
        let px = sph(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(px.rho, 1.0);
        assert_abs_diff_eq!(px.theta, FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(px.phi, 0.0);

        let py = sph(0.0, 2.0, 0.0);
        assert_abs_diff_eq!(py.rho, 2.0);
        assert_abs_diff_eq!(py.phi, FRAC_PI_2, epsilon = 1e-15);

        let north = sph(0.0, 0.0, 3.0);
        assert_abs_diff_eq!(north.theta, 0.0);
        assert_abs_diff_eq!(north.phi, 0.0);

        let south = sph(0.0, 0.0, -1.0);
        assert_abs_diff_eq!(south.theta, PI, epsilon = 1e-15);
    }

    #[test]
    fn azimuth_is_never_minus_pi() {
        let a = sph(-1.0, -0.0, 0.0);
        assert_eq!(a.phi, PI);
        let b = sph(-1.0, -1.2246467991473532e-16, 0.0);
        assert_eq!(b.phi, PI);
        let c = sph(-1.0, -1e-3, 0.0);
        assert!(c.phi > -PI && c.phi < -3.0);
    }

    #[test]
    fn near_pole_azimuth_is_zero() {
        let p = sph(6.123233995736766e-17, -6.123233995736766e-17, -1.0);
        assert_eq!(p.phi, 0.0);
        assert_abs_diff_eq!(p.theta, PI, epsilon = 1e-15);
    }

    #[test]
    fn near_axis_polar_angle() {
        let p = sph(1e-9, 0.0, 1.0);
        assert_abs_diff_eq!(p.theta, 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(p.phi, 0.0);
    }

    #[test]
    fn tiny_vector_is_not_degenerate() {
        let p = sph(1e-11, 0.0, 0.0);
        assert_abs_diff_eq!(p.rho, 1e-11);
        assert_abs_diff_eq!(p.theta, FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(p.phi, 0.0);

        let q = sph(0.0, 3e-100, 0.0);
        assert_abs_diff_eq!(q.theta, FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(q.phi, FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn underflowing_norm_is_degenerate() {
        let err = cartesian_to_spherical(&Point3::new(1e-300, 1e-300, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::DegenerateRadius { .. })
        ));
    }

    #[test]
    fn origin_is_degenerate() {
        let err = cartesian_to_spherical(&Point3::origin()).unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::DegenerateRadius { .. })
        ));
    }

    #[test]
    fn non_finite_rejected() {
        let err = cartesian_to_spherical(&Point3::new(f64::NAN, 0.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::NonFinite { .. })
        ));
    }

    #[test]
    fn batch_fails_on_any_zero_vector() {
        let pts = [Point3::new(1.0, 0.0, 0.0), Point3::origin()];
        assert!(ToSpherical::new(&pts).execute().is_err());
    }

    #[test]
    fn batch_preserves_order() {
        let pts = [Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, -1.0, 0.0)];
        let out = ToSpherical::new(&pts).execute().unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].phi > 0.0);
        assert!(out[1].phi < 0.0);
    }
}
