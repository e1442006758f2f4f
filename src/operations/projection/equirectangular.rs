use crate::geometry::{MapPoint, SphericalPoint};

/// Projects spherical points onto an equirectangular map.
///
/// `longitude = deg(phi)`, `latitude = deg(theta) - 90`.
///
/// The radius is ignored. Longitude keeps the azimuth's branch cut at
/// +-180 degrees; use [`UnwrapLongitude`](super::UnwrapLongitude) to remove it.
pub struct ProjectEquirectangular<'a> {
    points: &'a [SphericalPoint],
}

impl<'a> ProjectEquirectangular<'a> {
    /// Creates a new `ProjectEquirectangular` operation.
    #[must_use]
    pub fn new(points: &'a [SphericalPoint]) -> Self {
        Self { points }
    }

    /// Executes the projection, returning one map point per input point.
    #[must_use]
    pub fn execute(&self) -> Vec<MapPoint> {
        self.points.iter().map(project_point).collect()
    }
}

/// Projects a single spherical point.
#[must_use]
pub fn project_point(point: &SphericalPoint) -> MapPoint {
    MapPoint::new(point.phi.to_degrees(), point.theta.to_degrees() - 90.0)
}
