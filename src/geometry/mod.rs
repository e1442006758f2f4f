mod curve;
mod map_point;
mod spherical;

pub use curve::Curve;
pub use map_point::{MapPoint, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use spherical::SphericalPoint;

/// A point in 3D Cartesian space.
pub type CartesianPoint = crate::math::Point3;
