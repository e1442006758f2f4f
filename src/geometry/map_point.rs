use crate::math::Point2;

/// Longitude bounds of an equirectangular map, in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Latitude bounds of an equirectangular map, in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// A point on an equirectangular map, in degrees.
///
/// `longitude` lies in `(-180, 180]` and `latitude` in `[-90, 90]` for any
/// point produced by [`ProjectEquirectangular`](crate::operations::projection::ProjectEquirectangular).
/// Unwrapped curves may carry longitudes outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    /// Horizontal map coordinate.
    pub longitude: f64,
    /// Vertical map coordinate.
    pub latitude: f64,
}

impl MapPoint {
    /// Creates a new map point.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns the point as plot coordinates (`x` = longitude, `y` = latitude).
    #[must_use]
    pub fn to_point2(self) -> Point2 {
        Point2::new(self.longitude, self.latitude)
    }

    /// Returns whether two map points coincide within `tolerance` degrees.
    ///
    /// Longitudes are compared modulo 360, so `-180` and `180` are the same
    /// meridian.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let dlon = (self.longitude - other.longitude).rem_euclid(360.0);
        let dlon = dlon.min(360.0 - dlon);
        dlon <= tolerance && (self.latitude - other.latitude).abs() <= tolerance
    }
}

impl From<MapPoint> for (f64, f64) {
    fn from(p: MapPoint) -> Self {
        (p.longitude, p.latitude)
    }
}
