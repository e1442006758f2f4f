use crate::geometry::MapPoint;

/// Removes the +-180 degree longitude branch cut from an ordered sequence
/// of map points.
///
/// Whenever consecutive longitudes jump by more than 180 degrees, the
/// remaining points are shifted by a multiple of 360 so the sequence runs
/// continuously. The first point and every latitude are unchanged, so the
/// result may leave the `[-180, 180]` longitude range.
pub struct UnwrapLongitude<'a> {
    points: &'a [MapPoint],
}

impl<'a> UnwrapLongitude<'a> {
    /// Creates a new `UnwrapLongitude` operation.
    #[must_use]
    pub fn new(points: &'a [MapPoint]) -> Self {
        Self { points }
    }

    /// Executes the unwrapping.
    #[must_use]
    pub fn execute(&self) -> Vec<MapPoint> {
        let mut out = Vec::with_capacity(self.points.len());
        let mut offset = 0.0;
        let mut prev: Option<f64> = None;

        for p in self.points {
            if let Some(prev) = prev {
                let jump = p.longitude - prev;
                if jump > 180.0 {
                    offset -= 360.0 * ((jump + 180.0) / 360.0).floor();
                } else if jump < -180.0 {
                    offset += 360.0 * ((180.0 - jump) / 360.0).floor();
                }
            }
            prev = Some(p.longitude);
            out.push(MapPoint::new(p.longitude + offset, p.latitude));
        }
        out
    }
}
