use super::MapPoint;

/// An ordered sequence of map points tracing one projected great circle.
///
/// Order defines the drawing order. Curves built by the pipeline repeat
/// their first point at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<MapPoint>,
}

impl Curve {
    /// Creates a curve from its ordered points.
    #[must_use]
    pub fn new(points: Vec<MapPoint>) -> Self {
        Self { points }
    }

    /// Returns the ordered points.
    #[must_use]
    pub fn points(&self) -> &[MapPoint] {
        &self.points
    }

    /// Consumes the curve, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<MapPoint> {
        self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&MapPoint> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&MapPoint> {
        self.points.last()
    }

    /// Longitudes in drawing order.
    pub fn longitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.longitude)
    }

    /// Latitudes in drawing order.
    pub fn latitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.latitude)
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, MapPoint> {
        self.points.iter()
    }

    /// Returns whether the first and last points coincide within `tolerance`
    /// degrees. An empty curve is not closed.
    #[must_use]
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => a.approx_eq(b, tolerance),
            _ => false,
        }
    }
}

impl From<Vec<MapPoint>> for Curve {
    fn from(points: Vec<MapPoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a MapPoint;
    type IntoIter = std::slice::Iter<'a, MapPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Curve {
    type Item = MapPoint;
    type IntoIter = std::vec::IntoIter<MapPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(points: &[(f64, f64)]) -> Curve {
        points.iter().map(|&(lon, lat)| MapPoint::new(lon, lat)).collect::<Vec<_>>().into()
    }

    #[test]
    fn empty_curve_is_not_closed() {
        assert!(!Curve::default().is_closed(1e-6));
        assert!(Curve::default().is_empty());
    }

    #[test]
    fn closed_across_antimeridian() {
        let c = curve(&[(-180.0, 0.0), (0.0, 45.0), (180.0, 0.0)]);
        assert!(c.is_closed(1e-9));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn open_curve() {
        let c = curve(&[(0.0, 0.0), (90.0, 0.0)]);
        assert!(!c.is_closed(1e-6));
    }

    #[test]
    fn column_accessors_preserve_order() {
        let c = curve(&[(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(c.longitudes().collect::<Vec<_>>(), vec![1.0, 3.0]);
        assert_eq!(c.latitudes().collect::<Vec<_>>(), vec![2.0, 4.0]);
        assert_eq!((&c).into_iter().count(), 2);
    }
}
