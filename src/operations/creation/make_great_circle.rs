use tracing::trace;

use crate::error::Result;
use crate::math::Point3;
use crate::operations::transform::{ApplyRotation, XRotation};

use super::SampleCircle;

/// Default number of samples for raw great circle coordinates.
pub const DEFAULT_GREAT_CIRCLE_SAMPLES: usize = 1000;

/// Creates a great circle on the unit sphere tilted about the X axis.
///
/// The equator (XY plane circle) is rotated by `angle_degrees` with
/// [`XRotation`]. At 0 degrees the result is the equator, at 90 degrees it is
/// the meridian through the poles in the XZ plane.
pub struct MakeGreatCircle {
    angle_degrees: f64,
    samples: usize,
}

impl MakeGreatCircle {
    /// Creates a new `MakeGreatCircle` operation with
    /// [`DEFAULT_GREAT_CIRCLE_SAMPLES`] samples.
    #[must_use]
    pub fn new(angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            samples: DEFAULT_GREAT_CIRCLE_SAMPLES,
        }
    }

    /// Sets the number of samples.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Executes the operation, returning the sampled 3D points in order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        let circle = SampleCircle::new(self.samples).execute()?;
        let rotation = XRotation::new(self.angle_degrees).execute();
        let points = ApplyRotation::new(rotation, &circle).execute();
        trace!(angle = self.angle_degrees, samples = self.samples, "great circle generated");
        Ok(points)
    }
}
