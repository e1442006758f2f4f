//! End-to-end projection of tilted great circles onto an equirectangular map.
//!
//! Each angle runs through the same chain of operations:
//!
//! ```text
//! SampleCircle -> XRotation/ApplyRotation -> ToSpherical -> ProjectEquirectangular
//! ```
//!
//! Angles are independent of each other, so [`ProjectMany`] can evaluate
//! them on the rayon thread pool without changing the result.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::Curve;
use crate::operations::conversion::ToSpherical;
use crate::operations::creation::{validate_sample_count, MakeGreatCircle};
use crate::operations::projection::{ProjectEquirectangular, UnwrapLongitude};

/// Default number of samples per projected curve.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Parameters controlling curve projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionParams {
    /// Number of points per curve (at least 2).
    pub sample_count: usize,
    /// Remove the +-180 degree longitude branch cut from each curve.
    pub unwrap_longitude: bool,
    /// Evaluate angles in parallel.
    pub parallel: bool,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            unwrap_longitude: false,
            parallel: false,
        }
    }
}

impl ProjectionParams {
    /// Creates parameters with the given sample count and default options.
    #[must_use]
    pub fn with_sample_count(sample_count: usize) -> Self {
        Self {
            sample_count,
            ..Self::default()
        }
    }
}

/// Projects one tilted great circle onto the equirectangular map.
pub struct ProjectGreatCircle {
    angle_degrees: f64,
    params: ProjectionParams,
}

impl ProjectGreatCircle {
    /// Creates a new `ProjectGreatCircle` operation.
    #[must_use]
    pub fn new(angle_degrees: f64, params: ProjectionParams) -> Self {
        Self {
            angle_degrees,
            params,
        }
    }

    /// Executes the projection, returning `sample_count` map points.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_count < 2`.
    pub fn execute(&self) -> Result<Curve> {
        let points = MakeGreatCircle::new(self.angle_degrees)
            .with_samples(self.params.sample_count)
            .execute()?;
        let spherical = ToSpherical::new(&points).execute()?;
        let mut map_points = ProjectEquirectangular::new(&spherical).execute();
        if self.params.unwrap_longitude {
            map_points = UnwrapLongitude::new(&map_points).execute();
        }
        trace!(angle = self.angle_degrees, points = map_points.len(), "curve projected");
        Ok(Curve::new(map_points))
    }
}

/// Projects a batch of tilted great circles, one curve per angle.
///
/// Output order follows the input angles.
pub struct ProjectMany {
    angles: Vec<f64>,
    params: ProjectionParams,
}

impl ProjectMany {
    /// Creates a new `ProjectMany` operation.
    #[must_use]
    pub fn new(angles: impl Into<Vec<f64>>, params: ProjectionParams) -> Self {
        Self {
            angles: angles.into(),
            params,
        }
    }

    /// Executes the batch.
    ///
    /// The sample count is validated before any curve is computed, so an
    /// invalid count never yields partial output.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_count < 2`.
    pub fn execute(&self) -> Result<Vec<(f64, Curve)>> {
        validate_sample_count(self.params.sample_count)?;
        debug!(
            angles = self.angles.len(),
            samples = self.params.sample_count,
            parallel = self.params.parallel,
            "projecting great circles"
        );

        let project = |&angle: &f64| -> Result<(f64, Curve)> {
            let curve = ProjectGreatCircle::new(angle, self.params).execute()?;
            Ok((angle, curve))
        };

        let curves = if self.params.parallel {
            self.angles.par_iter().map(project).collect::<Result<Vec<_>>>()?
        } else {
            self.angles.iter().map(project).collect::<Result<Vec<_>>>()?
        };

        debug!(curves = curves.len(), "great circles projected");
        Ok(curves)
    }
}

/// Projects the great circle tilted by `angle_degrees` using `sample_count`
/// points.
///
/// # Errors
///
/// Returns an error if `sample_count < 2`.
pub fn project_great_circle(angle_degrees: f64, sample_count: usize) -> Result<Curve> {
    ProjectGreatCircle::new(angle_degrees, ProjectionParams::with_sample_count(sample_count))
        .execute()
}

/// Projects one great circle per angle, preserving the order of `angles`.
///
/// # Errors
///
/// Returns an error if `sample_count < 2`.
pub fn project_many(angles: &[f64], sample_count: usize) -> Result<Vec<(f64, Curve)>> {
    ProjectMany::new(angles, ProjectionParams::with_sample_count(sample_count)).execute()
}

/// The tilt angles of the classic reference chart, in ascending order.
///
/// Every 15 degrees from 0 to 90, plus 85 and 89 to show how the curve
/// approaches the polar meridian.
#[must_use]
pub fn reference_angles() -> Vec<f64> {
    let mut angles: Vec<f64> = (0..=90).step_by(15).map(f64::from).collect();
    angles.extend([85.0, 89.0]);
    angles.sort_by(f64::total_cmp);
    angles
}
