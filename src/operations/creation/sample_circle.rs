use std::f64::consts::PI;

use crate::error::{Result, SamplingError};
use crate::math::{linspace, Point3};

/// Minimum number of samples that still describes a closed curve.
pub const MIN_SAMPLES: usize = 2;

/// Checks that `samples` is large enough to describe a closed curve.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidSampleCount`] if `samples < MIN_SAMPLES`.
pub fn validate_sample_count(samples: usize) -> Result<()> {
    if samples < MIN_SAMPLES {
        return Err(SamplingError::InvalidSampleCount {
            count: samples,
            min: MIN_SAMPLES,
        }
        .into());
    }
    Ok(())
}

/// Samples the unit circle in the XY plane.
///
/// The parameter `t` runs over the closed interval `[-pi, pi]`, so the
/// last sample repeats the first and the sampled curve is closed.
///
/// `P(t) = (cos(t), sin(t), 0)`
pub struct SampleCircle {
    samples: usize,
}

impl SampleCircle {
    /// Creates a new `SampleCircle` operation.
    #[must_use]
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Executes the sampling, returning `samples` points on the unit circle.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than [`MIN_SAMPLES`] samples are requested.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        validate_sample_count(self.samples)?;
        Ok(linspace(-PI, PI, self.samples)
            .into_iter()
            .map(|t| {
                let (y, x) = t.sin_cos();
                Point3::new(x, y, 0.0)
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GreatCircleError;

    #[test]
    fn five_samples_hit_quadrants() {
        let pts = SampleCircle::new(5).execute().unwrap();
        let expected = [
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
        ];
        for (p, e) in pts.iter().zip(expected) {
            assert_abs_diff_eq!(*p, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn points_lie_on_unit_circle() {
        for p in SampleCircle::new(97).execute().unwrap() {
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn last_sample_repeats_first() {
        let pts = SampleCircle::new(10).execute().unwrap();
        assert_abs_diff_eq!(pts[0], pts[9], epsilon = 1e-12);
    }

    #[test]
    fn two_samples_is_minimum() {
        assert_eq!(SampleCircle::new(2).execute().unwrap().len(), 2);
    }

    #[test]
    fn rejects_too_few_samples() {
        for n in [0, 1] {
            let err = SampleCircle::new(n).execute().unwrap_err();
            assert!(matches!(
                err,
                GreatCircleError::Sampling(SamplingError::InvalidSampleCount { count, min: 2 }) if count == n
            ));
        }
    }
}
