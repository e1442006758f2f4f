pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;

pub use error::{GreatCircleError, Result};
pub use geometry::{Curve, MapPoint, SphericalPoint};
pub use pipeline::{
    project_great_circle, project_many, reference_angles, ProjectGreatCircle, ProjectMany,
    ProjectionParams,
};
