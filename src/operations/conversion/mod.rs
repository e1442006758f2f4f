mod to_spherical;

pub use to_spherical::{cartesian_to_spherical, ToSpherical};
