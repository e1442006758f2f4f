mod equirectangular;
mod unwrap;

pub use equirectangular::{project_point, ProjectEquirectangular};
pub use unwrap::UnwrapLongitude;
