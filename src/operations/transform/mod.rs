mod apply_rotation;
mod x_rotation;

pub use apply_rotation::ApplyRotation;
pub use x_rotation::XRotation;
