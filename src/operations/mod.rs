pub mod conversion;
pub mod creation;
pub mod projection;
pub mod transform;
