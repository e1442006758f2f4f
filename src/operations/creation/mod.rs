mod make_great_circle;
mod sample_circle;

pub use make_great_circle::{MakeGreatCircle, DEFAULT_GREAT_CIRCLE_SAMPLES};
pub use sample_circle::{validate_sample_count, SampleCircle, MIN_SAMPLES};
