pub mod measure;
pub mod surface;

pub use measure::TextMeasure;
pub use surface::{ObjectHandle, Surface, SurfaceError};
