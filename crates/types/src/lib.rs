pub mod geometry;
pub mod text;

pub use geometry::{Insets, Point, Rect, Size};
pub use text::{Font, TextAlign, VerticalAlign};
