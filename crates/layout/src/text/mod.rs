//! Text measurement helpers built on the backend's `TextMeasure`.

pub mod fit;
pub mod wrap;

pub use fit::{ELLIPSIS, FittedText, fit_single_line, shrink_to_fit, truncate_with_ellipsis};
pub use wrap::wrap_lines;
