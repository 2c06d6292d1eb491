//! TextMeasure trait for abstracting font metrics.
//!
//! The layout engine never owns fonts. Every width or line height it needs is
//! asked from the backend through this trait, at the moment it is needed.

use taxsheet_types::Font;

/// Pure text metrics supplied by the drawing backend.
///
/// Implementations must be deterministic: the same arguments always give the
/// same answer. The engine does not cache results across calls.
pub trait TextMeasure {
    /// Advance width of `text` set in `font` at `size` points.
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32;

    /// Distance between two baselines for `font` at `size` points.
    fn line_height(&self, font: Font, size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32 {
        (**self).text_width(text, font, size)
    }

    fn line_height(&self, font: Font, size: f32) -> f32 {
        (**self).line_height(font, size)
    }
}
