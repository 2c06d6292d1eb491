use crate::LayoutError;
use std::fmt::Debug;
use taxsheet_traits::{Surface, TextMeasure};
use taxsheet_types::{Point, Rect};

/// A node of the layout tree.
///
/// Layout runs in two steps. Width is assigned top-down by [`Element::place`],
/// which returns the height the element ended up with; heights are therefore
/// computed bottom-up. A parent may afterwards [`Element::stretch`] a child to
/// a taller assigned height. [`Element::draw`] only emits draw calls for the
/// placed frame, so drawing a placed tree twice produces the same output.
pub trait Element: Debug {
    /// Height this element needs when given `width`.
    fn measure(&self, metrics: &dyn TextMeasure, width: f32) -> Result<f32, LayoutError>;

    /// Fixes the element's origin and width and returns its height.
    fn place(
        &mut self,
        metrics: &dyn TextMeasure,
        origin: Point,
        width: f32,
    ) -> Result<f32, LayoutError>;

    /// Grows the placed frame to at least `height`. Never shrinks it.
    fn stretch(&mut self, height: f32);

    /// The placed frame, or `None` before [`Element::place`] ran.
    fn frame(&self) -> Option<Rect>;

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), LayoutError>;
}

/// The placed frame of `element`, or an error naming it when it was never placed.
pub(crate) fn placed_frame(frame: Option<Rect>, what: &str) -> Result<Rect, LayoutError> {
    frame.ok_or_else(|| {
        LayoutError::InvalidGeometry(format!("{} was drawn before it was placed", what))
    })
}
