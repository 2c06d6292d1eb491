//! Surface trait for abstracting the graphics backend.
//!
//! This trait is the whole contract between the layout engine and whatever
//! finally produces the document (a PDF writer, a rasterizer, or the
//! in-memory display list used by tests).

use crate::measure::TextMeasure;
use taxsheet_types::{Font, Point, Rect, Size, TextAlign, VerticalAlign};
use thiserror::Error;

/// Error type for backend drawing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("No page is open; call begin_page before drawing")]
    NoOpenPage,

    #[error("Unknown reusable object #{0}")]
    UnknownObject(u32),

    #[error("Reusable object #{0} is still being recorded")]
    ObjectNotFinished(u32),

    #[error("Cannot finish object #{expected}: object #{found} is the one being recorded")]
    ObjectMismatch { expected: u32, found: u32 },

    #[error("Backend failure: {0}")]
    Backend(String),
}

/// Opaque handle to a reusable drawing object (a PDF form XObject, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub u32);

/// A drawing target.
///
/// Drawing goes to the current page, unless a reusable object is being
/// recorded: between [`Surface::create_object`] and [`Surface::finish_object`]
/// every call lands in that object, in object-local coordinates.
///
/// # Example
///
/// ```ignore
/// surface.begin_page(Size::a4())?;
/// let logo = surface.create_object(Size::new(100.0, 40.0))?;
/// surface.stroke_rect(Rect::new(0.0, 0.0, 100.0, 40.0), 1.0)?;
/// surface.finish_object(logo)?;
/// surface.embed_object(logo, Rect::new(20.0, 20.0, 100.0, 40.0))?;
/// ```
pub trait Surface: TextMeasure {
    /// This surface viewed as its measurement half. Implementations return `self`.
    fn as_measure(&self) -> &dyn TextMeasure;

    /// Starts a new page; all following page-level drawing goes there.
    fn begin_page(&mut self, size: Size) -> Result<(), SurfaceError>;

    /// Draws a single line of text aligned inside `rect`.
    fn draw_text(
        &mut self,
        text: &str,
        rect: Rect,
        font: Font,
        size: f32,
        align: TextAlign,
        valign: VerticalAlign,
    ) -> Result<(), SurfaceError>;

    fn stroke_rect(&mut self, rect: Rect, line_width: f32) -> Result<(), SurfaceError>;

    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Draws a dashed line; `pattern` alternates dash and gap lengths.
    fn draw_dashed_line(
        &mut self,
        from: Point,
        to: Point,
        pattern: &[f32],
        line_width: f32,
    ) -> Result<(), SurfaceError>;

    /// Opens a reusable object of `size` and redirects drawing into it.
    fn create_object(&mut self, size: Size) -> Result<ObjectHandle, SurfaceError>;

    /// Closes the object opened by [`Surface::create_object`].
    fn finish_object(&mut self, handle: ObjectHandle) -> Result<(), SurfaceError>;

    /// Places a finished object on the current page, scaled into `rect`.
    fn embed_object(&mut self, handle: ObjectHandle, rect: Rect) -> Result<(), SurfaceError>;
}
