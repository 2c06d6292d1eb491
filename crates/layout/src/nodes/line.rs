use crate::LayoutError;
use crate::algorithms::distribute::{Span, distribute};
use crate::element::{Element, placed_frame};
use taxsheet_traits::{Surface, TextMeasure};
use taxsheet_types::{Point, Rect};

/// A row of elements side by side.
///
/// Each child gets the width its [`Span`] resolves to; `Span::Fill` entries
/// share what the fixed ones leave. All children are stretched to the height
/// of the tallest one so their frames line up.
#[derive(Debug)]
pub struct FlexibleLine {
    spans: Vec<Span>,
    children: Vec<Box<dyn Element>>,
    frame: Option<Rect>,
}

impl FlexibleLine {
    pub fn new(spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            spans: spans.into_iter().collect(),
            children: Vec::new(),
            frame: None,
        }
    }

    /// A row where every child gets an equal share.
    pub fn equal(count: usize) -> Self {
        Self::new(std::iter::repeat_n(Span::Fill, count))
    }

    pub fn push<E: Element + 'static>(&mut self, element: E) {
        self.children.push(Box::new(element));
    }

    pub fn with<E: Element + 'static>(mut self, element: E) -> Self {
        self.push(element);
        self
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    /// Checks the row can be laid out at `width` without drawing anything.
    pub fn validate(&self, width: f32) -> Result<(), LayoutError> {
        self.resolve_widths(width).map(|_| ())
    }

    pub fn resolve_widths(&self, width: f32) -> Result<Vec<f32>, LayoutError> {
        if self.spans.len() != self.children.len() {
            return Err(LayoutError::InvalidConfiguration(format!(
                "row has {} elements but {} widths",
                self.children.len(),
                self.spans.len()
            )));
        }
        distribute(&self.spans, width)
    }
}

impl Element for FlexibleLine {
    fn measure(&self, metrics: &dyn TextMeasure, width: f32) -> Result<f32, LayoutError> {
        let widths = self.resolve_widths(width)?;
        let mut height: f32 = 0.0;
        for (child, w) in self.children.iter().zip(widths) {
            height = height.max(child.measure(metrics, w)?);
        }
        Ok(height)
    }

    fn place(
        &mut self,
        metrics: &dyn TextMeasure,
        origin: Point,
        width: f32,
    ) -> Result<f32, LayoutError> {
        let widths = self.resolve_widths(width)?;
        let mut x = origin.x;
        let mut height: f32 = 0.0;
        for (child, w) in self.children.iter_mut().zip(widths) {
            height = height.max(child.place(metrics, Point::new(x, origin.y), w)?);
            x += w;
        }
        for child in &mut self.children {
            child.stretch(height);
        }
        self.frame = Some(Rect::new(origin.x, origin.y, width, height));
        Ok(height)
    }

    fn stretch(&mut self, height: f32) {
        if let Some(frame) = &mut self.frame {
            frame.height = frame.height.max(height);
            for child in &mut self.children {
                child.stretch(frame.height);
            }
        }
    }

    fn frame(&self) -> Option<Rect> {
        self.frame
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), LayoutError> {
        placed_frame(self.frame, "flexible line")?;
        for child in &self.children {
            child.draw(surface)?;
        }
        Ok(())
    }
}
