use crate::LayoutError;
use crate::element::{Element, placed_frame};
use taxsheet_traits::{Surface, TextMeasure};
use taxsheet_types::{Point, Rect};

/// Children flow top to bottom; each one starts where the previous one ends.
#[derive(Debug, Default)]
pub struct VerticalStack {
    children: Vec<Box<dyn Element>>,
    frame: Option<Rect>,
}

impl VerticalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<E: Element + 'static>(&mut self, element: E) {
        self.children.push(Box::new(element));
    }

    pub fn with<E: Element + 'static>(mut self, element: E) -> Self {
        self.push(element);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }
}

impl Element for VerticalStack {
    fn measure(&self, metrics: &dyn TextMeasure, width: f32) -> Result<f32, LayoutError> {
        let mut total = 0.0;
        for child in &self.children {
            total += child.measure(metrics, width)?;
        }
        Ok(total)
    }

    fn place(
        &mut self,
        metrics: &dyn TextMeasure,
        origin: Point,
        width: f32,
    ) -> Result<f32, LayoutError> {
        let mut y = origin.y;
        for child in &mut self.children {
            y += child.place(metrics, Point::new(origin.x, y), width)?;
        }
        let height = y - origin.y;
        self.frame = Some(Rect::new(origin.x, origin.y, width, height));
        Ok(height)
    }

    fn stretch(&mut self, height: f32) {
        if let Some(frame) = &mut self.frame {
            frame.height = frame.height.max(height);
        }
    }

    fn frame(&self) -> Option<Rect> {
        self.frame
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), LayoutError> {
        placed_frame(self.frame, "vertical stack")?;
        for child in &self.children {
            child.draw(surface)?;
        }
        Ok(())
    }
}
