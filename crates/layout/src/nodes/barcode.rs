use crate::LayoutError;
use crate::barcode::Code128C;
use crate::config::LayoutConfig;
use crate::element::{Element, placed_frame};
use taxsheet_traits::{Surface, TextMeasure};
use taxsheet_types::{Font, Insets, Point, Rect, TextAlign, VerticalAlign};

/// Draws a [`Code128C`] symbol, optionally with its digits underneath.
#[derive(Debug, Clone)]
pub struct BarcodeElement {
    code: Code128C,
    bar_height: f32,
    quiet_zone: f32,
    caption_size: Option<f32>,
    frame: Option<Rect>,
}

impl BarcodeElement {
    pub fn new(digits: &str, config: &LayoutConfig) -> Result<Self, LayoutError> {
        Ok(Self {
            code: Code128C::encode(digits)?,
            bar_height: config.barcode_height,
            quiet_zone: config.barcode_quiet_zone,
            caption_size: Some(config.label_font_size),
            frame: None,
        })
    }

    pub fn without_caption(mut self) -> Self {
        self.caption_size = None;
        self
    }

    pub fn code(&self) -> &Code128C {
        &self.code
    }

    fn caption_height(&self, metrics: &dyn TextMeasure) -> f32 {
        self.caption_size
            .map(|size| metrics.line_height(Font::Regular, size))
            .unwrap_or(0.0)
    }
}

impl Element for BarcodeElement {
    fn measure(&self, metrics: &dyn TextMeasure, _width: f32) -> Result<f32, LayoutError> {
        Ok(self.bar_height + self.caption_height(metrics))
    }

    fn place(
        &mut self,
        metrics: &dyn TextMeasure,
        origin: Point,
        width: f32,
    ) -> Result<f32, LayoutError> {
        let height = self.measure(metrics, width)?;
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
        let frame = placed_frame(self.frame, "barcode")?;
        let inner = frame.pad(Insets::x(self.quiet_zone));
        if inner.width <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "barcode needs more than {:.2}pt of width",
                frame.width
            )));
        }

        let modules = self.code.modules();
        let total: u32 = modules.iter().map(|w| *w as u32).sum();
        let scale = inner.width / total as f32;

        let mut x = inner.x;
        for (i, width) in modules.iter().enumerate() {
            let w = *width as f32 * scale;
            // even entries are bars, odd ones spaces
            if i % 2 == 0 {
                surface.fill_rect(Rect::new(x, inner.y, w, self.bar_height))?;
            }
            x += w;
        }

        if let Some(size) = self.caption_size {
            let caption = Rect::new(
                inner.x,
                inner.y + self.bar_height,
                inner.width,
                self.caption_height(surface.as_measure()),
            );
            surface.draw_text(
                self.code.digits(),
                caption,
                Font::Regular,
                size,
                TextAlign::Center,
                VerticalAlign::Top,
            )?;
        }
        Ok(())
    }
}
