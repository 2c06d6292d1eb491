use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::element::{Element, placed_frame};
use crate::text::{fit_single_line, shrink_to_fit, wrap_lines};
use taxsheet_traits::{Surface, TextMeasure};
use taxsheet_types::{Font, Insets, Point, Rect, TextAlign, VerticalAlign};

/// How a field's value is rendered into its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldContent {
    /// One line; shrinks to fit, truncates with an ellipsis below the floor size.
    #[default]
    SingleLine,
    /// Word-wrapped; the field grows to hold every line.
    Wrapped,
    /// One line of pre-formatted digits; shrinks but is never truncated.
    Numeric,
}

/// The parts of [`LayoutConfig`] a field reads, copied at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub label_font_size: f32,
    pub floor_font_size: f32,
    pub numeric_min_font_size: f32,
    pub shrink_epsilon: f32,
    pub padding: Insets,
    pub line_width: f32,
}

impl From<&LayoutConfig> for FieldStyle {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            label_font_size: config.label_font_size,
            floor_font_size: config.floor_font_size,
            numeric_min_font_size: config.numeric_min_font_size,
            shrink_epsilon: config.shrink_epsilon,
            padding: config.field_padding,
            line_width: config.field_line_width,
        }
    }
}

/// A captioned value box: a small header line with the value below it.
#[derive(Debug, Clone)]
pub struct Field {
    header: String,
    value: String,
    align: TextAlign,
    font_size: f32,
    bold: bool,
    content: FieldContent,
    framed: bool,
    min_height: f32,
    style: FieldStyle,
    frame: Option<Rect>,
}

impl Field {
    pub fn new(header: impl Into<String>, value: impl Into<String>, config: &LayoutConfig) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
            align: TextAlign::Left,
            font_size: config.value_font_size,
            bold: false,
            content: FieldContent::SingleLine,
            framed: true,
            min_height: 0.0,
            style: FieldStyle::from(config),
            frame: None,
        }
    }

    /// A value without a caption.
    pub fn value_only(value: impl Into<String>, config: &LayoutConfig) -> Self {
        Self::new("", value, config)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn wrapped(mut self) -> Self {
        self.content = FieldContent::Wrapped;
        self
    }

    /// Numeric content, right-aligned.
    pub fn numeric(mut self) -> Self {
        self.content = FieldContent::Numeric;
        self.align = TextAlign::Right;
        self
    }

    pub fn framed(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }

    /// Assigned height; the field is never shorter than this.
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn content(&self) -> FieldContent {
        self.content
    }

    fn font(&self) -> Font {
        Font::from_bold(self.bold)
    }

    fn header_height(&self, metrics: &dyn TextMeasure) -> f32 {
        if self.header.is_empty() {
            0.0
        } else {
            metrics.line_height(Font::Regular, self.style.label_font_size)
        }
    }

    fn content_width(&self, width: f32) -> f32 {
        (width - self.style.padding.horizontal()).max(0.0)
    }

    fn value_lines(&self, metrics: &dyn TextMeasure, width: f32) -> Vec<String> {
        wrap_lines(
            metrics,
            &self.value,
            self.font(),
            self.font_size,
            self.content_width(width),
        )
    }

    /// Content height without the assigned minimum.
    pub fn intrinsic_height(&self, metrics: &dyn TextMeasure, width: f32) -> f32 {
        let line_height = metrics.line_height(self.font(), self.font_size);
        let value_height = match self.content {
            FieldContent::SingleLine | FieldContent::Numeric => line_height,
            FieldContent::Wrapped => {
                self.value_lines(metrics, width).len().max(1) as f32 * line_height
            }
        };
        self.style.padding.vertical() + self.header_height(metrics) + value_height
    }

    fn draw_single_line(
        &self,
        surface: &mut dyn Surface,
        rect: Rect,
    ) -> Result<(), LayoutError> {
        let fitted = fit_single_line(
            surface.as_measure(),
            &self.value,
            self.font(),
            self.font_size,
            self.style.floor_font_size,
            self.style.shrink_epsilon,
            rect.width,
        );
        if fitted.truncated {
            log::warn!(
                "Field '{}': value '{}' truncated to '{}' at {:.2}pt",
                self.header,
                self.value,
                fitted.text,
                fitted.size
            );
        }
        if fitted.text.is_empty() {
            return Ok(());
        }
        surface.draw_text(
            &fitted.text,
            rect,
            self.font(),
            fitted.size,
            self.align,
            VerticalAlign::Top,
        )?;
        Ok(())
    }

    fn draw_numeric(&self, surface: &mut dyn Surface, rect: Rect) -> Result<(), LayoutError> {
        let size = shrink_to_fit(
            surface.as_measure(),
            &self.value,
            self.font(),
            self.font_size,
            self.style.numeric_min_font_size,
            self.style.shrink_epsilon,
            rect.width,
        );
        if surface.text_width(&self.value, self.font(), size) > rect.width {
            log::warn!(
                "Field '{}': numeric value '{}' still overflows at {:.2}pt",
                self.header,
                self.value,
                size
            );
        }
        surface.draw_text(
            &self.value,
            rect,
            self.font(),
            size,
            self.align,
            VerticalAlign::Top,
        )?;
        Ok(())
    }

    fn draw_wrapped(&self, surface: &mut dyn Surface, rect: Rect) -> Result<(), LayoutError> {
        let font = self.font();
        let line_height = surface.line_height(font, self.font_size);
        let lines = wrap_lines(
            surface.as_measure(),
            &self.value,
            font,
            self.font_size,
            rect.width,
        );
        for (i, line) in lines.iter().enumerate() {
            let line_rect = Rect::new(
                rect.x,
                rect.y + i as f32 * line_height,
                rect.width,
                line_height,
            );
            surface.draw_text(
                line,
                line_rect,
                font,
                self.font_size,
                self.align,
                VerticalAlign::Top,
            )?;
        }
        Ok(())
    }
}

impl Element for Field {
    fn measure(&self, metrics: &dyn TextMeasure, width: f32) -> Result<f32, LayoutError> {
        Ok(self.intrinsic_height(metrics, width).max(self.min_height))
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
        let frame = placed_frame(self.frame, "field")?;
        if self.framed {
            surface.stroke_rect(frame, self.style.line_width)?;
        }

        let inner = frame.pad(self.style.padding);
        let header_height = self.header_height(surface.as_measure());
        if header_height > 0.0 {
            surface.draw_text(
                &self.header,
                inner.with_height(header_height),
                Font::Regular,
                self.style.label_font_size,
                TextAlign::Left,
                VerticalAlign::Top,
            )?;
        }

        if self.value.is_empty() {
            return Ok(());
        }
        let value_rect = inner.cut_top(header_height);
        match self.content {
            FieldContent::SingleLine => self.draw_single_line(surface, value_rect),
            FieldContent::Numeric => self.draw_numeric(surface, value_rect),
            FieldContent::Wrapped => self.draw_wrapped(surface, value_rect),
        }
    }
}
