use crate::LayoutError;
use crate::cache::{BlockCache, RenderedBlock};
use crate::config::LayoutConfig;
use crate::element::Element;
use crate::nodes::{FlexibleLine, VerticalStack};
use crate::util::{ensure_positive, ensure_within};
use std::fmt;
use taxsheet_traits::{Surface, TextMeasure};
use taxsheet_types::{Font, Insets, Rect, Size, TextAlign, VerticalAlign};

/// Identifies a block across pages. Two blocks with the same id share one
/// rendered object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BlockStyle {
    border_width: f32,
    header_height: f32,
    header_font_size: f32,
}

/// A bordered, optionally captioned group of rows rendered once into a
/// reusable object.
///
/// The first [`Block::render`] draws the block and stores the object handle in
/// the [`BlockCache`]; every later call returns that handle without drawing.
/// Changes made to the block after its first render are not visible.
#[derive(Debug)]
pub struct Block {
    id: BlockId,
    header: Option<String>,
    width: f32,
    height: Option<f32>,
    content: VerticalStack,
    style: BlockStyle,
}

impl Block {
    pub fn new(id: impl Into<BlockId>, width: f32, config: &LayoutConfig) -> Self {
        Self {
            id: id.into(),
            header: None,
            width,
            height: None,
            content: VerticalStack::new(),
            style: BlockStyle {
                border_width: config.block_border_width,
                header_height: config.block_header_height,
                header_font_size: config.block_header_font_size,
            },
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Fixes the outer height instead of deriving it from the content.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn content(&self) -> &VerticalStack {
        &self.content
    }

    /// Appends a row of side-by-side elements.
    ///
    /// The row's widths are resolved against the inner width right away, so a
    /// count mismatch or an overfull width array fails here, before anything
    /// is drawn.
    pub fn add_row(&mut self, line: FlexibleLine) -> Result<(), LayoutError> {
        line.validate(self.inner_width()).map_err(|e| match e {
            LayoutError::InvalidConfiguration(msg) => {
                LayoutError::InvalidConfiguration(format!("block '{}': {}", self.id, msg))
            }
            other => other,
        })?;
        self.content.push(line);
        Ok(())
    }

    /// Appends a single element spanning the whole inner width.
    pub fn add_element<E: Element + 'static>(&mut self, element: E) {
        self.content.push(element);
    }

    fn header_band(&self) -> f32 {
        if self.header.is_some() {
            self.style.header_height
        } else {
            0.0
        }
    }

    fn inner_width(&self) -> f32 {
        (self.width - 2.0 * self.style.border_width).max(0.0)
    }

    /// The content area of a block of `size`, in object coordinates.
    pub fn inner_rect(&self, size: Size) -> Rect {
        let border = self.style.border_width;
        Rect::from_size(size)
            .pad(Insets::all(border))
            .cut_top(self.header_band())
    }

    /// Outer size: the fixed height when one was given, otherwise borders,
    /// header band and content.
    pub fn measure(&self, metrics: &dyn TextMeasure) -> Result<Size, LayoutError> {
        let height = match self.height {
            Some(height) => height,
            None => {
                let content = self.content.measure(metrics, self.inner_width())?;
                content + self.header_band() + 2.0 * self.style.border_width
            }
        };
        Ok(Size::new(self.width, height))
    }

    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        cache: &mut BlockCache,
    ) -> Result<RenderedBlock, LayoutError> {
        if let Some(rendered) = cache.lookup(&self.id) {
            return Ok(rendered);
        }

        let size = self.measure(surface.as_measure())?;
        let outer = Rect::from_size(size);
        ensure_positive(outer, &format!("block '{}'", self.id))?;
        let inner = self.inner_rect(size);

        let handle = surface.create_object(size)?;
        log::debug!(
            "Rendering block '{}' into object {} ({:.2} x {:.2})",
            self.id,
            handle.0,
            size.width,
            size.height
        );

        surface.stroke_rect(outer, self.style.border_width)?;
        if let Some(header) = &self.header {
            let band = Rect::from_size(size)
                .pad(Insets::all(self.style.border_width))
                .with_height(self.style.header_height);
            surface.stroke_rect(band, self.style.border_width)?;
            surface.draw_text(
                header,
                band.pad(Insets::x(3.0)),
                Font::Bold,
                self.style.header_font_size,
                TextAlign::Left,
                VerticalAlign::Middle,
            )?;
        }

        if !self.content.is_empty() {
            self.content
                .place(surface.as_measure(), inner.origin(), inner.width)?;
            if let Some(frame) = self.content.frame() {
                ensure_within(frame, inner, &format!("content of block '{}'", self.id))?;
            }
            self.content.draw(surface)?;
        }

        surface.finish_object(handle)?;
        let rendered = RenderedBlock { handle, size };
        cache.insert(self.id.clone(), rendered);
        Ok(rendered)
    }
}
