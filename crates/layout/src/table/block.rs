use super::engine::Table;
use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::util::{EPSILON, ensure_positive};
use taxsheet_traits::Surface;
use taxsheet_types::{Font, Insets, Rect, TextAlign, VerticalAlign};

/// The bordered, captioned frame the items table is printed into.
///
/// Unlike a [`crate::Block`] it is drawn straight onto each page, because its
/// content differs from page to page.
#[derive(Debug, Clone)]
pub struct TableBlock {
    header: String,
    continued_label: String,
    table: Table,
    border_width: f32,
    header_height: f32,
    header_font_size: f32,
}

impl TableBlock {
    pub fn new(header: impl Into<String>, table: Table, config: &LayoutConfig) -> Self {
        Self {
            header: header.into(),
            continued_label: "(continued)".to_string(),
            table,
            border_width: config.block_border_width,
            header_height: config.block_header_height,
            header_font_size: config.block_header_font_size,
        }
    }

    /// Text appended to the header on every page after the first.
    pub fn with_continued_label(mut self, label: impl Into<String>) -> Self {
        self.continued_label = label.into();
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Height of the frame with both header bands and no rows.
    fn frame_height(&self) -> f32 {
        2.0 * self.border_width + self.header_height + self.table.header_height()
    }

    fn caption(&self, continued: bool) -> String {
        if continued && !self.continued_label.is_empty() {
            format!("{} {}", self.header, self.continued_label)
        } else {
            self.header.clone()
        }
    }

    /// Draws the frame into `rect` and prints rows from `start_row`.
    /// Returns the first row left for the next page.
    pub fn render_page(
        &self,
        surface: &mut dyn Surface,
        rect: Rect,
        start_row: usize,
        continued: bool,
    ) -> Result<usize, LayoutError> {
        ensure_positive(rect, "table block")?;
        if start_row >= self.table.row_count() && rect.height + EPSILON < self.frame_height() {
            log::debug!(
                "No rows left and only {:.2}pt for the table frame, skipping it",
                rect.height
            );
            return Ok(start_row);
        }
        surface.stroke_rect(rect, self.border_width)?;

        let inner = rect.pad(Insets::all(self.border_width));
        let band = inner.with_height(self.header_height);
        surface.stroke_rect(band, self.border_width)?;
        surface.draw_text(
            &self.caption(continued),
            band.pad(Insets::x(3.0)),
            Font::Bold,
            self.header_font_size,
            TextAlign::Left,
            VerticalAlign::Middle,
        )?;

        let area = inner.cut_top(self.header_height);
        if !area.has_positive_size() {
            return Err(LayoutError::PaginationNoProgress {
                row: start_row,
                available: 0.0,
            });
        }
        self.table.print(surface, area, start_row)
    }
}
