use super::spec::TableSpec;
use crate::LayoutError;
use crate::algorithms::pagination::check_row_fit;
use crate::config::LayoutConfig;
use crate::text::wrap_lines;
use crate::util::{EPSILON, ensure_positive};
use itertools::{Itertools, izip};
use taxsheet_traits::Surface;
use taxsheet_types::{Font, Insets, Point, Rect, VerticalAlign};

#[derive(Debug, Clone, PartialEq)]
struct TableStyle {
    header_height: f32,
    header_font_size: f32,
    font_size: f32,
    cell_padding: Insets,
    column_line_width: f32,
    separator_dash: Vec<f32>,
    separator_line_width: f32,
}

impl From<&LayoutConfig> for TableStyle {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            header_height: config.table_header_height,
            header_font_size: config.table_header_font_size,
            font_size: config.table_font_size,
            cell_padding: config.cell_padding,
            column_line_width: config.column_line_width,
            separator_dash: config.separator_dash.clone(),
            separator_line_width: config.separator_line_width,
        }
    }
}

/// Rows of pre-formatted cell text under a [`TableSpec`].
#[derive(Debug, Clone)]
pub struct Table {
    spec: TableSpec,
    rows: Vec<Vec<String>>,
    style: TableStyle,
}

impl Table {
    /// Fails with `InvalidConfiguration` when a row's cell count differs from
    /// the column count.
    pub fn new(
        spec: TableSpec,
        rows: Vec<Vec<String>>,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        if let Some((index, row)) = rows.iter().find_position(|r| r.len() != spec.len()) {
            return Err(LayoutError::InvalidConfiguration(format!(
                "table row {} has {} cells but the table has {} columns",
                index,
                row.len(),
                spec.len()
            )));
        }
        Ok(Self {
            spec,
            rows,
            style: TableStyle::from(config),
        })
    }

    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_height(&self) -> f32 {
        self.style.header_height
    }

    /// Prints the header and as many rows as fit into `area`, starting at
    /// `start_row`, and returns the index of the first row left unprinted.
    ///
    /// Rows are never split. When `start_row` itself does not fit, nothing can
    /// ever print it and the call fails with `PaginationNoProgress`.
    pub fn print(
        &self,
        surface: &mut dyn Surface,
        area: Rect,
        start_row: usize,
    ) -> Result<usize, LayoutError> {
        ensure_positive(area, "table area")?;
        let style = &self.style;
        let widths = self.spec.resolve_widths(area.width);
        let columns = column_rects(area, &widths);

        if area.height + EPSILON < style.header_height {
            if start_row >= self.rows.len() {
                log::debug!("No rows left and no room for the table header, skipping it");
                return Ok(start_row);
            }
            return Err(LayoutError::PaginationNoProgress {
                row: start_row,
                available: area.height,
            });
        }

        for (column, rect) in self.spec.columns().iter().zip(&columns) {
            let header = rect
                .with_height(style.header_height)
                .pad(Insets::x(style.cell_padding.left));
            surface.draw_text(
                &column.header,
                header,
                Font::Bold,
                style.header_font_size,
                column.align,
                VerticalAlign::Middle,
            )?;
        }
        surface.stroke_rect(area.with_height(style.header_height), style.column_line_width)?;

        let body = area.cut_top(style.header_height);
        let line_height = surface.line_height(Font::Regular, style.font_size);
        let vertical_margin = style.cell_padding.vertical();

        let mut y = body.y;
        let mut row = start_row;
        let mut row_bottoms = Vec::new();
        while row < self.rows.len() {
            let cells: Vec<Vec<String>> = izip!(&self.rows[row], &widths)
                .map(|(text, width)| {
                    wrap_lines(
                        surface.as_measure(),
                        text,
                        Font::Regular,
                        style.font_size,
                        (width - style.cell_padding.horizontal()).max(0.0),
                    )
                })
                .collect();
            let required: Vec<f32> = cells
                .iter()
                .map(|lines| lines.len() as f32 * line_height)
                .collect();

            let fit = check_row_fit(y, &required, vertical_margin, line_height, body);
            log::trace!(
                "Table row {}: required {:?}, remaining {:.2}, fits: {}",
                row,
                required,
                fit.remaining_height,
                fit.fits
            );
            if !fit.fits {
                break;
            }

            for (lines, rect, column) in izip!(&cells, &columns, self.spec.columns()) {
                let x = rect.x + style.cell_padding.left;
                let width = (rect.width - style.cell_padding.horizontal()).max(0.0);
                for (i, line) in lines.iter().enumerate() {
                    let line_rect = Rect::new(
                        x,
                        y + style.cell_padding.top + i as f32 * line_height,
                        width,
                        line_height,
                    );
                    surface.draw_text(
                        line,
                        line_rect,
                        Font::Regular,
                        style.font_size,
                        column.align,
                        VerticalAlign::Top,
                    )?;
                }
            }

            let tallest = required.iter().copied().fold(0.0, f32::max);
            y += tallest.max(line_height) + vertical_margin;
            row_bottoms.push(y);
            row += 1;
        }

        if row == start_row && start_row < self.rows.len() {
            return Err(LayoutError::PaginationNoProgress {
                row: start_row,
                available: body.height,
            });
        }

        // separators go between printed rows, never under the last one
        if let Some((_, between)) = row_bottoms.split_last() {
            for sep in between {
                surface.draw_dashed_line(
                    Point::new(body.x, *sep),
                    Point::new(body.right(), *sep),
                    &style.separator_dash,
                    style.separator_line_width,
                )?;
            }
        }

        for rect in &columns {
            surface.stroke_rect(rect.with_height(y - area.y), style.column_line_width)?;
        }

        log::debug!(
            "Printed table rows {}..{} of {} into {:.2}pt",
            start_row,
            row,
            self.rows.len(),
            area.height
        );
        Ok(row)
    }
}

/// Full-height rects of each column, left to right; trimmed when stroked.
fn column_rects(area: Rect, widths: &[f32]) -> Vec<Rect> {
    let mut x = area.x;
    widths
        .iter()
        .map(|w| {
            let rect = Rect::new(x, area.y, *w, area.height);
            x += w;
            rect
        })
        .collect()
}
