use serde::{Deserialize, Serialize};
use taxsheet_types::{Insets, Size};

/// Every measurement the engine does not take from content.
///
/// All lengths are in points. Missing keys fall back to [`Default`] when the
/// config is deserialized, so a harness only needs to state what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_size: Size,
    pub page_margins: Insets,

    /// Stroke width of every block border.
    pub block_border_width: f32,
    /// Height of the band that holds a block header.
    pub block_header_height: f32,
    pub block_header_font_size: f32,

    /// Size of the small caption above each field value.
    pub label_font_size: f32,
    /// Nominal size of field values before any shrinking.
    pub value_font_size: f32,
    /// Shrinking a single-line value stops here; past this the value is truncated.
    pub floor_font_size: f32,
    /// Numeric values are never truncated and may shrink down to this size.
    pub numeric_min_font_size: f32,
    /// Subtracted from a computed shrink size so rounding never leaves it a hair too wide.
    pub shrink_epsilon: f32,
    pub field_padding: Insets,
    /// Stroke width of framed fields.
    pub field_line_width: f32,

    pub table_header_height: f32,
    pub table_header_font_size: f32,
    pub table_font_size: f32,
    /// Inner spacing of every table cell; its vertical part is the row margin.
    pub cell_padding: Insets,
    pub column_line_width: f32,
    /// Dash/gap lengths of the separators drawn between table rows.
    pub separator_dash: Vec<f32>,
    pub separator_line_width: f32,

    pub barcode_height: f32,
    /// Blank space left and right of the bars, in points.
    pub barcode_quiet_zone: f32,

    /// When set, each page gets "<label> <n>" in its bottom margin.
    pub page_number_label: Option<String>,
    pub page_number_font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: Size::a4(),
            page_margins: Insets::all(28.0),
            block_border_width: 0.8,
            block_header_height: 11.0,
            block_header_font_size: 7.0,
            label_font_size: 5.5,
            value_font_size: 9.0,
            floor_font_size: 6.0,
            numeric_min_font_size: 3.0,
            shrink_epsilon: 0.05,
            field_padding: Insets::new(1.5, 3.0, 2.0, 3.0),
            field_line_width: 0.3,
            table_header_height: 14.0,
            table_header_font_size: 7.0,
            table_font_size: 8.0,
            cell_padding: Insets::new(2.0, 3.0, 2.0, 3.0),
            column_line_width: 0.5,
            separator_dash: vec![1.0, 1.5],
            separator_line_width: 0.3,
            barcode_height: 26.0,
            barcode_quiet_zone: 6.0,
            page_number_label: Some("Page".to_string()),
            page_number_font_size: 7.0,
        }
    }
}

impl LayoutConfig {
    /// Width of the page area inside the margins.
    pub fn content_width(&self) -> f32 {
        self.page_size.width - self.page_margins.horizontal()
    }
}
