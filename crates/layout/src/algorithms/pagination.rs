use crate::util::EPSILON;
use taxsheet_types::Rect;

pub struct RowFit {
    pub fits: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a table row fits below the cursor.
///
/// * `cursor_y`: absolute y where the row would start.
/// * `required`: the wrapped content height of each cell in the row.
/// * `vertical_margin`: cell padding added above and below the content.
/// * `line_height`: height of a single text line in the body font.
/// * `bounds`: the area the table is printed into.
///
/// A row fits when every cell plus its margin fits the remaining height, the
/// cursor has not reached the bottom, and at least one line is left. A cell
/// always takes at least one line, so empty rows are tested at the height
/// they advance the cursor by.
pub fn check_row_fit(
    cursor_y: f32,
    required: &[f32],
    vertical_margin: f32,
    line_height: f32,
    bounds: Rect,
) -> RowFit {
    let remaining = bounds.bottom() - cursor_y;
    let fits = cursor_y < bounds.bottom() - EPSILON
        && remaining + EPSILON >= line_height
        && required
            .iter()
            .all(|height| height.max(line_height) + vertical_margin <= remaining + EPSILON);
    RowFit {
        fits,
        remaining_height: remaining.max(0.0),
    }
}
