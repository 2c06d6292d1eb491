use crate::LayoutConfig;
use crate::table::{Column, Table, TableBlock, TableSpec};
use taxsheet_render_core::{DisplayList, MonospaceMetrics};
use taxsheet_types::{Insets, Size};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A display list with exact monospace metrics: at size 8 a line is 10pt
/// tall and each character 4pt wide.
pub fn test_surface() -> DisplayList<MonospaceMetrics> {
    DisplayList::new(MonospaceMetrics::default())
}

/// Defaults with a small page and no page number, so geometry is easy to
/// compute by hand.
pub fn test_config() -> LayoutConfig {
    LayoutConfig {
        page_size: Size::new(300.0, 400.0),
        page_margins: Insets::all(10.0),
        block_border_width: 1.0,
        block_header_height: 12.0,
        table_header_height: 14.0,
        table_font_size: 8.0,
        cell_padding: Insets::new(2.0, 3.0, 2.0, 3.0),
        page_number_label: None,
        ..LayoutConfig::default()
    }
}

/// `count` rows of two short, single-line cells.
pub fn simple_rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| vec![format!("{}", i + 1), format!("item {}", i + 1)])
        .collect()
}

pub fn two_column_spec() -> TableSpec {
    TableSpec::new(vec![Column::fixed("No.", 0.2), Column::flexible("Description")])
        .unwrap()
}

pub fn simple_table(rows: usize, config: &LayoutConfig) -> Table {
    Table::new(two_column_spec(), simple_rows(rows), config).unwrap()
}

pub fn simple_table_block(rows: usize, config: &LayoutConfig) -> TableBlock {
    TableBlock::new("Items", simple_table(rows, config), config)
}
