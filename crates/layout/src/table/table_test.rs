#![cfg(test)]

use crate::test_utils::{
    init_logger, simple_rows, simple_table, test_config, test_surface, two_column_spec,
};
use crate::{Column, LayoutError, Table, TableBlock, TableSpec};
use taxsheet_render_core::DrawCommand;
use taxsheet_traits::Surface;
use taxsheet_types::{Rect, Size, TextAlign};

// 14pt header band and room for exactly five 14pt rows (10pt line + 4pt margin).
const AREA: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 200.0,
    height: 84.0,
};

fn dashed_lines(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::DashedLine { .. }))
        .count()
}

#[test]
fn all_rows_that_fit_are_printed() {
    init_logger();
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    let table = simple_table(3, &config);
    let next = table.print(&mut surface, AREA, 0).unwrap();
    assert_eq!(next, 3);

    let page = &surface.pages()[0];
    // separators only between rows
    assert_eq!(dashed_lines(&page.commands), 2);
    assert!(surface.page_contains_text(0, "item 3"));
}

#[test]
fn column_lines_stop_at_last_printed_row() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    simple_table(3, &config).print(&mut surface, AREA, 0).unwrap();

    let columns: Vec<Rect> = surface.pages()[0]
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeRect { rect, .. } if rect.width < AREA.width => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(columns.len(), 2);
    // header band plus three 14pt rows
    assert!(columns.iter().all(|r| r.y == 0.0 && r.height == 56.0));
}

#[test]
fn overflow_returns_first_unprinted_row() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    let table = simple_table(12, &config);
    let next = table.print(&mut surface, AREA, 0).unwrap();
    assert!(next > 0 && next < 12);
    assert_eq!(next, 5);
    assert!(surface.page_contains_text(0, "item 5"));
    assert!(!surface.page_contains_text(0, "item 6"));

    let last = table.print(&mut surface, AREA, 10).unwrap();
    assert_eq!(last, 12);
}

#[test]
fn page_count_follows_rows_per_area() {
    let config = test_config();
    let rows_per_page = 5;
    for n in [1usize, 5, 6, 12, 23] {
        let mut surface = test_surface();
        let table = simple_table(n, &config);
        let mut start = 0;
        let mut pages = 0;
        while start < n {
            surface.begin_page(Size::new(200.0, 200.0)).unwrap();
            start = table.print(&mut surface, AREA, start).unwrap();
            pages += 1;
        }
        assert_eq!(pages, n.div_ceil(rows_per_page), "{} rows", n);
        assert_eq!(surface.page_count(), pages);
    }
}

#[test]
fn wrapped_cells_make_the_whole_row_taller() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    let rows = vec![
        vec!["1".to_string(), "first\nsecond\nthird".to_string()],
        vec!["2".to_string(), "short".to_string()],
        vec!["3".to_string(), "short".to_string()],
    ];
    let table = Table::new(two_column_spec(), rows, &config).unwrap();
    // 34pt + 14pt + 14pt fills 62 of the 70pt body
    let next = table.print(&mut surface, AREA, 0).unwrap();
    assert_eq!(next, 3);

    // one point short for the third row
    let area = Rect { height: 75.0, ..AREA };
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();
    assert_eq!(table.print(&mut surface, area, 0).unwrap(), 2);
}

#[test]
fn a_row_that_never_fits_is_reported() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    let rows = vec![vec!["1".to_string(), "a\nb\nc".to_string()]];
    let table = Table::new(two_column_spec(), rows, &config).unwrap();
    let area = Rect { height: 44.0, ..AREA };
    match table.print(&mut surface, area, 0) {
        Err(LayoutError::PaginationNoProgress { row, available }) => {
            assert_eq!(row, 0);
            assert_eq!(available, 30.0);
        }
        other => panic!("expected PaginationNoProgress, got {:?}", other),
    }
}

#[test]
fn empty_table_prints_only_its_header() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();
    let table = simple_table(0, &config);
    assert_eq!(table.print(&mut surface, AREA, 0).unwrap(), 0);
    assert!(surface.page_contains_text(0, "Description"));
}

#[test]
fn rows_must_match_the_column_count() {
    let config = test_config();
    let mut rows = simple_rows(3);
    rows[1].push("extra".to_string());
    assert!(matches!(
        Table::new(two_column_spec(), rows, &config),
        Err(LayoutError::InvalidConfiguration(_))
    ));
}

#[test]
fn column_specs_are_validated() {
    assert!(matches!(
        TableSpec::new(vec![Column::flexible("a"), Column::flexible("b")]),
        Err(LayoutError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        TableSpec::new(vec![Column::fixed("a", 0.7), Column::fixed("b", 0.5)]),
        Err(LayoutError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        TableSpec::new(vec![]),
        Err(LayoutError::InvalidConfiguration(_))
    ));
}

#[test]
fn flexible_column_takes_the_rest() {
    let spec = TableSpec::new(vec![
        Column::fixed("code", 0.1),
        Column::flexible("description"),
        Column::fixed("total", 0.2).align(TextAlign::Right),
    ])
    .unwrap();
    let widths = spec.resolve_widths(500.0);
    assert_eq!(widths, vec![50.0, 350.0, 100.0]);
}

#[test]
fn continued_pages_say_so_in_the_header() {
    let config = test_config();
    let mut surface = test_surface();
    let block = TableBlock::new("Items", simple_table(30, &config), &config);
    // 1pt border, 12pt band, then the 84pt table area
    let rect = Rect::new(0.0, 0.0, 202.0, 98.0);

    surface.begin_page(Size::new(300.0, 300.0)).unwrap();
    let next = block.render_page(&mut surface, rect, 0, false).unwrap();
    surface.begin_page(Size::new(300.0, 300.0)).unwrap();
    block.render_page(&mut surface, rect, next, true).unwrap();

    assert_eq!(next, 5);
    assert!(surface.page_contains_text(0, "Items"));
    assert!(!surface.page_contains_text(0, "(continued)"));
    assert!(surface.page_contains_text(1, "Items (continued)"));
    assert!(surface.page_contains_text(1, "item 6"));
}

#[test]
fn empty_rows_are_fitted_at_one_line_and_margin() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    let rows = vec![
        vec!["1".to_string(), "a".to_string()],
        vec![String::new(), String::new()],
    ];
    let table = Table::new(two_column_spec(), rows, &config).unwrap();
    // header 14, first row 14, then 11pt left for a 14pt empty row
    let area = Rect { height: 39.0, ..AREA };
    assert_eq!(table.print(&mut surface, area, 0).unwrap(), 1);

    let lowest = surface.pages()[0]
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeRect { rect, .. } => Some(rect.bottom()),
            _ => None,
        })
        .fold(0.0, f32::max);
    assert!(lowest <= area.bottom());

    let rows = vec![vec![String::new(); 2]];
    let empty_only = Table::new(two_column_spec(), rows, &config).unwrap();
    let area = Rect { height: 25.0, ..AREA };
    match empty_only.print(&mut surface, area, 0) {
        Err(LayoutError::PaginationNoProgress { row, available }) => {
            assert_eq!(row, 0);
            assert_eq!(available, 11.0);
        }
        other => panic!("expected PaginationNoProgress, got {:?}", other),
    }
}

#[test]
fn finished_table_without_room_for_its_frame_is_skipped() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(200.0, 200.0)).unwrap();

    let area = Rect { height: 10.0, ..AREA };
    assert_eq!(simple_table(0, &config).print(&mut surface, area, 0).unwrap(), 0);
    assert_eq!(simple_table(3, &config).print(&mut surface, area, 3).unwrap(), 3);

    // border 1 + band 12 + border 1 + table header 14 needs 28pt
    let block = TableBlock::new("Items", simple_table(0, &config), &config);
    let rect = Rect::new(0.0, 0.0, 202.0, 20.0);
    assert_eq!(block.render_page(&mut surface, rect, 0, false).unwrap(), 0);
    assert!(surface.pages()[0].commands.is_empty());

    let pending = TableBlock::new("Items", simple_table(2, &config), &config);
    assert!(matches!(
        pending.render_page(&mut surface, rect, 0, false),
        Err(LayoutError::PaginationNoProgress { .. })
    ));
}
