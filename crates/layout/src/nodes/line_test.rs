#![cfg(test)]

use crate::test_utils::{test_config, test_surface};
use crate::{BarcodeElement, Element, Field, FlexibleLine, LayoutError, Span, VerticalStack};
use taxsheet_render_core::DrawCommand;
use taxsheet_traits::Surface;
use taxsheet_types::{Point, Size};

fn three_fields() -> FlexibleLine {
    let config = test_config();
    FlexibleLine::new([Span::Fixed(30.0), Span::Fill, Span::Fill])
        .with(Field::new("A", "1", &config))
        .with(Field::new("B", "one two three four", &config).wrapped())
        .with(Field::new("C", "3", &config))
}

#[test]
fn children_get_resolved_widths_and_share_the_tallest_height() {
    let surface = test_surface();
    let mut line = three_fields();
    let height = line.place(&surface, Point::new(10.0, 20.0), 130.0).unwrap();

    let frames: Vec<_> = line.children().iter().map(|c| c.frame().unwrap()).collect();
    assert_eq!(frames[0].x, 10.0);
    assert_eq!(frames[1].x, 40.0);
    assert_eq!(frames[2].x, 90.0);
    let total: f32 = frames.iter().map(|f| f.width).sum();
    assert!((total - 130.0).abs() < 1e-4);
    for frame in &frames {
        assert_eq!(frame.y, 20.0);
        assert_eq!(frame.height, height);
    }
    // the wrapped middle field sets the row height
    assert!(height > 21.625);
}

#[test]
fn element_count_must_match_widths() {
    let config = test_config();
    let line = FlexibleLine::new([Span::Fill, Span::Fill]).with(Field::new("A", "1", &config));
    assert!(matches!(
        line.validate(100.0),
        Err(LayoutError::InvalidConfiguration(_))
    ));
}

#[test]
fn overfull_widths_are_rejected() {
    let config = test_config();
    let line = FlexibleLine::new([Span::Fixed(80.0), Span::Fixed(40.0)])
        .with(Field::new("A", "1", &config))
        .with(Field::new("B", "2", &config));
    assert!(matches!(
        line.validate(100.0),
        Err(LayoutError::InvalidConfiguration(_))
    ));
}

#[test]
fn stack_places_children_one_below_another() {
    let config = test_config();
    let surface = test_surface();
    let mut stack = VerticalStack::new()
        .with(Field::new("First", "1", &config))
        .with(three_fields())
        .with(BarcodeElement::new("1258745", &config).unwrap());

    let measured = stack.measure(&surface, 130.0).unwrap();
    let placed = stack.place(&surface, Point::new(0.0, 0.0), 130.0).unwrap();
    assert_eq!(measured, placed);

    let frames: Vec<_> = stack.children().iter().map(|c| c.frame().unwrap()).collect();
    assert_eq!(frames[0].y, 0.0);
    assert_eq!(frames[1].y, frames[0].bottom());
    assert_eq!(frames[2].y, frames[1].bottom());
    assert!((frames[2].bottom() - placed).abs() < 1e-4);
}

#[test]
fn placed_tree_draws_identically_twice() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(300.0, 300.0)).unwrap();

    let mut stack = VerticalStack::new()
        .with(three_fields())
        .with(BarcodeElement::new("1258745", &config).unwrap());
    stack.place(&surface, Point::new(5.0, 5.0), 130.0).unwrap();
    stack.draw(&mut surface).unwrap();
    let once = surface.pages()[0].commands.len();
    stack.draw(&mut surface).unwrap();

    let commands = &surface.pages()[0].commands;
    assert_eq!(commands.len(), once * 2);
    assert_eq!(&commands[..once], &commands[once..]);
}

#[test]
fn barcode_fills_one_rect_per_bar() {
    let config = test_config();
    let mut surface = test_surface();
    surface.begin_page(Size::new(300.0, 300.0)).unwrap();

    let mut barcode = BarcodeElement::new("1258745", &config).unwrap().without_caption();
    barcode.place(&surface, Point::new(0.0, 0.0), 91.0).unwrap();
    barcode.draw(&mut surface).unwrap();

    let bars: Vec<_> = surface.pages()[0]
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { rect } => Some(*rect),
            _ => None,
        })
        .collect();
    // 7 symbols of 3 bars each plus the termination bar
    assert_eq!(bars.len(), 22);
    // 79 modules over 79pt between the quiet zones
    assert!((bars[0].x - 6.0).abs() < 1e-4);
    assert!((bars[0].width - 2.0).abs() < 1e-4);
    let last = bars[bars.len() - 1];
    assert!((last.x + last.width - 85.0).abs() < 1e-3);
}
