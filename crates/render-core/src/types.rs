use taxsheet_traits::ObjectHandle;
use taxsheet_types::{Font, Point, Rect, Size, TextAlign, VerticalAlign};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        rect: Rect,
        font: Font,
        size: f32,
        align: TextAlign,
        valign: VerticalAlign,
    },
    StrokeRect {
        rect: Rect,
        line_width: f32,
    },
    FillRect {
        rect: Rect,
    },
    DashedLine {
        from: Point,
        to: Point,
        pattern: Vec<f32>,
        line_width: f32,
    },
    Embed {
        handle: ObjectHandle,
        rect: Rect,
    },
}

impl DrawCommand {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Everything drawn on one page, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

/// A reusable object and the commands recorded into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectContent {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
    pub finished: bool,
}
