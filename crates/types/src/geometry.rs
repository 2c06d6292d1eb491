//! Primitives for position, size and spacing.
//!
//! All values are in PDF points with a top-left origin: `y` grows downward,
//! so `bottom()` is `y + height`.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// A4 portrait in points.
    pub fn a4() -> Self {
        Self::new(595.28, 841.89)
    }
}

/// Asymmetric spacing applied to the four edges of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn x(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }

    pub fn y(value: f32) -> Self {
        Self::new(value, 0.0, value, 0.0)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns a new rect shrunk by `insets`. Width and height never go below zero.
    pub fn pad(&self, insets: Insets) -> Rect {
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal()).max(0.0),
            height: (self.height - insets.vertical()).max(0.0),
        }
    }

    /// Splits the rect into `count` slices of equal width, left to right.
    pub fn split_horizontally(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let slice = self.width / count as f32;
        (0..count)
            .map(|i| Rect {
                x: self.x + slice * i as f32,
                y: self.y,
                width: slice,
                height: self.height,
            })
            .collect()
    }

    /// Returns a copy with the top edge moved down by `dy`, keeping the bottom edge.
    pub fn cut_top(&self, dy: f32) -> Rect {
        let dy = dy.min(self.height);
        Rect {
            x: self.x,
            y: self.y + dy,
            width: self.width,
            height: self.height - dy,
        }
    }

    pub fn with_height(&self, height: f32) -> Rect {
        Rect { height, ..*self }
    }

    pub fn has_positive_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// True if `self` lies inside `canvas`, allowing for float noise.
    pub fn is_within(&self, canvas: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        self.x >= canvas.x - EPSILON
            && self.y >= canvas.y - EPSILON
            && self.right() <= canvas.right() + EPSILON
            && self.bottom() <= canvas.bottom() + EPSILON
    }
}
