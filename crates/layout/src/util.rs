use crate::LayoutError;
use taxsheet_types::Rect;

/// Tolerance for layout comparisons.
pub const EPSILON: f32 = 0.01;

/// Fails unless `rect` has a positive size and sits inside `canvas`.
///
/// Out-of-bounds rects are reported, never clamped.
pub fn ensure_within(rect: Rect, canvas: Rect, what: &str) -> Result<(), LayoutError> {
    ensure_positive(rect, what)?;
    if rect.x < 0.0 || rect.y < 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "{} has a negative origin ({:.2}, {:.2})",
            what, rect.x, rect.y
        )));
    }
    if !rect.is_within(&canvas) {
        return Err(LayoutError::InvalidGeometry(format!(
            "{} at ({:.2}, {:.2}) size {:.2} x {:.2} exceeds its canvas ({:.2}, {:.2}) size {:.2} x {:.2}",
            what,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            canvas.x,
            canvas.y,
            canvas.width,
            canvas.height
        )));
    }
    Ok(())
}

pub fn ensure_positive(rect: Rect, what: &str) -> Result<(), LayoutError> {
    if !rect.has_positive_size() || !rect.width.is_finite() || !rect.height.is_finite() {
        return Err(LayoutError::InvalidGeometry(format!(
            "{} has a non-positive size {:.2} x {:.2}",
            what, rect.width, rect.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_rects_outside_the_canvas() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(ensure_within(Rect::new(10.0, 10.0, 50.0, 50.0), canvas, "block").is_ok());
        assert!(matches!(
            ensure_within(Rect::new(60.0, 10.0, 50.0, 50.0), canvas, "block"),
            Err(LayoutError::InvalidGeometry(_))
        ));
        assert!(matches!(
            ensure_within(Rect::new(-1.0, 10.0, 5.0, 5.0), canvas, "block"),
            Err(LayoutError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn rejects_empty_rects() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(matches!(
            ensure_within(Rect::new(10.0, 10.0, 0.0, 5.0), canvas, "field"),
            Err(LayoutError::InvalidGeometry(_))
        ));
    }
}
