use crate::LayoutError;
use crate::util::EPSILON;

/// How much width one entry of a side-by-side row asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span {
    /// An exact width in points.
    Fixed(f32),
    /// An equal share of whatever the fixed entries leave over.
    Fill,
    /// Whatever the entry before this one resolved to.
    MatchPrevious,
}

/// `0.0` means "share the remaining space", any other value is a fixed width.
impl From<f32> for Span {
    fn from(width: f32) -> Self {
        if width == 0.0 {
            Span::Fill
        } else {
            Span::Fixed(width)
        }
    }
}

/// Converts a plain width array (zeros sharing the rest) into spans.
pub fn spans_from_widths(widths: &[f32]) -> Vec<Span> {
    widths.iter().copied().map(Span::from).collect()
}

/// Resolves `spans` against `available` width, left to right.
///
/// Fill entries split `available - sum(fixed)` equally; the last one absorbs
/// rounding so that, whenever at least one entry fills, the result sums to
/// `available`. Fails if the fixed widths alone exceed `available`.
pub fn distribute(spans: &[Span], available: f32) -> Result<Vec<f32>, LayoutError> {
    let resolved = resolve_references(spans)?;

    let fixed_sum: f32 = resolved.iter().flatten().sum();
    if fixed_sum > available + EPSILON {
        return Err(LayoutError::InvalidConfiguration(format!(
            "fixed widths sum to {:.2} but only {:.2} is available",
            fixed_sum, available
        )));
    }

    let fill_count = resolved.iter().filter(|w| w.is_none()).count();
    if fill_count == 0 {
        return Ok(resolved.into_iter().flatten().collect());
    }

    let share = (available - fixed_sum) / fill_count as f32;
    let last_fill = resolved.iter().rposition(|w| w.is_none());

    let mut widths: Vec<f32> = resolved.iter().map(|w| w.unwrap_or(share)).collect();

    if let Some(last) = last_fill {
        let others: f32 = widths
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != last)
            .map(|(_, w)| *w)
            .sum();
        widths[last] = (available - others).max(0.0);
    }
    Ok(widths)
}

/// Turns each span into `Some(fixed width)` or `None` for an equal share.
fn resolve_references(spans: &[Span]) -> Result<Vec<Option<f32>>, LayoutError> {
    let mut resolved: Vec<Option<f32>> = Vec::with_capacity(spans.len());
    for (i, span) in spans.iter().enumerate() {
        let entry = match *span {
            Span::Fixed(w) if w < 0.0 || !w.is_finite() => {
                return Err(LayoutError::InvalidConfiguration(format!(
                    "width #{} is invalid ({})",
                    i, w
                )));
            }
            Span::Fixed(w) => Some(w),
            Span::Fill => None,
            Span::MatchPrevious => match resolved.last() {
                Some(previous) => *previous,
                None => {
                    return Err(LayoutError::InvalidConfiguration(
                        "the first width cannot match a previous one".to_string(),
                    ));
                }
            },
        };
        resolved.push(entry);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(widths: &[f32]) -> f32 {
        widths.iter().sum()
    }

    #[test]
    fn zeros_share_the_remaining_width() {
        let widths = distribute(&spans_from_widths(&[100.0, 0.0, 0.0]), 400.0).unwrap();
        assert_eq!(widths, vec![100.0, 150.0, 150.0]);
    }

    #[test]
    fn fill_widths_sum_to_the_area() {
        for available in [100.0_f32, 333.3, 539.28, 27.0] {
            let widths = distribute(&spans_from_widths(&[10.0, 0.0, 7.5, 0.0, 0.0]), available)
                .unwrap();
            assert!((sum(&widths) - available).abs() < 1e-3, "{:?}", widths);
        }
    }

    #[test]
    fn all_fixed_widths_are_kept_as_given() {
        let widths = distribute(&spans_from_widths(&[10.0, 20.0]), 100.0).unwrap();
        assert_eq!(widths, vec![10.0, 20.0]);
    }

    #[test]
    fn overfull_widths_are_rejected() {
        let err = distribute(&spans_from_widths(&[60.0, 50.0, 0.0]), 100.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    }

    #[test]
    fn match_previous_reuses_the_resolved_width() {
        let spans = [Span::Fixed(40.0), Span::MatchPrevious, Span::Fill];
        assert_eq!(distribute(&spans, 200.0).unwrap(), vec![40.0, 40.0, 120.0]);

        let spans = [Span::Fill, Span::MatchPrevious];
        assert_eq!(distribute(&spans, 90.0).unwrap(), vec![45.0, 45.0]);
    }

    #[test]
    fn match_previous_needs_a_previous_entry() {
        assert!(distribute(&[Span::MatchPrevious], 10.0).is_err());
    }
}
