use taxsheet_traits::TextMeasure;
use taxsheet_types::Font;

pub const ELLIPSIS: &str = "\u{2026}";

/// A single line of text after the overflow policy ran.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub text: String,
    pub size: f32,
    pub truncated: bool,
}

/// Shrinks `text` into `available` and truncates it once the floor size is hit.
///
/// The value is measured at `nominal`. If it is too wide the size becomes
/// `nominal * available / measured - epsilon`. Below `floor` the size is
/// clamped to `floor` and the longest prefix that still fits together with an
/// ellipsis is kept.
pub fn fit_single_line(
    metrics: &dyn TextMeasure,
    text: &str,
    font: Font,
    nominal: f32,
    floor: f32,
    epsilon: f32,
    available: f32,
) -> FittedText {
    let measured = metrics.text_width(text, font, nominal);
    if measured <= available {
        return FittedText {
            text: text.to_string(),
            size: nominal,
            truncated: false,
        };
    }

    let shrunk = shrink_size(nominal, measured, available, epsilon);
    if shrunk >= floor {
        return FittedText {
            text: text.to_string(),
            size: shrunk,
            truncated: false,
        };
    }

    let size = floor.min(nominal);
    if metrics.text_width(text, font, size) <= available {
        return FittedText {
            text: text.to_string(),
            size,
            truncated: false,
        };
    }
    FittedText {
        text: truncate_with_ellipsis(metrics, text, font, size, available),
        size,
        truncated: true,
    }
}

/// Size at which `text` fits `available`, never below `min`.
///
/// Used for numbers, which are shrunk but never truncated.
pub fn shrink_to_fit(
    metrics: &dyn TextMeasure,
    text: &str,
    font: Font,
    nominal: f32,
    min: f32,
    epsilon: f32,
    available: f32,
) -> f32 {
    let measured = metrics.text_width(text, font, nominal);
    if measured <= available {
        return nominal;
    }
    shrink_size(nominal, measured, available, epsilon)
        .max(min)
        .min(nominal)
}

fn shrink_size(nominal: f32, measured: f32, available: f32, epsilon: f32) -> f32 {
    if available <= 0.0 {
        return 0.0;
    }
    nominal * available / measured - epsilon
}

/// Longest prefix of `text` that fits `available` once an ellipsis is appended.
///
/// Prefix lengths are probed one character at a time. If not even the bare
/// ellipsis fits, the result is empty.
pub fn truncate_with_ellipsis(
    metrics: &dyn TextMeasure,
    text: &str,
    font: Font,
    size: f32,
    available: f32,
) -> String {
    let mut best: Option<String> = None;
    let boundaries = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));

    for end in boundaries {
        let candidate = format!("{}{}", &text[..end], ELLIPSIS);
        if metrics.text_width(&candidate, font, size) <= available {
            best = Some(candidate);
        } else {
            break;
        }
    }
    best.unwrap_or_default()
}
