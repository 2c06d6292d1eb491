use taxsheet_traits::TextMeasure;
use taxsheet_types::Font;

/// Greedy word wrap of `text` at `max_width`.
///
/// Explicit newlines always break. A word wider than a whole line is split
/// between characters, with at least one character per line so wrapping
/// always terminates. Blank input gives no lines.
pub fn wrap_lines(
    metrics: &dyn TextMeasure,
    text: &str,
    font: Font,
    size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return lines;
    }

    let space = metrics.text_width(" ", font, size);
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = metrics.text_width(word, font, size);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + space + word_width
            };

            if needed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let mut pieces = break_word(metrics, word, font, size, max_width);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = metrics.text_width(&last, font, size);
                current = last;
            }
        }
        lines.push(current);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn break_word(
    metrics: &dyn TextMeasure,
    word: &str,
    font: Font,
    size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if metrics.text_width(&current, font, size) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::replace(&mut current, c.to_string()));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
