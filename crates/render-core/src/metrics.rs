//! Text metrics for the display list backend.

use taxsheet_traits::TextMeasure;
use taxsheet_types::Font;

/// Every character has the same advance; handy when a test needs exact widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of one character as a fraction of the font size.
    pub advance: f32,
    /// Line height as a multiple of the font size.
    pub leading: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            leading: 1.25,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str, _font: Font, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * size
    }

    fn line_height(&self, _font: Font, size: f32) -> f32 {
        self.leading * size
    }
}

/// Advance widths of the standard-14 Helvetica faces, in 1/1000 em.
///
/// Only printable ASCII is tabulated; anything else measures as a digit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelveticaMetrics;

const FALLBACK_WIDTH: u16 = 556;

// ' ' (0x20) through '~' (0x7E)
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

fn char_width(table: &[u16; 95], c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

impl TextMeasure for HelveticaMetrics {
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32 {
        let table = match font {
            Font::Regular => &HELVETICA,
            Font::Bold => &HELVETICA_BOLD,
        };
        let units: u32 = text.chars().map(|c| char_width(table, c) as u32).sum();
        units as f32 * size / 1000.0
    }

    fn line_height(&self, _font: Font, size: f32) -> f32 {
        size * 1.2
    }
}
