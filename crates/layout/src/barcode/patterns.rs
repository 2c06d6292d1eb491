//! Code 128 module-width patterns.
//!
//! Each symbol value 0..=106 is six alternating bar/space widths summing to
//! eleven modules. The stop symbol is followed by a two-module termination bar.

use once_cell::sync::Lazy;

pub const TERMINATION_BAR: u8 = 2;

const PATTERNS: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", // 0-7
    "132212", "221213", "221312", "231212", "112232", "122132", "122231", "113222", // 8-15
    "123122", "123221", "223211", "221132", "221231", "213212", "223112", "312131", // 16-23
    "311222", "321122", "321221", "312212", "322112", "322211", "212123", "212321", // 24-31
    "232121", "111323", "131123", "131321", "112313", "132113", "132311", "211313", // 32-39
    "231113", "231311", "112133", "112331", "132131", "113123", "113321", "133121", // 40-47
    "313121", "211331", "231131", "213113", "213311", "213131", "311123", "311321", // 48-55
    "331121", "312113", "312311", "332111", "314111", "221411", "431111", "111224", // 56-63
    "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114", // 64-71
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", // 72-79
    "111242", "121142", "121241", "114212", "124112", "124211", "411212", "421112", // 80-87
    "421211", "212141", "214121", "412121", "111143", "111341", "131141", "114113", // 88-95
    "114311", "411113", "411311", "113141", "114131", "311141", "411131", "211412", // 96-103
    "211214", "211232", "233111", // 104-106
];

static TABLE: Lazy<Vec<[u8; 6]>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .map(|pattern| {
            let mut widths = [0u8; 6];
            for (slot, digit) in widths.iter_mut().zip(pattern.bytes()) {
                *slot = digit - b'0';
            }
            widths
        })
        .collect()
});

/// Bar/space widths of symbol `value`, or `None` past the stop symbol.
pub fn pattern(value: u8) -> Option<&'static [u8; 6]> {
    TABLE.get(value as usize)
}
