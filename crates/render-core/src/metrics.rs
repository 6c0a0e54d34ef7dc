//! Advance widths of the standard PDF fonts (AFM units, 1/1000 em).
//!
//! Only printable ASCII is tabulated. Courier is monospaced. Anything else uses
//! a per-family fallback close to the width of a lowercase letter.

use crate::surface::Font;
use folio_style::{FontFamily, FontWeight, PT_TO_MM};

const FIRST: u32 = 32;
const LAST: u32 = 126;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const COURIER_WIDTH: u16 = 600;
const BULLET_WIDTH: u16 = 350;

/// Advance width of `ch` in 1/1000 em.
pub fn char_width(family: FontFamily, weight: FontWeight, ch: char) -> u16 {
    if family == FontFamily::Mono {
        return COURIER_WIDTH;
    }
    let table = match (family, weight) {
        (FontFamily::Serif, FontWeight::Normal) => &TIMES_ROMAN,
        (FontFamily::Serif, FontWeight::Bold) => &TIMES_BOLD,
        (_, FontWeight::Bold) => &HELVETICA_BOLD,
        _ => &HELVETICA,
    };
    let code = ch as u32;
    match ch {
        '\u{a0}' => table[0],
        '\u{2022}' => BULLET_WIDTH,
        _ if (FIRST..=LAST).contains(&code) => table[(code - FIRST) as usize],
        _ if family == FontFamily::Serif => 500,
        _ => 556,
    }
}

/// Width of `text` set in `font`, in millimeters.
pub fn text_width(text: &str, font: &Font) -> f32 {
    let units: u32 = text
        .chars()
        .map(|ch| u32::from(char_width(font.family, font.weight, ch)))
        .sum();
    units as f32 / 1000.0 * font.size_pt * PT_TO_MM
}

/// Mean advance width of the lowercase alphabet, in millimeters.
pub fn average_char_width(font: &Font) -> f32 {
    text_width("abcdefghijklmnopqrstuvwxyz", font) / 26.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_lookup() {
        assert_eq!(char_width(FontFamily::Sans, FontWeight::Normal, ' '), 278);
        assert_eq!(char_width(FontFamily::Sans, FontWeight::Normal, 'W'), 944);
        assert_eq!(char_width(FontFamily::Sans, FontWeight::Bold, 'm'), 889);
        assert_eq!(char_width(FontFamily::Serif, FontWeight::Normal, 'a'), 444);
        assert_eq!(char_width(FontFamily::Serif, FontWeight::Bold, 'W'), 1000);
        assert_eq!(char_width(FontFamily::Sans, FontWeight::Normal, '~'), 584);
    }

    #[test]
    fn test_courier_is_monospaced() {
        for ch in ['i', 'W', ' ', 'é', '\u{2022}'] {
            assert_eq!(char_width(FontFamily::Mono, FontWeight::Bold, ch), 600);
        }
    }

    #[test]
    fn test_text_width_in_mm() {
        let font = Font::regular(FontFamily::Mono, 10.0);
        let expected = 5.0 * 0.6 * 10.0 * PT_TO_MM;
        assert!((text_width("Hello", &font) - expected).abs() < 1e-4);
        assert_eq!(text_width("", &font), 0.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = Font::regular(FontFamily::Sans, 12.0);
        let bold = Font::bold(FontFamily::Sans, 12.0);
        assert!(text_width("Annual report", &bold) > text_width("Annual report", &regular));
    }
}
