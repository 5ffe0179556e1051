use crate::traits::TextMeasure;

/// Standard Helvetica advance widths in 1/1000 em units, for the printable
/// ASCII range 0x20..=0x7E, taken from the Adobe AFM data. Helvetica is one
/// of the base-14 fonts every PDF viewer ships, so nothing is embedded.
const WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

// characters outside the table get the digit width
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica metrics. The layout engine consumes these through the
/// `TextMeasure` trait; this struct is the only implementation the crate
/// ships.
#[derive(Debug, Default)]
pub struct Font;

impl Font {
    pub fn new() -> Self {
        Font
    }
}

impl TextMeasure for Font {
    fn advance(&self, ch: char, font_size: f32) -> f32 {
        let per_mille = WIDTHS
            .get((ch as usize).wrapping_sub(0x20))
            .copied()
            .unwrap_or(FALLBACK_WIDTH);

        f32::from(per_mille) / 1000.0 * font_size
    }
}
