use crate::traits::TextMeasure;
use crate::types::{Label, WidthPolicy};

/// Computed page size and text placement for a single label, in PDF points
/// with the origin at the bottom left. Derived from a `Label` and a set of
/// font metrics; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
}

impl LabelGeometry {
    /// Lays out one label.
    ///
    /// Fixed-width media centers the text in both axes. Continuous tape
    /// sizes the page to the text plus the profile margin on each side, so
    /// horizontal centering collapses to starting at the margin offset.
    /// Text wider than a fixed page is not truncated or wrapped; the origin
    /// simply moves left of the page edge.
    pub fn compute(label: &Label, font: &impl TextMeasure) -> LabelGeometry {
        let profile = label.printer().profile();
        let font_size = label.size().points();
        let (text_width, text_height) = font.measure(label.text(), font_size);

        let (page_width, x) = match profile.width {
            WidthPolicy::Fixed(width) => (width, (width - text_width) / 2.0),
            WidthPolicy::FitText { margin } => (text_width + 2.0 * margin, margin),
        };

        LabelGeometry {
            page_width,
            page_height: profile.height,
            font_size,
            x,
            y: (profile.height - text_height) / 2.0,
        }
    }
}
