/// Text measurement seam between the layout engine and the font metrics.
///
/// Layout only ever asks "how big is this string at this size" — it is not
/// responsible for font metrics itself. Implementors provide the advance
/// width of a single character; `measure` derives the string width from
/// that and reports the font size as the height (single-line labels only,
/// so the nominal line height is the text height).
pub trait TextMeasure {
    /// advance width of `ch` at `font_size`, in points
    fn advance(&self, ch: char, font_size: f32) -> f32;

    /// measured (width, height) of `text` at `font_size`, in points
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32) {
        let width = text.chars().map(|ch| self.advance(ch, font_size)).sum();
        (width, font_size)
    }
}
