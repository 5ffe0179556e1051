use crate::traits::TextMeasure;
use crate::types::{Error, LabelGeometry, Printer, Result, SizePreset};

/// One unit of printable output: a text string plus the printer family and
/// size preset it will be rendered with. Validated on construction and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    printer: Printer,
    size: SizePreset,
}

impl Label {
    /// Rejects text that is empty after trimming. The text itself is kept
    /// as given, surrounding whitespace included.
    pub fn new(printer: Printer, text: &str, size: SizePreset) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::EmptyLabelText);
        }

        Ok(Label {
            text: text.to_owned(),
            printer,
            size,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn printer(&self) -> Printer {
        self.printer
    }

    pub fn size(&self) -> SizePreset {
        self.size
    }

    /// page size and text placement for this label, see `LabelGeometry`
    pub fn geometry(&self, font: &impl TextMeasure) -> LabelGeometry {
        LabelGeometry::compute(self, font)
    }
}
