use std::path::Path;

use tracing::{debug, info};

use crate::types::{Error, Font, Label, Printer, Result, SizePreset, Writer};

/// # Main entry point of the library
///
/// The document assembler: an ordered list of labels that all share one
/// printer family and one size preset, rendered one page per label. Owns
/// every piece of state for the duration of a run; the output file is
/// written exactly once, at the end.
#[derive(Debug)]
pub struct Doc {
    printer: Printer,
    size: SizePreset,
    labels: Vec<Label>,
}

impl Doc {
    pub fn new(printer: Printer, size: SizePreset) -> Self {
        Doc {
            printer,
            size,
            labels: Vec::new(),
        }
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// appends one label, rejecting empty text
    pub fn add_label(&mut self, text: &str) -> Result<()> {
        let label = Label::new(self.printer, text, self.size)?;
        self.labels.push(label);
        Ok(())
    }

    /// Renders every label to its own page and returns the finished PDF
    /// bytes. Fails with `NoLabels` when nothing has been added.
    pub fn render(&self) -> Result<Vec<u8>> {
        if self.labels.is_empty() {
            return Err(Error::NoLabels);
        }

        let font = Font::new();
        let mut writer = Writer::new();

        for label in &self.labels {
            let geometry = label.geometry(&font);

            debug!(
                text = label.text(),
                page_width = geometry.page_width,
                page_height = geometry.page_height,
                font_size = geometry.font_size,
                "laid out label"
            );

            writer.new_page(geometry.page_width, geometry.page_height);
            writer.draw_text(geometry.x, geometry.y, label.text(), geometry.font_size);
        }

        Ok(writer.finish())
    }

    /// Renders and writes the document to `path`, creating or overwriting
    /// the file. The render happens entirely in memory first, so a failed
    /// run never leaves a partial file behind. Returns the page count.
    pub fn save(&self, path: &Path) -> Result<usize> {
        let bytes = self.render()?;
        std::fs::write(path, bytes)?;

        info!(pages = self.labels.len(), path = %path.display(), "label document written");

        Ok(self.labels.len())
    }

    /// One-shot assembly: build a document from `texts` in order and save
    /// it to `output`. This is the whole CLI in one call.
    pub fn build(
        printer: Printer,
        texts: &[String],
        size: SizePreset,
        output: &Path,
    ) -> Result<usize> {
        if texts.is_empty() {
            return Err(Error::NoLabels);
        }

        let mut doc = Doc::new(printer, size);

        for text in texts {
            doc.add_label(text)?;
        }

        doc.save(output)
    }
}
