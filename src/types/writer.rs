use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{Chunk, Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::types::Page;

const HELVETICA: Name = Name(b"Helvetica");

// resource dictionary key shared by every page
const FONT_RESOURCE: Name = Name(b"F1");

/// The PDF backend. Collects one `Page` per label, then assembles the whole
/// document in memory at `finish()` time — nothing touches the filesystem
/// here, so an aborted run leaves no partial output behind.
///
/// Contains:
/// - ref allocator
/// - reserved ids for the page tree and the shared Helvetica font
/// - the pages drawn so far
pub struct Writer {
    alloc: Ref,
    page_tree_id: Ref,
    font_id: Ref,
    pages: Vec<Page>,
}

impl Default for Writer {
    fn default() -> Self {
        let mut alloc = Ref::new(1);
        let page_tree_id = alloc.bump();
        let font_id = alloc.bump();

        Writer {
            alloc,
            page_tree_id,
            font_id,
            pages: Vec::new(),
        }
    }
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    /// get a new reference for an indirect object
    fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// starts a new page with its own media box, in points
    pub fn new_page(&mut self, width: f32, height: f32) {
        let page_id = self.bump();
        let content_id = self.bump();

        self.pages.push(Page {
            page_id,
            content_id,
            content: Content::new(),
            width,
            height,
        });
    }

    /// draws a single text run on the current page at `(x, y)`
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str, font_size: f32) {
        // a page must exist by now
        debug_assert!(self.pages.is_empty() == false);

        if let Some(page) = self.pages.last_mut() {
            page.content.begin_text();
            page.content.set_font(FONT_RESOURCE, font_size);
            page.content.next_line(x, y);
            page.content.show(Str(text.as_bytes()));
            page.content.end_text();
        }
    }

    /// Assembles page objects, content streams, the page tree and the
    /// catalog into the finished PDF bytes.
    pub fn finish(self) -> Vec<u8> {
        let Writer {
            mut alloc,
            page_tree_id,
            font_id,
            pages,
        } = self;

        let mut pdf = Pdf::new();
        let mut streams = Chunk::new();

        pdf.type1_font(font_id).base_font(HELVETICA);

        let page_ids: Vec<Ref> = pages.iter().map(|page| page.page_id).collect();

        for page in pages {
            let mut pdf_page = pdf.page(page.page_id);

            pdf_page.media_box(Rect::new(0.0, 0.0, page.width, page.height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(page.content_id);

            let mut resources = pdf_page.resources();
            resources.fonts().pair(FONT_RESOURCE, font_id);
            resources.finish();
            pdf_page.finish();

            streams.stream(page.content_id, &page.content.finish());
        }

        pdf.extend(&streams);

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        let now = Utc::now();
        let creation_date = Date::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8);

        pdf.document_info(alloc.bump())
            .producer(TextStr("labelmaker"))
            .creation_date(creation_date);

        pdf.catalog(alloc.bump()).pages(page_tree_id);

        pdf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn empty_writer_still_produces_a_document() {
        let bytes = Writer::new().finish();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/MediaBox"), 0);
    }

    #[test]
    fn one_page_per_new_page_call() {
        let mut writer = Writer::new();
        writer.new_page(153.0, 72.0);
        writer.draw_text(10.0, 30.0, "Hello World", 12.0);
        writer.new_page(100.0, 34.0);
        writer.draw_text(5.0, 11.0, "second", 8.0);
        assert_eq!(writer.page_count(), 2);

        let bytes = writer.finish();
        // every page carries exactly one media box
        assert_eq!(count(&bytes, b"/MediaBox"), 2);
        assert_eq!(count(&bytes, b"(Hello World)"), 1);
        assert_eq!(count(&bytes, b"(second)"), 1);
    }
}
