use pdf_writer::{Content, Ref};

/// One output page and its single content stream. Pages carry their own
/// media size because continuous-tape labels differ in width within one
/// document.
pub struct Page {
    pub page_id: Ref,
    pub content_id: Ref,
    pub content: Content,
    pub width: f32,
    pub height: f32,
}
