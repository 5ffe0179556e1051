mod doc;
mod error;
mod font;
mod geometry;
mod label;
mod page;
mod profile;
mod request;
mod size;
mod writer;

pub use doc::Doc;
pub use error::{Error, Result};
pub use font::Font;
pub use geometry::LabelGeometry;
pub use label::Label;
pub use page::Page;
pub use profile::{Printer, PrinterProfile, WidthPolicy};
pub use request::LabelRequest;
pub use size::SizePreset;
pub use writer::Writer;
