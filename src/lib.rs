//! # Introduction
//!
//! Labelmaker generates print-ready PDF documents for small label printers.
//! It accepts plain text and a printer family and emits one PDF page per
//! label, sized to the printer's media and with the text centered. Built on
//! top of pdf_writer (Typst), this is a no frills crate: no drivers, no
//! hardware I/O, no print queue. Geometry in, PDF file out.
//!
//! Supported printers:
//! - Dymo (fixed 153 x 72 pt die-cut labels, e.g. the 30336)
//! - Brother P-touch (12 mm continuous tape, width grows with the text)
//!
//! Feature Road Map:
//! - [X] Dymo fixed-size labels
//! - [X] P-touch continuous tape with dynamic width
//! - [X] S/M/L font size presets
//! - [X] Multiple labels per document (one page each)
//! - [X] JSON batch requests
//! - [ ] QR code label content
//! - [ ] Configurable maximum tape width with an explicit overflow policy
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! The main entry point is the `Doc` struct. Add labels to it and call
//! `.save()` (write a file) or `.render()` (get the PDF bytes back).
//!
//! ```no_run
//! use labelmaker::types::{Doc, Printer, SizePreset};
//!
//! # fn main() -> labelmaker::types::Result<()> {
//! let mut doc = Doc::new(Printer::Dymo, SizePreset::Medium);
//! doc.add_label("Hello World")?;
//! doc.save(std::path::Path::new("labels.pdf"))?;
//! # Ok(())
//! # }
//! ```
//!
//! For the one-shot form used by the CLI:
//!
//! ```no_run
//! use labelmaker::types::{Doc, Printer, SizePreset};
//!
//! # fn main() -> labelmaker::types::Result<()> {
//! let texts = vec!["Pantry".to_string(), "Garage".to_string()];
//! Doc::build(Printer::Ptouch, &texts, SizePreset::Small, std::path::Path::new("labels.pdf"))?;
//! # Ok(())
//! # }
//! ```
pub mod traits;
pub mod types;
