use serde::Deserialize;

use crate::types::{Printer, Result, SizePreset};

fn default_output() -> String {
    "labels.pdf".to_owned()
}

/// # Generated from a JSON batch file
///
/// The same run the CLI describes positionally, as a document:
///
/// ```json
/// { "printer": "dymo", "labels": ["Pantry", "Garage"], "size": "L" }
/// ```
///
/// `size` defaults to `M` and `output` to `labels.pdf` when omitted.
#[derive(Debug, Deserialize)]
pub struct LabelRequest {
    pub printer: Printer,
    pub labels: Vec<String>,
   #[serde(default)]
    pub size: SizePreset,
   #[serde(default = "default_output")]
    pub output: String,
}

impl LabelRequest {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Error;

    #[test]
    fn parses_a_full_request() {
        let raw = r#"{
            "printer": "ptouch",
            "labels": ["Pantry", "Garage"],
            "size": "L",
            "output": "shelves.pdf"
        }"#;

        let request = LabelRequest::from_json(raw).unwrap();
        assert_eq!(request.printer, Printer::Ptouch);
        assert_eq!(request.labels, vec!["Pantry", "Garage"]);
        assert_eq!(request.size, SizePreset::Large);
        assert_eq!(request.output, "shelves.pdf");
    }

    #[test]
    fn size_and_output_default_when_omitted() {
        let raw = r#"{ "printer": "dymo", "labels": ["Hello"] }"#;

        let request = LabelRequest::from_json(raw).unwrap();
        assert_eq!(request.size, SizePreset::Medium);
        assert_eq!(request.output, "labels.pdf");
    }

    #[test]
    fn unknown_printer_name_is_rejected() {
        let raw = r#"{ "printer": "zebra", "labels": ["Hello"] }"#;
        assert!(matches!(LabelRequest::from_json(raw), Err(Error::Request(_))));
    }
}
