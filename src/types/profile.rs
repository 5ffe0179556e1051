use core::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::types::Error;

/// points per millimeter (1 inch = 72 pt = 25.4 mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

// Dymo 30336 in landscape: 2-1/8" x 1"
const DYMO_WIDTH: f32 = 153.0;
const DYMO_HEIGHT: f32 = 72.0;

// 12 mm continuous tape, 5 pt of clearance on each side of the text
const PTOUCH_HEIGHT: f32 = 12.0 * POINTS_PER_MM;
const PTOUCH_MARGIN: f32 = 5.0;

/// Supported printer families. Unknown names are rejected when parsing,
/// before any layout runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Printer {
    Dymo,
    Ptouch,
}

/// How a profile determines page width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthPolicy {
    /// die-cut media, the page is always this many points wide
    Fixed(f32),
    /// continuous tape, the page is exactly as wide as the text plus
    /// `margin` points of clearance on each side
    FitText { margin: f32 },
}

/// Page geometry policy for a printer family: a fixed height plus a width
/// policy. Widths and heights are in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterProfile {
    pub height: f32,
    pub width: WidthPolicy,
}

impl Printer {
    pub fn profile(&self) -> PrinterProfile {
        match self {
            Printer::Dymo => PrinterProfile {
                height: DYMO_HEIGHT,
                width: WidthPolicy::Fixed(DYMO_WIDTH),
            },
            Printer::Ptouch => PrinterProfile {
                height: PTOUCH_HEIGHT,
                width: WidthPolicy::FitText { margin: PTOUCH_MARGIN },
            },
        }
    }
}

impl FromStr for Printer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "dymo" => Ok(Printer::Dymo),
            "ptouch" => Ok(Printer::Ptouch),
            _ => Err(Error::UnknownPrinter(s.to_owned())),
        }
    }
}

impl fmt::Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Printer::Dymo => write!(f, "dymo"),
            Printer::Ptouch => write!(f, "ptouch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_printers() {
        assert_eq!("dymo".parse::<Printer>().unwrap(), Printer::Dymo);
        assert_eq!("ptouch".parse::<Printer>().unwrap(), Printer::Ptouch);
        assert_eq!("PTOUCH".parse::<Printer>().unwrap(), Printer::Ptouch);
    }

    #[test]
    fn rejects_unknown_printer() {
        let err = "zebra".parse::<Printer>().unwrap_err();
        assert!(matches!(err, Error::UnknownPrinter(name) if name == "zebra"));
    }

    #[test]
    fn dymo_profile_is_fixed_size() {
        let profile = Printer::Dymo.profile();
        assert_eq!(profile.height, 72.0);
        assert_eq!(profile.width, WidthPolicy::Fixed(153.0));
    }

    #[test]
    fn ptouch_profile_is_twelve_millimeter_tape() {
        let profile = Printer::Ptouch.profile();
        assert!((profile.height - 34.0157).abs() < 0.001);
        assert_eq!(profile.width, WidthPolicy::FitText { margin: 5.0 });
    }
}
