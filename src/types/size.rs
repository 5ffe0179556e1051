use core::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::types::Error;

/// Named font size tiers. The letters parse case-insensitively; the
/// default is `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SizePreset {
   #[serde(rename = "S")]
    Small,
   #[default]
   #[serde(rename = "M")]
    Medium,
   #[serde(rename = "L")]
    Large,
}

impl SizePreset {
    /// font size in points for this preset
    pub fn points(&self) -> f32 {
        match self {
            SizePreset::Small => 8.0,
            SizePreset::Medium => 12.0,
            SizePreset::Large => 18.0,
        }
    }
}

impl FromStr for SizePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Ok(SizePreset::Small),
            "M" => Ok(SizePreset::Medium),
            "L" => Ok(SizePreset::Large),
            _ => Err(Error::InvalidSize(s.to_owned())),
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SizePreset::Small => write!(f, "S"),
            SizePreset::Medium => write!(f, "M"),
            SizePreset::Large => write!(f, "L"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_strictly_ordered() {
        assert!(SizePreset::Small.points() < SizePreset::Medium.points());
        assert!(SizePreset::Medium.points() < SizePreset::Large.points());
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(SizePreset::default(), SizePreset::Medium);
    }

    #[test]
    fn parses_letters_case_insensitively() {
        assert_eq!("s".parse::<SizePreset>().unwrap(), SizePreset::Small);
        assert_eq!("M".parse::<SizePreset>().unwrap(), SizePreset::Medium);
        assert_eq!("l".parse::<SizePreset>().unwrap(), SizePreset::Large);
    }

    #[test]
    fn rejects_unknown_letter() {
        let err = "XL".parse::<SizePreset>().unwrap_err();
        assert!(matches!(err, Error::InvalidSize(name) if name == "XL"));
    }
}
