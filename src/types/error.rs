use core::fmt;
use derive_more::From;

#[derive(Debug, From)]
pub enum Error {
   #[from]
    Save(std::io::Error),
   #[from]
    Request(serde_json::Error),
    UnknownPrinter(String),
    InvalidSize(String),
    EmptyLabelText,
    NoLabels,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Save(e) => write!(f, "i/o error: {e}"),
            Error::Request(e) => write!(f, "invalid label request: {e}"),
            Error::UnknownPrinter(name) => {
                write!(f, "unknown printer type '{name}' (expected 'dymo' or 'ptouch')")
            }
            Error::InvalidSize(name) => {
                write!(f, "invalid size '{name}' (expected 'S', 'M' or 'L')")
            }
            Error::EmptyLabelText => write!(f, "label text is empty"),
            Error::NoLabels => write!(f, "no labels given, nothing to generate"),
        }
    }
}
