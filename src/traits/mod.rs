mod measure;

pub use measure::TextMeasure;
