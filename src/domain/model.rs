use crate::utils::error::RomanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_ARABIC_NUMBER: i32 = 1;
pub const MAX_ARABIC_NUMBER: i32 = 3999;

/// Canonical numeral tokens, strictly descending by value.
///
/// The greedy encoder depends on this ordering.
static NUMERAL_VALUES: [(&str, i32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Iterate the table in descending value order.
pub fn entries() -> impl Iterator<Item = (&'static str, i32)> {
    NUMERAL_VALUES.iter().copied()
}

/// Look up a single symbol or a subtractive pair.
pub fn value_of(symbol: &str) -> Option<i32> {
    NUMERAL_VALUES
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, value)| *value)
}

pub fn value_of_char(c: char) -> Option<i32> {
    let mut buf = [0u8; 4];
    value_of(c.encode_utf8(&mut buf))
}

/// Value of the two-character key `first` `second`, if the table has one.
pub fn pair_value(first: char, second: char) -> Option<i32> {
    NUMERAL_VALUES
        .iter()
        .find(|(key, _)| {
            let mut chars = key.chars();
            chars.next() == Some(first) && chars.next() == Some(second) && chars.next().is_none()
        })
        .map(|(_, value)| *value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Auto,
    ToNumeral,
    ToNumber,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Auto => "auto",
            Direction::ToNumeral => "to-numeral",
            Direction::ToNumber => "to-number",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Direction {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Direction::Auto),
            "to-numeral" => Ok(Direction::ToNumeral),
            "to-number" => Ok(Direction::ToNumber),
            other => Err(RomanError::InvalidConfigValueError {
                field: "direction".to_string(),
                value: other.to_string(),
                reason: "Valid directions: auto, to-numeral, to-number".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(RomanError::InvalidConfigValueError {
                field: "output_format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json".to_string(),
            }),
        }
    }
}

/// Outcome of converting one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: String,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionRecord {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    pub records: Vec<ConversionRecord>,
    pub succeeded: usize,
    pub failed: usize,
}

impl ConversionReport {
    pub fn push(&mut self, record: ConversionRecord) {
        if record.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.records.push(record);
    }
}
