use std::fmt;
use thiserror::Error;

/// Why a numeral failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNumeralReason {
    NullInput,
    InvalidCharacter,
    InvalidSubtraction,
    InvalidConsecutiveRepeat,
}

impl fmt::Display for InvalidNumeralReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvalidNumeralReason::NullInput => "Numeral to convert cannot be null",
            InvalidNumeralReason::InvalidCharacter => "Invalid numeral",
            InvalidNumeralReason::InvalidSubtraction => "Invalid numeral subtraction",
            InvalidNumeralReason::InvalidConsecutiveRepeat => {
                "Invalid number of consecutive numerals"
            }
        };
        write!(f, "{msg}")
    }
}

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("Invalid arabic number {value}. Valid numbers are 1 - 3999")]
    OutOfRange { value: i64 },

    #[error("{reason}: {}", .numeral.as_deref().unwrap_or("null"))]
    InvalidNumeral {
        numeral: Option<String>,
        reason: InvalidNumeralReason,
    },

    #[error("'{input}' is not an Arabic number")]
    NotANumber { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl RomanError {
    pub fn invalid_numeral(numeral: Option<&str>, reason: InvalidNumeralReason) -> Self {
        RomanError::InvalidNumeral {
            numeral: numeral.map(str::to_string),
            reason,
        }
    }

    /// The validation reason, if this is a numeral error.
    pub fn numeral_reason(&self) -> Option<InvalidNumeralReason> {
        match self {
            RomanError::InvalidNumeral { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::OutOfRange { .. }
            | RomanError::InvalidNumeral { .. }
            | RomanError::NotANumber { .. } => ErrorCategory::Input,
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RomanError::IoError(_) | RomanError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::OutOfRange { value } => {
                format!("{} cannot be written as a Roman numeral", value)
            }
            RomanError::InvalidNumeral {
                numeral: Some(numeral),
                reason,
            } => format!("'{}' is not a valid Roman numeral ({})", numeral, reason),
            RomanError::InvalidNumeral {
                numeral: None,
                reason,
            } => reason.to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RomanError::OutOfRange { .. } => "Use a whole number between 1 and 3999",
            RomanError::InvalidNumeral { reason, .. } => match reason {
                InvalidNumeralReason::NullInput => "Provide a numeral to convert",
                InvalidNumeralReason::InvalidCharacter => {
                    "Use only the uppercase letters M, D, C, L, X, V and I"
                }
                InvalidNumeralReason::InvalidSubtraction => {
                    "Only IV, IX, XL, XC, CD and CM may place a smaller numeral first"
                }
                InvalidNumeralReason::InvalidConsecutiveRepeat => {
                    "Repeat M, C, X or I at most three times and never repeat V, L or D"
                }
            },
            RomanError::NotANumber { .. } => "Pass digits only when converting to a numeral",
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line options"
            }
            RomanError::IoError(_) => "Check that the file exists and is readable",
            RomanError::SerializationError(_) => "Try the text output format instead",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
