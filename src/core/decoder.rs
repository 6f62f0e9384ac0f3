use crate::domain::model::{pair_value, value_of_char};
use crate::utils::error::{InvalidNumeralReason, Result, RomanError};
use crate::utils::validation::validate_numeral;

/// Convert a Roman numeral to its Arabic value.
///
/// Accepts `&str` or `Option<&str>`; `None` is rejected as a null input.
/// The numeral is fully validated before any decoding happens.
pub fn to_number<'a>(numeral: impl Into<Option<&'a str>>) -> Result<i32> {
    let numeral = numeral.into();
    validate_numeral(numeral)?;
    let text = numeral.unwrap_or_default();

    let chars: Vec<char> = text.chars().collect();
    let mut result = 0;
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        let current_value = symbol_value(text, current)?;

        // a smaller symbol before a larger one reads as a subtractive pair
        if let Some(&next) = chars.get(i + 1) {
            if current_value < symbol_value(text, next)? {
                let pair = pair_value(current, next).ok_or_else(|| {
                    RomanError::invalid_numeral(Some(text), InvalidNumeralReason::InvalidSubtraction)
                })?;
                result = accumulate(result, pair)?;
                i += 2;
                continue;
            }
        }

        result = accumulate(result, current_value)?;
        i += 1;
    }

    tracing::debug!(numeral = text, value = result, "Converted numeral to number");
    Ok(result)
}

/// Alternating pairs such as "CMCM..." pass validation, so very long input
/// can exceed `i32`.
fn accumulate(total: i32, value: i32) -> Result<i32> {
    total
        .checked_add(value)
        .ok_or(RomanError::OutOfRange { value: i64::MAX })
}

fn symbol_value(text: &str, symbol: char) -> Result<i32> {
    value_of_char(symbol).ok_or_else(|| {
        RomanError::invalid_numeral(Some(text), InvalidNumeralReason::InvalidCharacter)
    })
}
