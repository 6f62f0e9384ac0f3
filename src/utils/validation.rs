use crate::domain::model::{pair_value, value_of_char, MAX_ARABIC_NUMBER, MIN_ARABIC_NUMBER};
use crate::utils::error::{InvalidNumeralReason, Result, RomanError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const MAX_REPEAT: u32 = 3;

/// Check that `numeral` is a well-formed classical Roman numeral.
///
/// A single left-to-right pass; the first violation found is reported.
/// Repeats are counted pairwise alongside the subtraction check, so the
/// counter resets whenever two adjacent characters differ.
pub fn validate_numeral(numeral: Option<&str>) -> Result<()> {
    let Some(text) = numeral else {
        tracing::debug!("Rejecting absent numeral");
        return Err(RomanError::invalid_numeral(None, InvalidNumeralReason::NullInput));
    };

    let fail = |reason: InvalidNumeralReason, position: usize| {
        tracing::debug!(numeral = text, position, %reason, "Numeral failed validation");
        Err(RomanError::invalid_numeral(Some(text), reason))
    };

    let chars: Vec<char> = text.chars().collect();
    let mut consecutive_count = 1;

    for (i, &current) in chars.iter().enumerate() {
        let Some(current_value) = value_of_char(current) else {
            return fail(InvalidNumeralReason::InvalidCharacter, i);
        };

        let Some(&next) = chars.get(i + 1) else {
            continue;
        };
        let Some(next_value) = value_of_char(next) else {
            return fail(InvalidNumeralReason::InvalidCharacter, i + 1);
        };

        if current_value < next_value && pair_value(current, next).is_none() {
            return fail(InvalidNumeralReason::InvalidSubtraction, i);
        }

        if current == next {
            consecutive_count += 1;
            if (consecutive_count > 1 && contains_digit(current_value, 5))
                || consecutive_count > MAX_REPEAT
            {
                return fail(InvalidNumeralReason::InvalidConsecutiveRepeat, i + 1);
            }
        } else {
            consecutive_count = 1;
        }
    }

    Ok(())
}

/// Whether the base-10 form of `value` contains `digit` anywhere.
fn contains_digit(value: i32, digit: u32) -> bool {
    value
        .unsigned_abs()
        .to_string()
        .chars()
        .any(|c| c.to_digit(10) == Some(digit))
}

pub fn validate_arabic_range(number: i32) -> Result<()> {
    if !(MIN_ARABIC_NUMBER..=MAX_ARABIC_NUMBER).contains(&number) {
        tracing::debug!(number, "Arabic number out of range");
        return Err(RomanError::OutOfRange {
            value: i64::from(number),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
