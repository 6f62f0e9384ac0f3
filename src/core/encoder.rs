use crate::domain::model::entries;
use crate::utils::error::Result;
use crate::utils::validation::validate_arabic_range;

/// Convert an Arabic number in `1..=3999` to its canonical Roman numeral.
///
/// Greedy: after every subtraction the scan restarts at the top of the
/// table, which is how repeated symbols such as "XXX" accumulate.
pub fn to_numeral(arabic_number: i32) -> Result<String> {
    validate_arabic_range(arabic_number)?;

    let mut remaining = arabic_number;
    let mut result = String::new();

    while remaining != 0 {
        for (symbol, value) in entries() {
            if remaining / value > 0 {
                result.push_str(symbol);
                remaining -= value;
                break;
            }
        }
    }

    tracing::debug!(arabic_number, numeral = %result, "Converted number to numeral");
    Ok(result)
}
