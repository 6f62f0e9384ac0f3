use crate::core::{to_number, to_numeral};
use crate::domain::model::{ConversionRecord, ConversionReport, Direction, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RomanError};

/// Batch front end over the two converters.
pub struct ConversionEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ConversionEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Convert a single raw input, resolving `Direction::Auto` from its shape.
    pub fn convert_one(&self, raw: &str) -> Result<ConversionRecord> {
        let input = raw.trim();
        let direction = resolve_direction(self.config.direction(), input);

        let output = match direction {
            Direction::ToNumeral => to_numeral(parse_arabic(input)?)?,
            _ => to_number(input)?.to_string(),
        };

        Ok(ConversionRecord {
            input: input.to_string(),
            direction,
            output: Some(output),
            error: None,
        })
    }

    /// Convert every input, collecting failures into the report unless
    /// fail-fast is configured.
    pub fn run<I, S>(&self, inputs: I) -> Result<ConversionReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ConversionReport::default();

        for raw in inputs {
            let raw = raw.as_ref();
            match self.convert_one(raw) {
                Ok(record) => report.push(record),
                Err(e) if self.config.fail_fast() => {
                    tracing::error!("Conversion of '{}' failed: {}", raw.trim(), e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("Conversion of '{}' failed: {}", raw.trim(), e);
                    let input = raw.trim();
                    report.push(ConversionRecord {
                        input: input.to_string(),
                        direction: resolve_direction(self.config.direction(), input),
                        output: None,
                        error: Some(e.user_friendly_message()),
                    });
                }
            }
        }

        tracing::info!(
            "Converted {} inputs ({} failed)",
            report.records.len(),
            report.failed
        );
        Ok(report)
    }
}

fn resolve_direction(configured: Direction, input: &str) -> Direction {
    match configured {
        Direction::Auto if looks_numeric(input) => Direction::ToNumeral,
        Direction::Auto => Direction::ToNumber,
        fixed => fixed,
    }
}

fn looks_numeric(input: &str) -> bool {
    let digits = input.strip_prefix(['-', '+']).unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Integers too wide for `i32` are still reported as out of range.
fn parse_arabic(input: &str) -> Result<i32> {
    match input.parse::<i64>() {
        Ok(value) => i32::try_from(value).map_err(|_| RomanError::OutOfRange { value }),
        Err(_) if looks_numeric(input) => Err(RomanError::OutOfRange {
            value: if input.starts_with('-') { i64::MIN } else { i64::MAX },
        }),
        Err(_) => Err(RomanError::NotANumber {
            input: input.to_string(),
        }),
    }
}

pub fn render(report: &ConversionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let lines: Vec<String> = report
                .records
                .iter()
                .map(|record| match (&record.output, &record.error) {
                    (Some(output), _) => format!("{} -> {}", record.input, output),
                    (None, Some(error)) => format!("{} -> error: {}", record.input, error),
                    (None, None) => format!("{} -> ", record.input),
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InvalidNumeralReason;

    struct StaticConfig {
        direction: Direction,
        fail_fast: bool,
    }

    impl ConfigProvider for StaticConfig {
        fn direction(&self) -> Direction {
            self.direction
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Text
        }

        fn fail_fast(&self) -> bool {
            self.fail_fast
        }
    }

    fn build_engine(direction: Direction, fail_fast: bool) -> ConversionEngine<StaticConfig> {
        ConversionEngine::new(StaticConfig { direction, fail_fast })
    }

    #[test]
    fn test_convert_one_auto_direction() {
        let engine = build_engine(Direction::Auto, false);

        let record = engine.convert_one(" 1994 ").unwrap();
        assert_eq!(record.direction, Direction::ToNumeral);
        assert_eq!(record.input, "1994");
        assert_eq!(record.output.as_deref(), Some("MCMXCIV"));

        let record = engine.convert_one("XL").unwrap();
        assert_eq!(record.direction, Direction::ToNumber);
        assert_eq!(record.output.as_deref(), Some("40"));
    }

    #[test]
    fn test_convert_one_fixed_direction() {
        let engine = build_engine(Direction::ToNumber, false);
        let err = engine.convert_one("12").unwrap_err();
        assert_eq!(err.numeral_reason(), Some(InvalidNumeralReason::InvalidCharacter));

        let engine = build_engine(Direction::ToNumeral, false);
        assert!(matches!(
            engine.convert_one("XII"),
            Err(RomanError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_convert_one_out_of_range_inputs() {
        let engine = build_engine(Direction::Auto, false);
        assert!(matches!(engine.convert_one("0"), Err(RomanError::OutOfRange { value: 0 })));
        assert!(matches!(engine.convert_one("-5"), Err(RomanError::OutOfRange { value: -5 })));
        assert!(matches!(
            engine.convert_one("5000000000"),
            Err(RomanError::OutOfRange { value: 5_000_000_000 })
        ));
        assert!(matches!(
            engine.convert_one("99999999999999999999999"),
            Err(RomanError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_run_collects_failures() {
        let engine = build_engine(Direction::Auto, false);
        let report = engine.run(["4", "IL", "MMXXIV", "4000"]).unwrap();

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.records[1].direction, Direction::ToNumber);
        assert!(report.records[1]
            .error
            .as_deref()
            .unwrap()
            .contains("Invalid numeral subtraction"));
        assert_eq!(report.records[2].output.as_deref(), Some("2024"));
    }

    #[test]
    fn test_run_fail_fast_returns_first_error() {
        let engine = build_engine(Direction::Auto, true);
        let err = engine.run(vec!["X".to_string(), "VV".to_string(), "IL".to_string()]).unwrap_err();
        assert_eq!(err.numeral_reason(), Some(InvalidNumeralReason::InvalidConsecutiveRepeat));
    }

    #[test]
    fn test_render_text_and_json() {
        let engine = build_engine(Direction::Auto, false);
        let report = engine.run(["9", "ABC"]).unwrap();

        let text = render(&report, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "9 -> IX\nABC -> error: 'ABC' is not a valid Roman numeral (Invalid numeral)"
        );

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["succeeded"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["records"][0]["direction"], "to-numeral");
        assert_eq!(value["records"][0]["output"], "IX");
        assert!(value["records"][1].get("output").is_none());
    }
}
