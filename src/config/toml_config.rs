use crate::domain::model::{Direction, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RomanError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const VALID_DIRECTIONS: [&str; 3] = ["auto", "to-numeral", "to-number"];
const VALID_FORMATS: [&str; 2] = ["text", "json"];
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub converter: ConverterConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub direction: Option<String>,
    pub output_format: Option<String>,
    pub fail_fast: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RomanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RomanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROMAN_DIRECTION})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RomanError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(direction) = &self.converter.direction {
            validate_one_of("converter.direction", direction, &VALID_DIRECTIONS)?;
        }

        if let Some(format) = &self.converter.output_format {
            validate_one_of("converter.output_format", format, &VALID_FORMATS)?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_non_empty_string("logging.level", level)?;
            validate_one_of("logging.level", level, &VALID_LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn direction(&self) -> Direction {
        self.converter
            .direction
            .as_deref()
            .and_then(|d| d.parse().ok())
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.converter
            .output_format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    pub fn fail_fast(&self) -> bool {
        self.converter.fail_fast.unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    /// 是否輸出 JSON 格式日誌
    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn direction(&self) -> Direction {
        self.direction()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format()
    }

    fn fail_fast(&self) -> bool {
        self.fail_fast()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[converter]
direction = "to-number"
output_format = "json"
fail_fast = true

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.direction(), Direction::ToNumber);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.fail_fast());
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_empty_config() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.direction(), Direction::Auto);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(!config.fail_fast());
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_TEST_OUTPUT_FORMAT", "json");

        let toml_content = r#"
[converter]
output_format = "${ROMAN_TEST_OUTPUT_FORMAT}"
direction = "${ROMAN_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
        // unknown variables are left in place and fail validation
        assert_eq!(
            config.converter.direction.as_deref(),
            Some("${ROMAN_TEST_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());

        std::env::remove_var("ROMAN_TEST_OUTPUT_FORMAT");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[converter]\noutput_format = \"xml\"\n").unwrap();
        assert!(matches!(
            bad_format.validate(),
            Err(RomanError::InvalidConfigValueError { ref field, .. }) if field == "converter.output_format"
        ));

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        assert!(matches!(
            TomlConfig::from_toml_str("[converter\n"),
            Err(RomanError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[converter]
direction = "to-numeral"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.direction(), Direction::ToNumeral);

        assert!(matches!(
            TomlConfig::from_file("/nonexistent/roman.toml"),
            Err(RomanError::IoError(_))
        ));
    }
}
