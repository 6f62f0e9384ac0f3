pub mod toml_config;

use crate::domain::model::{Direction, OutputFormat};
use crate::domain::ports::ConfigProvider;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roman")]
#[command(about = "Convert between Arabic numbers and Roman numerals")]
pub struct CliConfig {
    /// Values to convert; read from stdin, one per line, when omitted
    pub inputs: Vec<String>,

    /// auto, to-numeral or to-number
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Stop at the first input that fails to convert")]
    pub fail_fast: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn direction(&self) -> Direction {
        self.direction.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn fail_fast(&self) -> bool {
        self.fail_fast
    }
}

/// Effective settings after layering command line values over a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedConfig {
    pub direction: Direction,
    pub output_format: OutputFormat,
    pub fail_fast: bool,
}

impl ResolvedConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            direction: file.direction(),
            output_format: file.output_format(),
            fail_fast: file.fail_fast(),
        }
    }

    /// Explicit values win; a `false` fail-fast flag keeps the file setting.
    pub fn with_overrides(
        self,
        direction: Option<Direction>,
        output_format: Option<OutputFormat>,
        fail_fast: bool,
    ) -> Self {
        Self {
            direction: direction.unwrap_or(self.direction),
            output_format: output_format.unwrap_or(self.output_format),
            fail_fast: fail_fast || self.fail_fast,
        }
    }
}

#[cfg(feature = "cli")]
pub fn merge(cli: &CliConfig, file: Option<&TomlConfig>) -> ResolvedConfig {
    file.map(ResolvedConfig::from_toml)
        .unwrap_or_default()
        .with_overrides(cli.direction, cli.format, cli.fail_fast)
}

/// Log level for either log format: `--verbose` forces debug, otherwise the
/// file's `[logging] level`, otherwise info.
pub fn log_level(file: Option<&TomlConfig>, verbose: bool) -> &str {
    match (file, verbose) {
        (_, true) => "debug",
        (Some(file), false) => file.log_level(),
        (None, false) => "info",
    }
}

impl ConfigProvider for ResolvedConfig {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn fail_fast(&self) -> bool {
        self.fail_fast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let file = TomlConfig::from_toml_str(
            "[converter]\ndirection = \"to-number\"\noutput_format = \"json\"\nfail_fast = true\n",
        )
        .unwrap();

        let resolved = ResolvedConfig::from_toml(&file).with_overrides(
            Some(Direction::ToNumeral),
            None,
            false,
        );

        assert_eq!(resolved.direction, Direction::ToNumeral);
        assert_eq!(resolved.output_format, OutputFormat::Json);
        assert!(resolved.fail_fast);
    }

    #[test]
    fn test_defaults_without_file() {
        let resolved = ResolvedConfig::default().with_overrides(None, Some(OutputFormat::Json), true);
        assert_eq!(resolved.direction, Direction::Auto);
        assert_eq!(resolved.output_format, OutputFormat::Json);
        assert!(resolved.fail_fast);
    }

    #[test]
    fn test_log_level_comes_from_file_without_json() {
        let file = TomlConfig::from_toml_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert!(!file.json_logs());

        assert_eq!(log_level(Some(&file), false), "warn");
        assert_eq!(log_level(Some(&file), true), "debug");
        assert_eq!(log_level(None, false), "info");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing_and_merge() {
        let cli = CliConfig::parse_from(["roman", "--direction", "to-number", "-f", "json", "XIV", "IX"]);
        assert_eq!(cli.inputs, vec!["XIV".to_string(), "IX".to_string()]);
        assert_eq!(cli.direction, Some(Direction::ToNumber));

        let file = TomlConfig::from_toml_str("[converter]\ndirection = \"to-numeral\"\nfail_fast = true\n").unwrap();
        let resolved = merge(&cli, Some(&file));
        assert_eq!(resolved.direction, Direction::ToNumber);
        assert_eq!(resolved.output_format, OutputFormat::Json);
        assert!(resolved.fail_fast);

        assert!(CliConfig::try_parse_from(["roman", "--direction", "sideways"]).is_err());
    }
}
