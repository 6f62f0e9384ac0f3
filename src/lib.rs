pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ResolvedConfig};
pub use crate::core::{engine::ConversionEngine, to_number, to_numeral};
pub use domain::model::{Direction, OutputFormat, MAX_ARABIC_NUMBER, MIN_ARABIC_NUMBER};
pub use utils::error::{InvalidNumeralReason, Result, RomanError};
