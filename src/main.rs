use clap::Parser;
use roman_numerals::config::{log_level, merge, toml_config::TomlConfig};
use roman_numerals::core::engine::render;
use roman_numerals::domain::ports::ConfigProvider;
use roman_numerals::utils::{logger, validation::Validate};
use roman_numerals::{CliConfig, ConversionEngine, RomanError};
use std::io::BufRead;

fn main() {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    let level = log_level(file_config.as_ref(), config.verbose);
    if file_config.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    tracing::info!("Starting roman converter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Some(file) = &file_config {
        if let Err(e) = file.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    match run(&config, file_config.as_ref()) {
        Ok(0) => {}
        // 個別輸入錯誤皆屬於輸入類別
        Ok(_) => std::process::exit(2),
        Err(e) => {
            tracing::error!("❌ Conversion failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

/// Returns the number of inputs that failed to convert.
fn run(config: &CliConfig, file_config: Option<&TomlConfig>) -> Result<usize, RomanError> {
    let resolved = merge(config, file_config);
    tracing::debug!("Resolved settings: {:?}", resolved);

    let inputs = if config.inputs.is_empty() {
        read_stdin_inputs()?
    } else {
        config.inputs.clone()
    };

    let engine = ConversionEngine::new(resolved);
    let report = engine.run(&inputs)?;

    println!("{}", render(&report, engine.config().output_format())?);

    if let Some(record) = report.records.iter().find(|r| !r.is_success()) {
        tracing::warn!("First failing input: {}", record.input);
    }

    Ok(report.failed)
}

fn read_stdin_inputs() -> Result<Vec<String>, RomanError> {
    let stdin = std::io::stdin();
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
