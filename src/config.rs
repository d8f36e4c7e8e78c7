use crate::error::{ErrorContext, Result};
use crate::strategies::create_strategy;
use crate::types::{Config, RustPermuteError};
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a TOML config file when given, otherwise start from defaults, then
/// apply environment overrides.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            let config = parse_config(&contents)
                .with_context(|| format!("Failed to parse config file {:?}", path))?;
            debug!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(wordlist) = env::var("RUSTPERMUTE_WORDLIST") {
        config.wordlist = PathBuf::from(wordlist);
    }
    if let Ok(output) = env::var("RUSTPERMUTE_OUTPUT") {
        config.output.file = Some(PathBuf::from(output));
    }
}

pub fn validate_config(config: &Config) -> Result<()> {
    if config.strategies.is_empty() {
        return Err(RustPermuteError::ConfigError(
            "At least one strategy must be enabled".to_string(),
        ));
    }
    if let Some(unknown) = config.strategies.iter().find(|s| create_strategy(s).is_none()) {
        return Err(RustPermuteError::UnknownStrategy(unknown.clone()));
    }
    Ok(())
}
