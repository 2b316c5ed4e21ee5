//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::api::{WeatherClient, DEFAULT_BASE_URL};
use crate::i18n::Language;
use crate::state::{AppState, DEFAULT_CITY};
use crate::theme::Theme;

/// Weather widget - current conditions from OpenWeatherMap
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Look up current weather for a city")]
pub struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// City looked up on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    pub city: String,

    /// Label language (en, ru, fr, de)
    #[arg(long, default_value = "ru")]
    pub language: Language,

    #[arg(long, value_enum, default_value = "light")]
    pub theme: Theme,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHERMAP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Write logs to this file
    #[arg(long, env = "WEATHER_WIDGET_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing API key: pass --api-key or set OPENWEATHERMAP_API_KEY")]
    MissingApiKey,
    #[error("invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Validated runtime configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub city: String,
    pub language: Language,
    pub theme: Theme,
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        let base_url = args.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let city = match args.city.trim() {
            "" => DEFAULT_CITY.to_string(),
            city => city.to_string(),
        };

        Ok(Self {
            api_key,
            base_url,
            city,
            language: args.language,
            theme: args.theme,
            timeout: args.timeout_secs.map(Duration::from_secs),
            log_file: args.log_file.clone(),
        })
    }

    pub fn client(&self) -> Result<WeatherClient, ConfigError> {
        Ok(WeatherClient::new(
            self.base_url.clone(),
            self.api_key.clone(),
            self.timeout,
        )?)
    }

    /// State the widget starts from before the first fetch
    pub fn initial_state(&self) -> AppState {
        AppState::new(self.city.clone())
            .with_language(self.language)
            .with_theme(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["weather-widget"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&parse(&["--api-key", "abc"])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.city, "Moscow");
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.theme, Theme::Light);
        assert!(config.timeout.is_none());

        let state = config.initial_state();
        assert_eq!(state.city_query, "Moscow");
        assert!(!state.loading);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--api-key",
            "abc",
            "--city",
            "  Paris ",
            "--language",
            "FR",
            "--theme",
            "dark",
            "--base-url",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "5",
        ]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.city, "Paris");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let state = config.initial_state();
        assert_eq!(state.language, Language::Fr);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let err = Config::from_args(&parse(&["--api-key", "   "])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let err =
            Config::from_args(&parse(&["--api-key", "k", "--base-url", "ftp://x"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_unknown_language_fails_to_parse() {
        let result = Args::try_parse_from(["weather-widget", "--language", "es"]);
        assert!(result.is_err());
    }
}
