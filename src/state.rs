//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::theme::Theme;

pub const DEFAULT_CITY: &str = "Moscow";

/// Current conditions as decoded from the OpenWeatherMap response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub name: String,
    pub main: Main,
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Main {
    /// °C (metric units)
    pub temp: f64,
    /// Percent
    pub humidity: f64,
    /// hPa
    pub pressure: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Wind {
    /// m/s
    pub speed: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

impl WeatherResult {
    /// City name with the country code when the provider sent one
    pub fn display_name(&self) -> String {
        match &self.sys.country {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Committed city query (the last accepted search)
    #[debug(section = "Query", label = "City")]
    pub city_query: String,

    /// Last successful lookup
    #[debug(section = "Weather", label = "Result", debug_fmt)]
    pub weather: Option<WeatherResult>,

    /// Localized error text, fixed when the fetch failed
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    #[debug(section = "Weather", label = "Loading")]
    pub loading: bool,

    #[debug(section = "UI", label = "Theme", debug_fmt)]
    pub theme: Theme,

    #[debug(section = "UI", label = "Language")]
    pub language: Language,

    /// Generation of the most recently issued fetch
    #[debug(section = "Weather", label = "Request")]
    pub request_seq: u64,

    // --- Search input (skipped) ---
    /// Whether the search input is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Edit buffer for the search input
    #[debug(skip)]
    pub search_input: String,
}

impl AppState {
    /// Create state for the given city with default theme and language
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city_query: city.into(),
            weather: None,
            error: None,
            loading: false,
            theme: Theme::default(),
            language: Language::default(),
            request_seq: 0,
            search_mode: false,
            search_input: String::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Result to display, if any. Hidden while a request is in flight.
    pub fn visible_weather(&self) -> Option<&WeatherResult> {
        if self.loading {
            None
        } else {
            self.weather.as_ref()
        }
    }

    /// Error to display, if any. Hidden while a request is in flight.
    pub fn visible_error(&self) -> Option<&str> {
        if self.loading {
            None
        } else {
            self.error.as_deref()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
