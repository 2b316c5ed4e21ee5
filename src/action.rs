//! Actions - every state transition the widget can make

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: fetch weather for the committed city query
    WeatherFetch,

    /// Result: lookup succeeded for the given request
    WeatherDidLoad { request: u64, data: WeatherResult },

    /// Result: lookup failed (transport, status, or decode) for the given request
    WeatherDidError { request: u64, error: String },

    // ===== Search category =====
    /// Open the city input, pre-filled with the current query
    SearchOpen,

    /// Close the city input without searching
    SearchClose,

    /// Input text changed
    SearchInput(String),

    /// Submit a city name
    SearchSubmit(String),

    // ===== UI category =====
    UiToggleTheme,

    UiSetLanguage(Language),

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
