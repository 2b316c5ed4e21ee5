//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::i18n::Label;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => start_fetch(state),

        Action::WeatherDidLoad { request, data } => {
            if request != state.request_seq {
                tracing::debug!(request, current = state.request_seq, "dropping stale result");
                return DispatchResult::unchanged();
            }
            tracing::info!(city = %data.name, "weather loaded");
            state.weather = Some(data);
            state.error = None;
            state.loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, error } => {
            if request != state.request_seq {
                tracing::debug!(request, current = state.request_seq, "dropping stale error");
                return DispatchResult::unchanged();
            }
            tracing::warn!(city = %state.city_query, %error, "weather lookup failed");
            state.error = Some(state.language.label(Label::NotFound).to_string());
            state.weather = None;
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_input = state.city_query.clone();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchInput(text) => {
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit(submitted) => {
            let city = submitted.trim();
            if city.is_empty() {
                tracing::debug!("ignoring empty search");
                return DispatchResult::unchanged();
            }
            state.city_query = city.to_string();
            state.search_mode = false;
            state.search_input.clear();
            start_fetch(state)
        }

        // ===== UI actions =====
        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            tracing::debug!(theme = ?state.theme, "theme toggled");
            DispatchResult::changed()
        }

        Action::UiSetLanguage(language) => {
            if state.language == language {
                return DispatchResult::unchanged();
            }
            state.language = language;
            tracing::debug!(%language, "language changed");
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Enter the loading state and issue a new, uniquely tagged fetch
fn start_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    state.loading = true;
    state.error = None;
    state.request_seq = state.request_seq.wrapping_add(1);
    tracing::info!(city = %state.city_query, request = state.request_seq, "fetching weather");
    DispatchResult::changed_with(Effect::FetchWeather {
        city: state.city_query.clone(),
        request: state.request_seq,
    })
}
