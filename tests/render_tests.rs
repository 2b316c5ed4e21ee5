//! Render snapshot tests using RenderHarness

use tui_dispatch::testing::*;
use weather_widget::{
    action::Action,
    components::{Component, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps},
    i18n::Language,
    state::{AppState, Main, Sys, WeatherResult, Wind},
    theme::Theme,
};

fn berlin() -> WeatherResult {
    WeatherResult {
        name: "Berlin".into(),
        main: Main {
            temp: 18.0,
            humidity: 62.0,
            pressure: 1009.0,
        },
        wind: Wind { speed: 2.5 },
        sys: Sys {
            country: Some("DE".into()),
        },
    }
}

fn render_display(width: u16, height: u16, state: &AppState) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_loading_hides_result() {
    let state = AppState {
        weather: Some(berlin()),
        loading: true,
        language: Language::En,
        ..Default::default()
    };

    let output = render_display(60, 24, &state);

    assert!(output.contains("Loading..."), "{output}");
    assert!(!output.contains("Humidity"), "{output}");
}

#[test]
fn test_render_readings() {
    let state = AppState {
        weather: Some(berlin()),
        language: Language::De,
        ..Default::default()
    };

    let output = render_display(60, 24, &state);

    assert!(output.contains("Berlin, DE"), "Should show caption:\n{output}");
    assert!(output.contains("Temperatur: 18°C"), "{output}");
    assert!(output.contains("Luftfeuchtigkeit: 62%"), "{output}");
    assert!(output.contains("Windgeschwindigkeit: 2.5 m/s"), "{output}");
    assert!(output.contains("Luftdruck: 1009 hPa"), "{output}");
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        error: Some("Ville non trouvée".into()),
        language: Language::Fr,
        ..Default::default()
    };

    let output = render_display(60, 20, &state);

    assert!(output.contains("Ville non trouvée"), "{output}");
    assert!(!output.contains("Pression"), "{output}");
}

#[test]
fn test_render_small_terminal_drops_art() {
    let state = AppState {
        weather: Some(berlin()),
        language: Language::En,
        ..Default::default()
    };

    // 10 rows: title + card(8, inner 6) + status - only caption and readings fit
    let output = render_display(60, 10, &state);

    assert!(output.contains("Berlin, DE"), "{output}");
    assert!(output.contains("Pressure: 1009 hPa"), "{output}");
}

#[test]
fn test_render_title_bar_and_help() {
    let state = AppState::default().with_theme(Theme::Dark);

    let output = render_display(80, 24, &state);

    assert!(output.contains("Поиск города..."), "{output}");
    assert!(output.contains("Язык: Русский"), "{output}");
    assert!(output.contains("Сменить тему"), "{output}");
    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("theme"), "Should show theme hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_initial_state_hint() {
    let state = AppState::default().with_language(Language::En);

    let output = render_display(60, 20, &state);

    assert!(output.contains("/  Search city..."), "{output}");
}

#[test]
fn test_render_search_bar() {
    let mut render = RenderHarness::new(60, 24);
    let mut bar = SearchBar::new();
    bar.set_open(true);

    let output = render.render_to_string_plain(|frame| {
        let props = SearchBarProps {
            query: "Reykjavik",
            placeholder: "Stadt suchen...",
            is_focused: true,
            palette: Theme::Light.palette(),
            on_change: Action::SearchInput,
            on_submit: Action::SearchSubmit,
        };
        bar.render(frame, frame.area(), props);
    });

    assert!(output.contains("Stadt suchen..."), "{output}");
    assert!(output.contains("Reykjavik"), "{output}");
    assert!(output.contains("cancel"), "{output}");
}
