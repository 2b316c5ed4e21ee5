use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::city_header::HEADER_OVERHEAD;
use super::{CityHeader, CityHeaderProps, Component};
use crate::action::Action;
use crate::i18n::{Label, Language};
use crate::state::{AppState, WeatherResult};
use crate::theme::Palette;

/// Results area: loading text, error text, or the four readings
pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

/// Readings block: blank + four labeled lines
const READINGS_HEIGHT: u16 = 5;

/// FIGlet heights: terminus(6), miniwi(4), none.
const ART_TIERS: [u16; 3] = [6, 4, 0];

/// Largest FIGlet height that still leaves room for caption and readings
fn art_height(area_height: u16) -> u16 {
    let budget = area_height.saturating_sub(HEADER_OVERHEAD + READINGS_HEIGHT);
    ART_TIERS
        .iter()
        .copied()
        .find(|&tier| tier <= budget)
        .unwrap_or(0)
}

/// The four labeled reading lines, in display order
pub fn reading_lines(weather: &WeatherResult, language: Language) -> [String; 4] {
    [
        format!("{}: {}°C", language.label(Label::Temperature), weather.main.temp),
        format!("{}: {}%", language.label(Label::Humidity), weather.main.humidity),
        format!("{}: {} m/s", language.label(Label::Wind), weather.wind.speed),
        format!("{}: {} hPa", language.label(Label::Pressure), weather.main.pressure),
    ]
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = state.theme.palette();

        match PanelView::from_state(state) {
            PanelView::Loading => render_message(
                frame,
                area,
                state.language.label(Label::Loading),
                Style::default().fg(palette.muted),
            ),
            PanelView::Error(error) => {
                render_message(frame, area, error, Style::default().fg(palette.error).bold())
            }
            PanelView::Ready(weather) => render_ready(frame, area, state, weather, &palette),
            PanelView::Empty => render_hint(frame, area, state.language, &palette),
        }
    }
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    weather: &WeatherResult,
    palette: &Palette,
) {
    let art_h = art_height(area.height);
    let chunks = Layout::vertical([
        Constraint::Length(art_h + HEADER_OVERHEAD),
        Constraint::Length(READINGS_HEIGHT),
    ])
    .flex(Flex::Center)
    .split(area);

    let caption = weather.display_name();
    let mut header = CityHeader;
    header.render(
        frame,
        chunks[0],
        CityHeaderProps {
            name: &weather.name,
            caption: &caption,
            temperature: weather.main.temp,
            theme: state.theme,
            palette: *palette,
        },
    );

    let mut lines = vec![Line::default()];
    lines.extend(
        reading_lines(weather, state.language)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(palette.fg))).centered()),
    );
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let line = Line::from(vec![Span::styled(message.to_string(), style)]).centered();
    frame.render_widget(Paragraph::new(line), chunks[0]);
}

fn render_hint(frame: &mut Frame, area: Rect, language: Language, palette: &Palette) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let hint = Line::from(vec![
        Span::styled("/", Style::default().fg(palette.accent).bold()),
        Span::styled(
            format!("  {}", language.label(Label::Search)),
            Style::default().fg(palette.muted),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

// ============================================================================
// Helpers
// ============================================================================

enum PanelView<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a WeatherResult),
    Empty,
}

impl<'a> PanelView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.loading {
            return PanelView::Loading;
        }
        if let Some(error) = state.visible_error() {
            return PanelView::Error(error);
        }
        match state.visible_weather() {
            Some(weather) => PanelView::Ready(weather),
            None => PanelView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Main, Wind};

    #[test]
    fn test_art_height_tiers() {
        assert_eq!(art_height(30), 6);
        assert_eq!(art_height(11), 4);
        assert_eq!(art_height(8), 0);
        assert_eq!(art_height(0), 0);
    }

    #[test]
    fn test_reading_lines_match_provider_numbers() {
        let weather = WeatherResult {
            name: "Paris".into(),
            main: Main {
                temp: 12.34,
                humidity: 71.0,
                pressure: 1015.0,
            },
            wind: Wind { speed: 3.6 },
            ..Default::default()
        };

        let lines = reading_lines(&weather, Language::En);

        assert_eq!(
            lines,
            [
                "Temperature: 12.34°C".to_string(),
                "Humidity: 71%".to_string(),
                "Wind Speed: 3.6 m/s".to_string(),
                "Pressure: 1015 hPa".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_wins_over_stale_weather() {
        let state = AppState {
            weather: Some(WeatherResult::default()),
            error: Some("x".into()),
            ..Default::default()
        };
        assert!(matches!(PanelView::from_state(&state), PanelView::Error("x")));
    }
}
