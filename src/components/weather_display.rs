use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, WeatherPanel, WeatherPanelProps};
use crate::action::Action;
use crate::i18n::Label;
use crate::state::AppState;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main screen: title bar, results card, key hints
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('t') => Some(Action::UiToggleTheme),
                KeyCode::Char('l') => Some(Action::UiSetLanguage(props.state.language.next())),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let palette = state.theme.palette();
        let language = state.language;

        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Results card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(vec![Span::styled(
            format!(" {}", language.label(Label::Search)),
            Style::default().fg(palette.fg).bold(),
        )]);
        let controls = Line::from(vec![
            Span::styled("[l] ", Style::default().fg(palette.accent)),
            Span::styled(
                format!("{}: {}", language.label(Label::Language), language.native_name()),
                Style::default().fg(palette.fg),
            ),
            Span::styled("  [t] ", Style::default().fg(palette.accent)),
            Span::styled(
                format!("{} ", language.label(Label::Theme)),
                Style::default().fg(palette.fg),
            ),
        ])
        .right_aligned();
        let title_bar = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(controls.width() as u16),
        ])
        .split(chunks[0]);
        frame.render_widget(Paragraph::new(title), title_bar[0]);
        frame.render_widget(Paragraph::new(controls), title_bar[1]);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted))
            .style(palette.panel());
        let card_inner = card.inner(chunks[1]);
        frame.render_widget(card, chunks[1]);

        let mut panel = WeatherPanel;
        panel.render(frame, card_inner, WeatherPanelProps { state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("t", "theme"),
                    StatusBarHint::new("l", "language"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use tui_dispatch::testing::*;

    fn send(state: &AppState, code: &str, is_focused: bool) -> Vec<Action> {
        let mut component = WeatherDisplay;
        let props = WeatherDisplayProps { state, is_focused };
        component
            .handle_event(&EventKind::Key(key(code)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_handle_event_open_search() {
        let actions = send(&AppState::default(), "/", true);
        actions.assert_count(1);
        actions.assert_first(Action::SearchOpen);
    }

    #[test]
    fn test_handle_event_theme_and_refresh() {
        let state = AppState::default();
        send(&state, "t", true).assert_first(Action::UiToggleTheme);
        send(&state, "r", true).assert_first(Action::WeatherFetch);
        send(&state, "q", true).assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_language_cycles() {
        let state = AppState::default();
        send(&state, "l", true).assert_first(Action::UiSetLanguage(Language::En));

        let state = AppState::default().with_language(Language::De);
        send(&state, "l", true).assert_first(Action::UiSetLanguage(Language::Ru));
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        send(&AppState::default(), "r", false).assert_empty();
    }

    #[test]
    fn test_render_loading() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay;

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Загрузка..."));
    }
}
