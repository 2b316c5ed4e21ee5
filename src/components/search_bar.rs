use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, TextInput, TextInputProps,
    TextInputStyle, centered_rect,
};

use super::Component;
use crate::action::Action;
use crate::theme::Palette;

/// Modal city input
pub struct SearchBar {
    input: TextInput,
    modal: Modal,
    was_open: bool,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    /// Localized placeholder / title
    pub placeholder: &'a str,
    pub is_focused: bool,
    pub palette: Palette,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

pub const SEARCH_WIDTH: u16 = 50;
pub const SEARCH_HEIGHT: u16 = 7;

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the input widget each time the bar opens
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchClose],
            KeyCode::Enter => return vec![(props.on_submit)(props.query.to_string())],
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: props.placeholder,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < SEARCH_HEIGHT {
            return;
        }

        let palette = props.palette;
        let SearchBar { input, modal, .. } = self;
        let modal_area = centered_rect(SEARCH_WIDTH, SEARCH_HEIGHT, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Input
                Constraint::Min(1),    // Hint
            ])
            .split(content_area);

            let title = Line::from(vec![Span::styled(
                props.placeholder.to_string(),
                Style::default().fg(palette.accent),
            )])
            .centered();
            frame.render_widget(Paragraph::new(title), chunks[0]);

            let input_props = TextInputProps {
                value: props.query,
                placeholder: props.placeholder,
                is_focused: props.is_focused,
                style: TextInputStyle {
                    base: BaseStyle {
                        border: None,
                        padding: Padding::all(1),
                        bg: Some(palette.bg),
                        fg: Some(palette.fg),
                    },
                    placeholder_style: None,
                    cursor_style: None,
                },
                on_change: props.on_change,
                on_submit: props.on_submit,
                on_cursor_move: Some(|_| Action::Render),
            };
            input.render(frame, chunks[1], input_props);

            let hint = Line::from(vec![
                Span::styled("enter", Style::default().fg(palette.accent)),
                Span::styled(" ok  ", Style::default().fg(palette.muted)),
                Span::styled("esc", Style::default().fg(palette.accent)),
                Span::styled(" cancel", Style::default().fg(palette.muted)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(hint), chunks[2]);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(palette.surface),
                        padding: Padding::default(),
                        border: None,
                        fg: Some(palette.fg),
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::SearchClose,
                render_content: &mut render_content,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use tui_dispatch::testing::*;

    fn props(query: &str, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            query,
            placeholder: "Search city...",
            is_focused,
            palette: Theme::Light.palette(),
            on_change: Action::SearchInput,
            on_submit: Action::SearchSubmit,
        }
    }

    #[test]
    fn test_enter_submits_query() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("enter")), props("Oslo", true))
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::SearchSubmit("Oslo".into()));
    }

    #[test]
    fn test_esc_closes() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("esc")), props("Oslo", true))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchClose);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("enter")), props("Oslo", false))
            .into_iter()
            .collect();
        actions.assert_empty();
    }
}
