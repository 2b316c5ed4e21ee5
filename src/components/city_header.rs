use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::theme::{Palette, Theme};

/// FIGlet city name with a plain-text caption underneath
pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    /// Rendered as FIGlet art
    pub name: &'a str,
    /// Plain line under the art (name plus country)
    pub caption: &'a str,
    pub temperature: f64,
    pub theme: Theme,
    pub palette: Palette,
}

/// Rows used by the caption below the art
pub const HEADER_OVERHEAD: u16 = 1;

/// Gradient endpoints by temperature band. Dark theme uses the brighter set.
fn gradient_colors(temp: f64, theme: Theme) -> (ArtColor, ArtColor) {
    let (start, end) = match temp {
        t if t < 0.0 => ((150, 200, 255), (200, 230, 255)),
        t if t < 15.0 => ((100, 180, 255), (150, 220, 200)),
        t if t < 25.0 => ((100, 200, 150), (255, 220, 100)),
        t if t < 35.0 => ((255, 180, 80), (255, 120, 80)),
        _ => ((255, 100, 80), (255, 60, 60)),
    };
    let shade = |(r, g, b): (u8, u8, u8)| match theme {
        Theme::Dark => ArtColor::rgb(r, g, b),
        // Darken on light backgrounds so the art stays readable
        Theme::Light => ArtColor::rgb(r / 10 * 7, g / 10 * 7, b / 10 * 7),
    };
    (shade(start), shade(end))
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),                  // FIGlet city name
            Constraint::Length(HEADER_OVERHEAD), // Caption
        ])
        .split(area);

        if chunks[0].height > 0 {
            let (start, end) = gradient_colors(props.temperature, props.theme);
            let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
            frame.render_widget(ArtBox::new(&renderer, props.name), chunks[0]);
        }

        let caption = Line::from(vec![Span::styled(
            props.caption.to_string(),
            Style::default().fg(props.palette.fg).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(caption), chunks[1]);
    }
}
