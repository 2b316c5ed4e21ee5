pub mod city_header;
pub mod search_bar;
pub mod weather_display;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_header::{CityHeader, CityHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps, reading_lines};
