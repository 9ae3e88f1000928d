use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeRegistration};

pub const DEFAULT_THEME_NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
};

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new(DEFAULT_THEME_NAME, SLATE).aliases(["dark", "default"]),
		ThemeRegistration::new("light", LIGHT).aliases(["day", "claro"]),
	]
}
