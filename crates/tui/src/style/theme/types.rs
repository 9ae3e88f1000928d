use ratatui::style::{Color, Style};

/// Styles for each element of the host screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders, titles and table headers.
	pub header: Style,
	/// The active dropdown row.
	pub row_highlight: Style,
	/// The prompt label in front of the input.
	pub prompt: Style,
	/// Placeholder, loading and empty-result text.
	pub empty: Style,
	/// Emphasis: VIP badge, selected customer name.
	pub highlight: Style,
	/// Lookup failures.
	pub error: Style,
}

impl Theme {
	/// Border colour shared by every bordered block.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}
}

/// A theme together with the names it can be looked up by.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Add alternate names for this theme.
	pub fn aliases<I, S>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
	pub is_default: bool,
}
