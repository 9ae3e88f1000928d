//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The customer query input.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Replace the whole text, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		self.textarea = TextArea::new(vec![text.to_string()]);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.move_cursor(CursorMove::End);
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Line breaks are never inserted.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
		{
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_to_the_initial_text() {
		let mut input = QueryInput::new("an");
		assert!(input.input(key(KeyCode::Char('a'))));
		assert_eq!(input.text(), "ana");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "an");
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = QueryInput::new("ana");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "ana");
	}

	#[test]
	fn cursor_moves_do_not_count_as_edits() {
		let mut input = QueryInput::new("ana");
		assert!(!input.input(key(KeyCode::Left)));
	}

	#[test]
	fn set_text_replaces_the_line() {
		let mut input = QueryInput::new("ana");
		input.set_text("Ana Gómez");
		assert_eq!(input.text(), "Ana Gómez");
		input.input(key(KeyCode::Char('!')));
		assert_eq!(input.text(), "Ana Gómez!");
	}
}
