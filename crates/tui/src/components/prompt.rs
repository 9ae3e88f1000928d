use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub prompt: &'a str,
	pub input: &'a QueryInput<'a>,
	/// Shown while the input is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Lookup activity shown at the right edge of the prompt.
pub struct ProgressState<'a> {
	pub label: &'a str,
	/// Draw the spinner in front of the label.
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt label, the input and the progress indicator.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		prompt,
		input,
		placeholder,
		area,
		theme,
	} = input;

	let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Fill(1)]).areas(area);

	frame
		.buffer_mut()
		.set_line(prompt_area.x, prompt_area.y, &Line::styled(prompt, theme.prompt), prompt_area.width);
	input.render_textarea(frame, input_area);

	if input.text().is_empty()
		&& let Some(placeholder) = placeholder
	{
		render_placeholder(frame, input_area, placeholder, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width <= 1 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell to the cursor.
	let display_text: String = text.chars().take(area.width as usize - 1).collect();
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width - 1,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 || progress.label.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if progress.busy {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	line.spans.push(Span::styled(progress.label.to_string(), muted_style));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.rev()
		.find(|&x| buffer.cell((x, row)).is_some_and(|cell| !cell.symbol().trim().is_empty()));
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
